use clap::Parser;

const DEFAULT_WIDTH: u16 = 18;
const DEFAULT_HEIGHT: u16 = 18;
const DEFAULT_FPS: u16 = 10;
const DEFAULT_SCALE: u16 = 25;

/// Command-line options. Numeric values are taken as raw strings so that a
/// malformed number can fall back to its default with a warning instead of
/// aborting; unknown options still exit with usage.
#[derive(Debug, Default, Parser)]
#[command(name = "gridsnake", about = "A classic snake game for the terminal")]
pub struct CliOptions {
    /// Grid cells horizontally
    #[arg(short = 'w', long)]
    pub width: Option<String>,

    /// Grid cells vertically
    #[arg(long)]
    pub height: Option<String>,

    /// Ticks per second
    #[arg(short = 'f', long)]
    pub fps: Option<String>,

    /// Cell size in pixels, for graphical frontends
    #[arg(short = 's', long)]
    pub scale: Option<String>,

    /// Do not load the food sprite
    #[arg(short = 'i', long)]
    pub no_image: bool,

    /// Do not play the eat sound
    #[arg(short = 'n', long)]
    pub no_sound: bool,
}

/// Immutable game configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub fps: u16,
    /// Pixels per cell. A hint for graphical frontends; terminal cells have
    /// a fixed size, so the bundled renderer does not consume it.
    pub scale: u16,
    pub images: bool,
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            scale: DEFAULT_SCALE,
            images: true,
            sound: true,
        }
    }
}

impl GameConfig {
    /// Applies `opts` over the defaults. A value that does not parse as a
    /// positive integer is reported on stderr and its default is kept.
    pub fn resolve(opts: &CliOptions) -> Self {
        GameConfig {
            width: numeric_opt("width", &opts.width, DEFAULT_WIDTH),
            height: numeric_opt("height", &opts.height, DEFAULT_HEIGHT),
            fps: numeric_opt("fps", &opts.fps, DEFAULT_FPS),
            scale: numeric_opt("scale", &opts.scale, DEFAULT_SCALE),
            images: !opts.no_image,
            sound: !opts.no_sound,
        }
    }
}

fn numeric_opt(name: &str, value: &Option<String>, default: u16) -> u16 {
    let raw = match value {
        Some(raw) => raw,
        None => return default,
    };

    match raw.parse::<u16>() {
        Ok(parsed) if parsed >= 1 => parsed,
        _ => {
            eprintln!("Could not set {} from << {} >>, keeping {}", name, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let config = GameConfig::resolve(&CliOptions::default());
        assert_eq!(config.width, 18);
        assert_eq!(config.height, 18);
        assert_eq!(config.fps, 10);
        assert_eq!(config.scale, 25);
        assert!(config.images);
        assert!(config.sound);
    }

    #[test]
    fn valid_numeric_options_are_applied() {
        let opts = CliOptions {
            width: Some("30".into()),
            height: Some("12".into()),
            fps: Some("25".into()),
            ..CliOptions::default()
        };

        let config = GameConfig::resolve(&opts);
        assert_eq!(config.width, 30);
        assert_eq!(config.height, 12);
        assert_eq!(config.fps, 25);
        assert_eq!(config.scale, 25);
    }

    #[test]
    fn malformed_numbers_keep_their_defaults() {
        let opts = CliOptions {
            width: Some("wide".into()),
            height: Some("-4".into()),
            fps: Some("0".into()),
            scale: Some("".into()),
            ..CliOptions::default()
        };

        let config = GameConfig::resolve(&opts);
        assert_eq!(config.width, 18);
        assert_eq!(config.height, 18);
        assert_eq!(config.fps, 10);
        assert_eq!(config.scale, 25);
    }

    #[test]
    fn flags_disable_the_optional_assets() {
        let opts = CliOptions {
            no_image: true,
            no_sound: true,
            ..CliOptions::default()
        };

        let config = GameConfig::resolve(&opts);
        assert!(!config.images);
        assert!(!config.sound);
    }

    #[test]
    fn long_and_short_flags_parse() {
        let opts =
            CliOptions::parse_from(["gridsnake", "-w", "24", "--height", "20", "-n", "-i"]);
        assert_eq!(opts.width.as_deref(), Some("24"));
        assert_eq!(opts.height.as_deref(), Some("20"));
        assert!(opts.no_sound);
        assert!(opts.no_image);
    }
}
