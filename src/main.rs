use std::fs::File;
use std::thread::sleep;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, LevelFilter};
use simplelog::{Config as LogConfig, WriteLogger};

use gridsnake::audio::EatSound;
use gridsnake::config::{CliOptions, GameConfig};
use gridsnake::game::{GameState, Status};
use gridsnake::point::Direction::{self, *};
use gridsnake::term::TermRenderer;

const LOG_FILE: &str = "gridsnake.log";

enum Intent {
    Turn(Direction),
    Quit,
}

fn main() -> crossterm::Result<()> {
    let opts = CliOptions::parse();
    let config = GameConfig::resolve(&opts);

    // Raw mode makes stderr useless mid-game, so everything after startup
    // logs to a file
    if let Ok(file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Info, LogConfig::default(), file);
    }
    info!(
        "starting a {}x{} board at {} ticks per second",
        config.width, config.height, config.fps
    );

    let mut state = GameState::new(&config);
    let mut sound = EatSound::new(config.sound);
    let mut term = TermRenderer::new(&config)?;
    term.setup()?;

    // Restore the terminal before surfacing any loop error
    let outcome = run(&mut state, &mut term, &mut sound, &config);
    term.restore()?;
    let score = outcome?;

    println!("Final score: {}", score);
    Ok(())
}

fn run(
    state: &mut GameState,
    term: &mut TermRenderer,
    sound: &mut EatSound,
    config: &GameConfig,
) -> crossterm::Result<usize> {
    let interval = Duration::from_millis(1000 / u64::from(config.fps));

    term.draw(&state.frame())?;

    loop {
        let tick_start = Instant::now();

        let mut quit = false;
        for key in term.read_key_events_queue()? {
            match key_intent(&key) {
                Some(Intent::Turn(direction)) => state.queue_direction(direction),
                Some(Intent::Quit) => quit = true,
                None => {}
            }
        }
        if quit {
            info!("quit requested with score {}", state.score());
            break;
        }

        let events = state.tick();
        if events.ate {
            sound.play();
        }
        if state.status == Status::Lost {
            info!("game over with score {}", state.score());
            break;
        }

        term.draw(&state.frame())?;
        sleep(interval.saturating_sub(tick_start.elapsed()));
    }

    Ok(state.score())
}

fn key_intent(ev: &KeyEvent) -> Option<Intent> {
    if matches!(
        ev,
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
    ) {
        return Some(Intent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Intent::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Intent::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Intent::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Intent::Turn(Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}
