use std::io::{stdout, Write};

use log::warn;

const BELL: &[u8] = b"\x07";

/// Fire-and-forget eat sound, rendered as the terminal bell. A failed write
/// logs once and disables the sound for the rest of the session.
pub struct EatSound {
    available: bool,
}

impl EatSound {
    pub fn new(enabled: bool) -> Self {
        EatSound { available: enabled }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn play(&mut self) {
        if !self.available {
            return;
        }

        let mut out = stdout();
        if out.write_all(BELL).and_then(|_| out.flush()).is_err() {
            warn!("could not play the eat sound, sound disabled");
            self.available = false;
        }
    }
}
