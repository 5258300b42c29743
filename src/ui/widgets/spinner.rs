use std::time::{Duration, Instant};

const SPINNER_FRAMES_DOTS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// Delay between frames while a command runs
pub const FRAME_INTERVAL: Duration = Duration::from_millis(80);

#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
    started: Instant,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
            started: Instant::now(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = frames(supports_unicode);
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }
}

fn frames(supports_unicode: bool) -> &'static [char] {
    if supports_unicode {
        SPINNER_FRAMES_DOTS
    } else {
        SPINNER_FRAMES_ASCII
    }
}
