mod terminal;

pub use terminal::{LinePrompter, TerminalPrompter};
