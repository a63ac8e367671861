mod terminal;

pub use terminal::TerminalStrip;
