mod commands;
mod history;

pub use commands::{Command, Preview};
pub use history::CommandHistory;
