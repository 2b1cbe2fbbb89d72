pub mod command;
pub mod interpreter;

pub use command::Command;
pub use interpreter::{Session, SessionSummary};
