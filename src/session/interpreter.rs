use std::io::{BufRead, Write};

use anyhow::Context;

use crate::{
    foundation::error::RasterResult,
    manager::ImageManager,
    session::command::Command,
};

/// Counters reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub executed: usize,
    pub failed: usize,
    pub quit: bool,
}

/// Line-oriented command interpreter over an [`ImageManager`].
///
/// Command failures are reported to `out` and the session moves on to the next
/// line. Only failures to read input or write output end the session early.
pub struct Session<'m, W: Write> {
    manager: &'m mut ImageManager,
    out: W,
}

impl<'m, W: Write> Session<'m, W> {
    pub fn new(manager: &'m mut ImageManager, out: W) -> Self {
        Self { manager, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> RasterResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        for (lineno, line) in input.lines().enumerate() {
            let line = line.context("read command input")?;
            let parsed = Command::parse(&line, self.manager.registry());
            let outcome = match parsed {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => {
                    summary.quit = true;
                    break;
                }
                Ok(Some(cmd)) => self.execute(&cmd),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(msg) => {
                    summary.executed += 1;
                    writeln!(self.out, "{msg}").context("write session output")?;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(line = lineno + 1, error = %e, "command failed");
                    writeln!(self.out, "error: {e}").context("write session output")?;
                }
            }
        }
        self.out.flush().context("flush session output")?;
        Ok(summary)
    }

    /// Execute one command, returning the line to report.
    pub fn execute(&mut self, cmd: &Command) -> RasterResult<String> {
        match cmd {
            Command::Load { path, name } => {
                self.manager.load(path, name)?;
                Ok(format!("loaded {name} from {}", path.display()))
            }
            Command::Save { path, name } => {
                self.manager.save(name, path)?;
                Ok(format!("saved {name} to {}", path.display()))
            }
            Command::Menu => Ok(self.menu()),
            Command::Quit => Ok("bye".to_string()),
            Command::Transform {
                op,
                args,
                source,
                result,
            } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                self.manager.transform(op, &args, source, result)?;
                Ok(format!("{op}: {source} -> {result}"))
            }
        }
    }

    fn menu(&self) -> String {
        let mut lines = vec![
            "supported commands:".to_string(),
            "  load file-path image-name".to_string(),
            "  save file-path image-name".to_string(),
        ];
        lines.extend(
            self.manager
                .registry()
                .specs()
                .map(|s| format!("  {}", s.usage)),
        );
        lines.push("  menu".to_string());
        lines.push("  q | quit".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/interpreter.rs"]
mod tests;
