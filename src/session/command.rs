use std::path::PathBuf;

use crate::{
    foundation::error::{RasterError, RasterResult},
    manager::OperationRegistry,
};

/// One parsed line of a command script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Load { path: PathBuf, name: String },
    Save { path: PathBuf, name: String },
    Menu,
    Quit,
    Transform {
        op: String,
        args: Vec<String>,
        source: String,
        result: String,
    },
}

impl Command {
    /// Parse a script line. Blank lines and `#` comments yield `None`.
    ///
    /// Operation lines are `<op> [int] <source> <result>`; whether the integer is
    /// expected comes from the registry.
    pub fn parse(line: &str, registry: &OperationRegistry) -> RasterResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (head, rest) = (tokens[0], &tokens[1..]);

        let cmd = match head.to_ascii_lowercase().as_str() {
            "q" | "quit" => Command::Quit,
            "menu" => Command::Menu,
            "load" => {
                let [path, name] = exact::<2>(head, rest)?;
                Command::Load {
                    path: PathBuf::from(path),
                    name: name.to_string(),
                }
            }
            "save" => {
                let [path, name] = exact::<2>(head, rest)?;
                Command::Save {
                    path: PathBuf::from(path),
                    name: name.to_string(),
                }
            }
            _ => {
                let spec = registry.spec(head)?;
                if spec.takes_int {
                    let [arg, source, result] = exact::<3>(head, rest)?;
                    Command::Transform {
                        op: spec.name.to_string(),
                        args: vec![arg.to_string()],
                        source: source.to_string(),
                        result: result.to_string(),
                    }
                } else {
                    let [source, result] = exact::<2>(head, rest)?;
                    Command::Transform {
                        op: spec.name.to_string(),
                        args: Vec::new(),
                        source: source.to_string(),
                        result: result.to_string(),
                    }
                }
            }
        };
        Ok(Some(cmd))
    }
}

fn exact<'a, const N: usize>(head: &str, rest: &[&'a str]) -> RasterResult<[&'a str; N]> {
    <[&str; N]>::try_from(rest).map_err(|_| {
        RasterError::invalid_argument(format!(
            "'{head}' expects {N} arguments, got {}",
            rest.len()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/command.rs"]
mod tests;
