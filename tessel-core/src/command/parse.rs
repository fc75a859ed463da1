//! Ex-style command line parsing
//!
//! Accepts the window subset of Vim's command language: full names and the
//! usual abbreviations, an optional leading `:`, and whitespace-separated
//! arguments.

use std::str::FromStr;

use super::{CommandError, CommandResult, WindowCommand};
use crate::layout::{Direction, ResizeDirection, SplitOrientation};

impl FromStr for WindowCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let line = line.strip_prefix(':').unwrap_or(line).trim_start();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name {
            "" => return Err(parse_error("empty command")),
            "split" | "sp" => no_args(name, &args, Self::Split(SplitOrientation::Horizontal))?,
            "vsplit" | "vs" => no_args(name, &args, Self::Split(SplitOrientation::Vertical))?,
            "close" | "clo" => no_args(name, &args, Self::Close)?,
            "only" | "on" => no_args(name, &args, Self::Only)?,
            "wincmd" | "winc" => {
                let [key] = args[..] else {
                    return Err(parse_error(format!("{name}: expected one argument")));
                };
                wincmd(key)?
            }
            "tabnew" => no_args(name, &args, Self::TabNew)?,
            "tabnext" | "tabn" => match args[..] {
                [] => Self::TabNext,
                [n] => {
                    let n: usize = number(n)?;
                    if n == 0 {
                        return Err(parse_error("tab numbers start at 1"));
                    }
                    Self::TabGoto(n)
                }
                _ => return Err(parse_error(format!("{name}: too many arguments"))),
            },
            "tabprevious" | "tabp" | "tabNext" | "tabN" => no_args(name, &args, Self::TabPrev)?,
            "tabclose" | "tabc" => no_args(name, &args, Self::TabClose)?,
            "tabrename" => {
                if rest.is_empty() {
                    return Err(parse_error("tabrename: expected a name"));
                }
                Self::TabRename(rest.to_string())
            }
            "click" => {
                let [x, y] = args[..] else {
                    return Err(parse_error("click: expected X Y"));
                };
                Self::Click {
                    x: number(x)?,
                    y: number(y)?,
                }
            }
            "screen" => {
                let [width, height] = args[..] else {
                    return Err(parse_error("screen: expected WIDTH HEIGHT"));
                };
                Self::ResizeScreen {
                    width: number(width)?,
                    height: number(height)?,
                }
            }
            other => return Err(parse_error(format!("not a window command: {other}"))),
        };
        Ok(command)
    }
}

fn wincmd(key: &str) -> CommandResult<WindowCommand> {
    let command = match key {
        "h" => WindowCommand::Focus(Direction::Left),
        "j" => WindowCommand::Focus(Direction::Down),
        "k" => WindowCommand::Focus(Direction::Up),
        "l" => WindowCommand::Focus(Direction::Right),
        "w" => WindowCommand::CycleFocus { forward: true },
        "W" => WindowCommand::CycleFocus { forward: false },
        "+" => WindowCommand::Resize(ResizeDirection::Increase),
        "-" => WindowCommand::Resize(ResizeDirection::Decrease),
        "=" => WindowCommand::Equalize,
        "s" | "S" => WindowCommand::Split(SplitOrientation::Horizontal),
        "v" => WindowCommand::Split(SplitOrientation::Vertical),
        "c" | "q" => WindowCommand::Close,
        "o" => WindowCommand::Only,
        other => return Err(parse_error(format!("wincmd: unknown key '{other}'"))),
    };
    Ok(command)
}

fn no_args(name: &str, args: &[&str], command: WindowCommand) -> CommandResult<WindowCommand> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(parse_error(format!(
            "{name}: unexpected argument '{}'",
            args.join(" ")
        )))
    }
}

fn number<T: FromStr>(s: &str) -> CommandResult<T> {
    s.parse()
        .map_err(|_| parse_error(format!("invalid number '{s}'")))
}

fn parse_error(message: impl Into<String>) -> CommandError {
    CommandError::Parse(message.into())
}

/// Parses a script of commands, one per line.
///
/// Blank lines and lines starting with `#` or `"` are skipped. The first
/// bad line aborts parsing; its error is prefixed with the line number.
///
/// # Errors
///
/// Returns `CommandError::Parse` for the first line that does not parse.
pub fn parse_script(script: &str) -> CommandResult<Vec<WindowCommand>> {
    let _span = tracing::debug_span!(crate::tracing::span_names::COMMAND_PARSE).entered();

    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#') && !line.starts_with('"')
        })
        .map(|(index, line)| {
            line.parse::<WindowCommand>().map_err(|err| match err {
                CommandError::Parse(message) => {
                    parse_error(format!("line {}: {message}", index + 1))
                }
                other => other,
            })
        })
        .collect()
}
