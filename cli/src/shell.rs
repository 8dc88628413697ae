//! Interactive loop: one command per line.

use std::io::{self, BufRead, Write};

use todo_core::{TodoId, Transport};

use crate::app::{Action, App};

pub const HELP: &str = "\
commands:
  ls               reload the list
  add <title>      create a todo
  done <id>        mark a todo completed
  undo <id>        mark a todo not completed
  rm <id>          delete a todo
  html             print the list as HTML
  help             show this text
  quit             leave";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Run(Action),
    Help,
    Quit,
}

/// `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word {
        "ls" | "list" => ShellCommand::Run(Action::List),
        "add" => ShellCommand::Run(Action::Add(rest.to_string())),
        "done" => ShellCommand::Run(Action::Check {
            id: parse_id(word, rest)?,
            checked: true,
        }),
        "undo" => ShellCommand::Run(Action::Check {
            id: parse_id(word, rest)?,
            checked: false,
        }),
        "rm" | "delete" => ShellCommand::Run(Action::Remove(parse_id(word, rest)?)),
        "html" => ShellCommand::Run(Action::Html),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Some(command))
}

fn parse_id(command: &str, rest: &str) -> Result<TodoId, String> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(format!("usage: {command} <id>"));
    }
    rest.parse::<TodoId>().map_err(|e| e.to_string())
}

/// Loads once, then serves commands from `input` until EOF or `quit`.
pub fn run<T: Transport>(
    app: &mut App<T>,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    app.run(Action::List, out, err)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        match parse_line(&line?) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Run(action))) => app.run(action, out, err)?,
            Ok(Some(ShellCommand::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(ShellCommand::Quit)) => return Ok(()),
            Err(message) => writeln!(err, "{message}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)
}
