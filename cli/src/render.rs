use std::io::{self, Write};

use todo_core::{ListView, Notice};

/// One line per todo: `[x]    1  title  (Jan 1, 2024)`.
pub fn write_list(out: &mut impl Write, view: &ListView) -> io::Result<()> {
    if view.is_empty() {
        return writeln!(out, "(no todos)");
    }
    for item in &view.items {
        let mark = if item.completed { 'x' } else { ' ' };
        writeln!(
            out,
            "[{mark}] {:>4}  {}  ({})",
            item.id.to_string(),
            printable(&item.title),
            item.date
        )?;
    }
    Ok(())
}

pub fn write_notices(err: &mut impl Write, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        writeln!(err, "error: {}", notice.message())?;
    }
    Ok(())
}

/// Titles are user data; keep terminal control sequences out of the output.
fn printable(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_control() { '\u{fffd}' } else { c })
        .collect()
}
