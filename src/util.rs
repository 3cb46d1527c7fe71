// util.rs

use std::fmt::Display;
use std::io::Write;

pub fn writeln_ignore_broken_pipe<W: Write + ?Sized, S: Display>(w: &mut W, s: S) -> std::io::Result<()> {
    match writeln!(w, "{}", s) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
