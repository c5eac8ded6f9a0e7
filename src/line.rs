//! Line source and sink capabilities.
//!
//! The reader pulls one line at a time from a [`LineSource`] and the writer
//! pushes one line at a time into a [`LineSink`]. Neither knows where the
//! lines come from or go to.

use std::io::{self, BufRead, Write};

/// Pull side of the line protocol.
pub trait LineSource {
    /// Next line without its terminator, or `Ok(None)` at end of stream.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Push side of the line protocol.
pub trait LineSink {
    /// Emit one line. The sink supplies the terminator, if any.
    fn push_line(&mut self, line: &str) -> io::Result<()>;
}

/// Lines read from any buffered reader, with `\n` or `\r\n` stripped.
pub struct ReadLines<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> ReadLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> LineSource for ReadLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next().transpose()
    }
}

/// In-memory line source over an iterator of strings.
pub struct IterSource<I> {
    iter: I,
}

impl<I, S> LineSource for IterSource<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.iter.next().map(Into::into))
    }
}

/// Create a line source from anything iterable over strings.
///
/// ```
/// use member_pivot::{from_lines, read_projects};
///
/// let projects = read_projects(&mut from_lines(["<projects>", "</projects>"])).unwrap();
/// assert!(projects.is_empty());
/// ```
pub fn from_lines<I, S>(lines: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    IterSource {
        iter: lines.into_iter(),
    }
}

/// Line source backed by a closure returning `None` at end of stream.
pub struct FnSource<F> {
    f: F,
}

impl<F> LineSource for FnSource<F>
where
    F: FnMut() -> Option<String>,
{
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok((self.f)())
    }
}

pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: FnMut() -> Option<String>,
{
    FnSource { f }
}

/// Writes each pushed line followed by `\n`.
pub struct WriteLines<W> {
    writer: W,
}

impl<W: Write> WriteLines<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriteLines<W> {
    fn push_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }
}

impl LineSink for Vec<String> {
    fn push_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
