//! Streaming reader for the delimited name list.
//!
//! Records are produced one at a time; the list is never collected in memory.
//! Quoting follows the usual CSV conventions: a field that starts with `"` may
//! contain the delimiter and line breaks, and `""` inside it is a literal quote.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// One row of the name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// 1-based line where the row starts
    pub line: usize,
    /// First field of the row, verbatim
    pub name: String,
}

pub struct RosterReader<R> {
    reader: R,
    delimiter: char,
    line: usize,
    started: bool,
    done: bool,
}

/// Open a roster file for streaming.
pub fn open_roster(path: &Path, delimiter: char) -> Result<RosterReader<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(RosterReader::new(BufReader::new(file), delimiter))
}

impl<R: BufRead> RosterReader<R> {
    pub fn new(reader: R, delimiter: char) -> Self {
        Self {
            reader,
            delimiter,
            line: 0,
            started: false,
            done: false,
        }
    }

    fn read_physical_line(&mut self, buf: &mut String) -> Result<bool> {
        buf.clear();
        if self.reader.read_line(buf)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        if !self.started {
            self.started = true;
            if buf.starts_with('\u{feff}') {
                buf.drain(..'\u{feff}'.len_utf8());
            }
        }
        Ok(true)
    }

    /// Read the next non-blank record as (starting line, fields).
    fn read_record(&mut self) -> Result<Option<(usize, Vec<String>)>> {
        let mut buf = String::new();
        loop {
            if !self.read_physical_line(&mut buf)? {
                return Ok(None);
            }
            if !buf.trim_end_matches(['\r', '\n']).is_empty() {
                break;
            }
            debug!(line = self.line, "skipping blank row");
        }

        let start_line = self.line;
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut quoted = false;

        loop {
            let mut chars = buf.chars().peekable();
            while let Some(c) = chars.next() {
                if in_quotes {
                    if c == '"' {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            field.push('"');
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        field.push(c);
                    }
                } else if c == '"' && field.is_empty() && !quoted {
                    in_quotes = true;
                    quoted = true;
                } else if c == self.delimiter {
                    fields.push(std::mem::take(&mut field));
                    quoted = false;
                } else if c != '\r' && c != '\n' {
                    field.push(c);
                }
            }

            if !in_quotes {
                break;
            }
            if !self.read_physical_line(&mut buf)? {
                return Err(Error::UnterminatedQuote { line: start_line });
            }
        }
        fields.push(field);

        Ok(Some((start_line, fields)))
    }
}

impl<R: BufRead> Iterator for RosterReader<R> {
    type Item = Result<Recipient>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some((line, fields))) => {
                let name = fields.into_iter().next().unwrap_or_default();
                if name.trim().is_empty() {
                    Some(Err(Error::EmptyName { line }))
                } else {
                    Some(Ok(Recipient { line, name }))
                }
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
