// src/input_format.rs - Line reading and envelope interpretation

use crate::error::{ExtractError, Result};
use crate::pipeline::context::LineKind;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A non-blank input line, interpreted either as a JSON envelope or as raw text
#[derive(Debug, Clone, PartialEq)]
pub enum LogLine<'a> {
    /// JSON object; holds its `message` field (empty if absent or not a string)
    Envelope { message: String },
    /// Line that is not a JSON object, used as-is
    Raw(&'a str),
}

impl<'a> LogLine<'a> {
    /// Interpret a trimmed line. Structured parse is attempted first; anything
    /// that is not a JSON object falls back to raw text.
    pub fn parse(line: &'a str) -> Self {
        match serde_json::from_str::<serde_json::Value>(line) {
            Ok(serde_json::Value::Object(obj)) => {
                let message = obj
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string();
                LogLine::Envelope { message }
            }
            Ok(_) | Err(_) => LogLine::Raw(line),
        }
    }

    /// Candidate text to search for a symbol
    pub fn text(&self) -> &str {
        match self {
            LogLine::Envelope { message } => message,
            LogLine::Raw(line) => line,
        }
    }

    pub fn kind(&self) -> LineKind {
        match self {
            LogLine::Envelope { .. } => LineKind::Envelope,
            LogLine::Raw(_) => LineKind::Raw,
        }
    }
}

/// Forward-only reader yielding numbered lines (1-based).
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            line_number: 0,
        }
    }

    /// Read up to the next `\n` and queue every line it contains
    fn fill_pending(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        let chunk = std::str::from_utf8(&self.buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending.extend(chunk.split('\r').map(str::to_string));
        Ok(true)
    }
}

impl LineReader<BufReader<File>> {
    /// Open a log file for reading. A path that does not exist is reported as
    /// `ExtractError::MissingInput`; other open failures as IO errors.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExtractError::MissingInput {
                path: path.to_path_buf(),
            },
            _ => ExtractError::IoError(e),
        })?;
        Ok(LineReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            match self.fill_pending() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }

        let line = self.pending.pop_front()?;
        self.line_number += 1;
        Some(Ok((self.line_number, line)))
    }
}
