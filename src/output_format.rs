use crate::error::{ExtractError, Result};
use crate::pipeline::context::Symbol;
use std::fs::File;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const CSV_HEADERS: [&str; 3] = ["ID", "Name", "Description"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of objects
    Json,
    /// Comma-separated values with an `ID,Name,Description` header
    Csv,
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
        }
    }

    pub fn write<W: Write>(&self, output: W, symbols: &[Symbol]) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(output, symbols),
            OutputFormat::Csv => write_csv(output, symbols),
        }
    }

    /// Create (or truncate) `path` and write all symbols to it
    pub fn write_file(&self, path: &Path, symbols: &[Symbol]) -> Result<()> {
        self.create_and_write(path, symbols)
            .map_err(|e| ExtractError::WriteFailed {
                format: self.label(),
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
        tracing::debug!(
            path = %path.display(),
            kind = self.label(),
            count = symbols.len(),
            "output written"
        );
        Ok(())
    }

    fn create_and_write(&self, path: &Path, symbols: &[Symbol]) -> Result<()> {
        let file = File::create(path)?;
        let mut output = BufWriter::new(file);
        self.write(&mut output, symbols)?;
        output.flush()?;
        Ok(())
    }
}

/// Pretty printer that escapes everything outside printable ASCII as `\uXXXX`
/// (surrogate pairs above the BMP), so output files are pure ASCII.
struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    fn new() -> Self {
        AsciiPrettyFormatter {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Write symbols as a JSON array indented by two spaces, without a trailing
/// newline. Non-ASCII text is written as `\uXXXX` escapes.
pub fn write_json<W: Write>(output: W, symbols: &[Symbol]) -> Result<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(output, AsciiPrettyFormatter::new());
    symbols.serialize(&mut serializer)?;
    Ok(())
}

/// Write symbols as CSV rows under a fixed header, quoting only where needed.
/// Records end in `\r\n`.
pub fn write_csv<W: Write>(output: W, symbols: &[Symbol]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(output);

    writer.write_record(CSV_HEADERS)?;
    for symbol in symbols {
        writer.write_record([&symbol.id, &symbol.name, &symbol.description])?;
    }
    writer.flush()?;
    Ok(())
}
