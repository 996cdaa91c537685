use crate::error::{BumpError, BumpResult};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Map, Value};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Reads `path` as a JSON document, keeping key order and number text as written.
pub fn read_json_document(path: &Path) -> BumpResult<Value> {
    let bytes = fs::read(path).map_err(|e| BumpError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| BumpError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads `path` and requires the top level to be an object.
pub fn read_json_object(path: &Path) -> BumpResult<Map<String, Value>> {
    match read_json_document(path)? {
        Value::Object(map) => Ok(map),
        other => Err(BumpError::schema(
            path,
            format!("expected a JSON object at top level, found {}", kind_of(&other)),
        )),
    }
}

/// Serializes with 4-space indentation and ASCII-only output, no trailing newline.
pub fn to_ascii_pretty_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = AsciiPrettyFormatter::new(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // Every byte the formatter emits is ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrites `path` with the rendered document. The document is rendered
/// in full before the file is opened, so a serialization failure leaves it intact.
pub fn write_json_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> BumpResult<()> {
    let rendered = to_ascii_pretty_string(value).map_err(|e| BumpError::Io {
        path: path.to_path_buf(),
        source: io::Error::other(e),
    })?;
    fs::write(path, rendered).map_err(|e| BumpError::io(path, e))
}

/// Appends `text` to an existing file. The file is not created if missing.
pub fn append_text(path: &Path, text: &str) -> BumpResult<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| BumpError::io(path, e))?;
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| BumpError::io(path, e))
}

pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `PrettyFormatter` that escapes everything outside printable ASCII as
/// lowercase `\uXXXX`, using surrogate pairs above the BMP.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn new(indent: &'a [u8]) -> Self {
        AsciiPrettyFormatter {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            // Quotes, backslashes and control characters never reach a fragment.
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}
