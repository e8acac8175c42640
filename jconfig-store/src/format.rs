//! Indented JSON output with a per-line prefix.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Prefix written at the start of every line after the first when saving.
pub const SAVE_PREFIX: &str = "  ";
/// Indentation added per nesting level when saving.
pub const SAVE_INDENT: &str = "  ";

/// Pretty JSON formatter that starts every line after the first with a
/// fixed prefix, followed by one indent per nesting level.
///
/// Empty arrays and objects are written compactly as `[]` and `{}`. No
/// trailing newline is emitted.
#[derive(Clone, Debug)]
pub struct PrefixedFormatter<'a> {
    prefix: &'a [u8],
    indent: &'a [u8],
    current_indent: usize,
    has_value: bool,
}

impl<'a> PrefixedFormatter<'a> {
    /// Creates a formatter with the given line prefix and indent.
    #[must_use]
    pub fn new(prefix: &'a str, indent: &'a str) -> Self {
        Self {
            prefix: prefix.as_bytes(),
            indent: indent.as_bytes(),
            current_indent: 0,
            has_value: false,
        }
    }

    fn newline<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b"\n")?;
        writer.write_all(self.prefix)?;
        for _ in 0..self.current_indent {
            writer.write_all(self.indent)?;
        }
        Ok(())
    }
}

impl Default for PrefixedFormatter<'_> {
    fn default() -> Self {
        PrefixedFormatter::new(SAVE_PREFIX, SAVE_INDENT)
    }
}

impl Formatter for PrefixedFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }
}

/// Serialises `value` with a [`PrefixedFormatter`] built from `prefix` and
/// `indent`.
///
/// # Errors
///
/// Returns the `serde_json` error raised by `value`'s `Serialize`
/// implementation, for example a map with non-string keys.
pub fn to_prefixed_vec<T>(value: &T, prefix: &str, indent: &str) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(128);
    let mut serializer =
        Serializer::with_formatter(&mut out, PrefixedFormatter::new(prefix, indent));
    value.serialize(&mut serializer)?;
    Ok(out)
}
