//! Minimal CSV record writer: comma separated, `\n` terminated, fields quoted
//! only when they have to be.

use std::io::{self, Write};

pub struct CsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        for (n, field) in fields.iter().enumerate() {
            if n > 0 {
                self.inner.write_all(b",")?;
            }
            write_field(&mut self.inner, field.as_ref())?;
        }
        self.inner.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

fn write_field<W: Write>(out: &mut W, field: &str) -> io::Result<()> {
    if !needs_quotes(field) {
        return out.write_all(field.as_bytes());
    }
    out.write_all(b"\"")?;
    out.write_all(field.replace('"', "\"\"").as_bytes())?;
    out.write_all(b"\"")
}

fn needs_quotes(field: &str) -> bool {
    if field.is_empty() {
        return false;
    }
    // A lone `\.` is end-of-data in some consumers.
    if field == r"\." {
        return true;
    }
    field.contains([',', '"', '\r', '\n']) || field.starts_with(char::is_whitespace)
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
