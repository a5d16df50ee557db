//! CSV loader for `label,value[,color]` rows with zero-allocation float parsing.

use std::io::{BufRead, BufReader, Read};

use thiserror::Error;

use crate::core::{chart::Entry, color::ColorTag};

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("expected 2–3 columns, got {0}")]
    BadColumnCount(usize),
    #[error("invalid value '{0}'")]
    BadFloat(String),
    #[error("empty label")]
    EmptyLabel,
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Replace U+2212 MINUS SIGN with ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseCsvError> {
    let bad = || ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// Split on commas into at most three trimmed columns.
fn split_columns(buf: &[u8], line: usize) -> Result<([&[u8]; 3], usize), ParseCsvError> {
    let mut cols: [&[u8]; 3] = [&[]; 3];
    let mut n = 0;
    for field in buf.split(|&b| b == b',') {
        if n == cols.len() {
            return Err(ParseCsvError {
                line,
                kind: ParseErrorKind::BadColumnCount(buf.split(|&b| b == b',').count()),
            });
        }
        cols[n] = trim(field);
        n += 1;
    }
    if n < 2 {
        return Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadColumnCount(n),
        });
    }
    Ok((cols, n))
}

// --- CSV ingest ---
const BUF_CAP: usize = 64 * 1024;

/// Read entries in file order.  Blank lines and `#` comments are skipped; a
/// first row whose value column is not numeric is taken as a header.
pub fn read_csv<R: Read>(src: R) -> Result<Vec<Entry>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut entries = Vec::<Entry>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        let (cols, count) = split_columns(line, line_no)?;

        // simple header detection (non-numeric value column)
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(cols[1]).is_err() {
                tracing::debug!(line = line_no, "skipping CSV header row");
                continue;
            }
        }

        if cols[0].is_empty() {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::EmptyLabel,
            });
        }
        let label = String::from_utf8_lossy(cols[0]).into_owned();
        let value = parse_f64(cols[1], line_no)?;
        let color = if count == 3 {
            ColorTag::parse(&String::from_utf8_lossy(cols[2]))
        } else {
            ColorTag::None
        };
        entries.push(Entry::with_color(label, value, color));
    }
    tracing::debug!(rows = entries.len(), "CSV ingest complete");
    Ok(entries)
}

/// Read from a file path, or stdin when `path` is `-`.
pub fn read_csv_from_path(path: &str) -> Result<Vec<Entry>, ParseCsvError> {
    if path == "-" {
        read_csv(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
