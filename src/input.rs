//! Talk list loading.
//!
//! One talk per line. Blank lines are ignored; lines that fail to parse are
//! logged and returned as [`SkippedLine`]s without aborting the load.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::error::{Error, ParseError, Result};
use crate::models::Talk;

/// A line that did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line_number: usize,
    pub line: String,
    pub error: ParseError,
}

/// Talks parsed from an input source, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTalks {
    pub talks: Vec<Talk>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses talks from any buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and the line is
/// still parsed. Only read failures abort the load.
pub fn read_talks<R: BufRead>(mut reader: R) -> io::Result<ParsedTalks> {
    let mut parsed = ParsedTalks::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        let line = match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(line) => line.to_string(),
            Cow::Owned(line) => {
                warn!(line_number, "talk line is not valid UTF-8, replacing invalid bytes");
                line
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match Talk::parse(&line) {
            Ok(talk) => parsed.talks.push(talk),
            Err(error) => {
                warn!(line_number, line = %line, %error, "skipping unparseable talk");
                parsed.skipped.push(SkippedLine {
                    line_number,
                    line,
                    error,
                });
            }
        }
    }

    Ok(parsed)
}

/// Opens and parses a talk file.
pub fn load_talks(path: impl AsRef<Path>) -> Result<ParsedTalks> {
    let path = path.as_ref();
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    read_talks(BufReader::new(file)).map_err(io_error)
}
