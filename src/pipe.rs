//! In-memory pipeline for driving filters.
//!
//! A `Pipe` holds the whole content of a stream as bytes. Each stage
//! consumes the pipe and returns a new one holding that stage's output, so
//! stages chain left to right:
//!
//! ```
//! use pipe_filters::{Delimiter, Pipe, columns, truncate};
//!
//! let out = Pipe::echo("1,2,3,4\nalpha,bravo,charlie,delta\n")
//!     .filter_scan(&columns(Delimiter::comma(), " ", [2, 3]))?
//!     .filter(&truncate(6))?
//!     .into_string()?;
//! assert_eq!(out, "2 3\nbr");
//! # Ok::<(), pipe_filters::FilterError>(())
//! ```

use std::io::{self, BufRead, Read};

use tracing::debug;

use crate::error::FilterError;
use crate::filter::{LineFilter, StreamFilter};

/// Buffered stream content flowing between filter stages.
///
/// Reading a pipe through [`Read`] consumes it from the front; the other
/// accessors and stages only see the bytes not yet read.
#[derive(Debug, Clone, Default)]
pub struct Pipe {
    content: Vec<u8>,
    pos: usize,
}

impl Pipe {
    /// A pipe holding `text` verbatim.
    pub fn echo(text: impl Into<String>) -> Self {
        Self::from_bytes(text.into().into_bytes())
    }

    /// A pipe holding raw bytes, which need not be UTF-8.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content: bytes.into(),
            pos: 0,
        }
    }

    /// Read `reader` to the end into a new pipe.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, FilterError> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(Self::from_bytes(content))
    }

    /// Run the whole content through a stream filter.
    pub fn filter(self, filter: &dyn StreamFilter) -> Result<Self, FilterError> {
        let mut input = self.as_bytes();
        let mut output = Vec::new();
        filter.apply(&mut input, &mut output)?;
        debug!(
            stage = filter.name(),
            bytes_in = self.as_bytes().len(),
            bytes_out = output.len(),
            "stream stage complete"
        );
        Ok(Self::from_bytes(output))
    }

    /// Call a line filter once per line, in order, collecting its output.
    ///
    /// Lines are split on `'\n'` with a trailing `'\r'` removed; the final
    /// line does not need a terminator. Content that is not UTF-8 fails
    /// with an `InvalidData` I/O error.
    pub fn filter_scan(self, filter: &dyn LineFilter) -> Result<Self, FilterError> {
        let mut output = Vec::new();
        let mut lines = 0usize;
        for line in self.as_bytes().lines() {
            filter.apply_line(&line?, &mut output);
            lines += 1;
        }
        debug!(
            stage = filter.name(),
            lines,
            bytes_in = self.as_bytes().len(),
            bytes_out = output.len(),
            "line stage complete"
        );
        Ok(Self::from_bytes(output))
    }

    /// Unread content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content[self.pos..]
    }

    /// Unread content, taking ownership of the buffer.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.content.drain(..self.pos);
        self.content
    }

    /// True when no unread content remains.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// The unread content as text.
    pub fn into_string(self) -> Result<String, FilterError> {
        Ok(String::from_utf8(self.into_bytes())?)
    }
}

impl Read for Pipe {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.as_bytes().read(buf)?;
        self.pos += n;
        Ok(n)
    }
}
