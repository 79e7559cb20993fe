//! TRUNCATE n - keep the first `n` bytes of a stream (`cut -c1-N`).

use std::io::{self, Read, Write};

use tracing::trace;

use crate::error::FilterError;
use crate::filter::StreamFilter;

/// Copies at most `limit` bytes from input to output.
///
/// A stream shorter than `limit` is copied whole; that is not an error.
/// The cut is byte-based and may land inside a multi-byte character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncate {
    limit: u64,
}

impl Truncate {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// Build a [`Truncate`] filter keeping the first `limit` bytes.
pub fn truncate(limit: u64) -> Truncate {
    Truncate::new(limit)
}

impl StreamFilter for Truncate {
    fn apply(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), FilterError> {
        let copied = io::copy(&mut input.take(self.limit), output)?;
        trace!(limit = self.limit, copied, "truncate copied bytes");
        Ok(())
    }

    fn name(&self) -> &str {
        "TRUNCATE"
    }
}
