//! COLUMNS - extract and reorder delimited fields from each line.
//!
//! Roughly `cut -d, -f5,2,8` or `awk -F, '{ print $5 "|" $2 }'`, except that
//! fields come out in the order they were asked for (repeats included) and
//! indices that do not exist in a line are skipped instead of failing.
//!
//! ```
//! use pipe_filters::{Delimiter, columns};
//!
//! let cols = columns(Delimiter::comma(), "|", [5, 2, 17, 3]);
//! assert_eq!(
//!     cols.project("alpha,beta,gamma,delta,epsilon").as_deref(),
//!     Some("epsilon|beta|gamma\n")
//! );
//! ```

use std::io::Write;

use tracing::{debug, trace};

use crate::delimiter::Delimiter;
use crate::filter::LineFilter;

/// Line terminator appended to every non-empty projection.
const LINE_END: char = '\n';

/// A fixed column selection applied to one line at a time.
///
/// Selection indices are 1-based. Index 0, negative indices, and indices
/// past the last field of a given line select nothing for that line.
#[derive(Debug, Clone)]
pub struct Columns {
    delimiter: Delimiter,
    output_delimiter: String,
    selection: Vec<i64>,
}

impl Columns {
    /// Configure a projector. The selection is fixed from here on.
    pub fn new(
        delimiter: impl Into<Delimiter>,
        output_delimiter: impl Into<String>,
        selection: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            delimiter: delimiter.into(),
            output_delimiter: output_delimiter.into(),
            selection: selection.into_iter().collect(),
        }
    }

    /// Separator used to split input lines.
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Text placed between emitted fields.
    pub fn output_delimiter(&self) -> &str {
        &self.output_delimiter
    }

    /// Requested 1-based field indices, in output order.
    pub fn selection(&self) -> &[i64] {
        &self.selection
    }

    /// Project one line, returning the output line with its terminator, or
    /// `None` if nothing should be written for it.
    ///
    /// Selection entries are walked in order. An out-of-range entry before
    /// the last one is skipped. When the last entry is out of range, the
    /// fields picked so far are emitted (or nothing, if none were) with any
    /// trailing output-delimiter text stripped.
    pub fn project(&self, line: &str) -> Option<String> {
        let last = self.selection.len().checked_sub(1)?;
        let fields = self.delimiter.split(line);

        let mut picked: Vec<&str> = Vec::with_capacity(self.selection.len());
        let mut ended_out_of_range = false;
        for (i, &index) in self.selection.iter().enumerate() {
            match (field_at(&fields, index), i == last) {
                (None, false) => continue,
                (None, true) if picked.is_empty() => return None,
                (None, true) => ended_out_of_range = true,
                (Some(field), _) => picked.push(field),
            }
        }

        let mut out = picked.join(&self.output_delimiter);
        if ended_out_of_range && !self.output_delimiter.is_empty() {
            let kept = out.trim_end_matches(self.output_delimiter.as_str()).len();
            out.truncate(kept);
        }
        out.push(LINE_END);
        Some(out)
    }
}

/// Build a [`Columns`] projector.
pub fn columns(
    delimiter: impl Into<Delimiter>,
    output_delimiter: impl Into<String>,
    selection: impl IntoIterator<Item = i64>,
) -> Columns {
    Columns::new(delimiter, output_delimiter, selection)
}

/// Resolve a 1-based index against a line's fields.
fn field_at<'a>(fields: &[&'a str], index: i64) -> Option<&'a str> {
    let pos = usize::try_from(index).ok()?.checked_sub(1)?;
    fields.get(pos).copied()
}

impl LineFilter for Columns {
    fn apply_line(&self, line: &str, output: &mut dyn Write) {
        let Some(projected) = self.project(line) else {
            trace!(line, "columns produced no output");
            return;
        };
        if let Err(e) = output.write_all(projected.as_bytes()) {
            debug!(error = %e, "columns output write failed, line dropped");
        }
    }

    fn name(&self) -> &str {
        "COLUMNS"
    }
}
