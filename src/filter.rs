//! Filter traits.
//!
//! A host pipeline accepts two shapes of filter: one that transforms a whole
//! byte stream, and one that is called once per line of text. Both take
//! `&self`, so a configured filter can be reused for every stream or line
//! it is handed.

use std::io::{Read, Write};

use crate::error::FilterError;

/// A filter that copies (some transformation of) a byte stream to a sink.
pub trait StreamFilter {
    /// Read from `input` and write the filtered bytes to `output`.
    ///
    /// Errors from either side are returned to the caller unchanged.
    fn apply(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), FilterError>;

    /// The display name of this filter.
    fn name(&self) -> &str;
}

/// A filter invoked once per line of text.
///
/// Unlike [`StreamFilter`], there is no error channel: a line filter emits
/// less (or nothing) rather than failing, so a bad configuration never
/// aborts the stream it sits in.
pub trait LineFilter {
    /// Process one line. `line` does not include its line terminator; any
    /// terminator the filter wants in the output it writes itself.
    fn apply_line(&self, line: &str, output: &mut dyn Write);

    /// The display name of this filter.
    fn name(&self) -> &str;
}

impl<F> LineFilter for F
where
    F: Fn(&str, &mut dyn Write),
{
    fn apply_line(&self, line: &str, output: &mut dyn Write) {
        self(line, output)
    }

    fn name(&self) -> &str {
        "closure"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_line_filter() {
        let shout = |line: &str, w: &mut dyn Write| {
            let _ = writeln!(w, "{}", line.to_uppercase());
        };
        let mut out = Vec::new();
        shout.apply_line("quiet", &mut out);
        shout.apply_line("still quiet", &mut out);
        assert_eq!(out, b"QUIET\nSTILL QUIET\n");
        assert_eq!(LineFilter::name(&shout), "closure");
    }

    #[test]
    fn test_closure_can_emit_nothing() {
        let drop_all = |_: &str, _: &mut dyn Write| {};
        let mut out = Vec::new();
        drop_all.apply_line("anything", &mut out);
        assert!(out.is_empty());
    }
}
