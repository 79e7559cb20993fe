//! Error type shared by the stream filters and the in-memory pipe.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while running a filter or reading pipe content.
///
/// Line filters such as [`Columns`](crate::Columns) never produce one of
/// these; only byte-stream operations can fail.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The underlying reader or writer faulted.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Pipe content could not be read back as text.
    #[error("pipe content is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_transparent() {
        let err: FilterError = io::Error::new(io::ErrorKind::BrokenPipe, "reader gone").into();
        assert_eq!(err.to_string(), "reader gone");
        assert!(matches!(err, FilterError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_utf8_error_message() {
        let bad = String::from_utf8(vec![0xe2, 0x82]).unwrap_err();
        let err = FilterError::from(bad);
        assert!(err.to_string().starts_with("pipe content is not valid UTF-8"));
    }
}
