//! # pipe-filters
//!
//! Small filters for line-oriented shell-style pipelines.
//!
//! ## Overview
//!
//! Two filters plug into a host pipeline:
//! - **TRUNCATE n** ([`Truncate`]): keep the first `n` bytes of a stream,
//!   like `cut -c1-N`. Short input is fine; only I/O faults are errors.
//! - **COLUMNS** ([`Columns`]): split each line on a [`Delimiter`] and
//!   re-emit chosen fields, in any order, joined by a new delimiter. Bad
//!   field indices are skipped, never reported.
//!
//! [`Pipe`] is a minimal in-memory host that runs filters over buffered
//! content, one stage at a time.
//!
//! ## Example
//!
//! ```
//! use pipe_filters::{Delimiter, Pipe, columns};
//!
//! let out = Pipe::echo("1   2   3   4\nalpha    bravo    charlie    delta")
//!     .filter_scan(&columns(Delimiter::Whitespace, "\t", [2, 3, 6]))?
//!     .into_string()?;
//!
//! assert_eq!(out, "2\t3\nbravo\tcharlie\n");
//! # Ok::<(), pipe_filters::FilterError>(())
//! ```

pub mod columns;
pub mod delimiter;
pub mod error;
pub mod filter;
pub mod pipe;
pub mod truncate;

pub use columns::{Columns, columns};
pub use delimiter::{CharPredicate, Delimiter};
pub use error::FilterError;
pub use filter::{LineFilter, StreamFilter};
pub use pipe::Pipe;
pub use truncate::{Truncate, truncate};
