//! Field separators for column splitting.

use std::fmt;
use std::sync::Arc;

/// Shared character classifier used by [`Delimiter::Custom`].
pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Decides which characters separate fields in a line.
///
/// Splitting collapses runs of separators and drops empty fields, so
/// `"a,,b"` split on commas gives `["a", "b"]`, the same as
/// `"1   2   3"` split on whitespace gives `["1", "2", "3"]`.
#[derive(Clone)]
pub enum Delimiter {
    /// A single separator character.
    Char(char),
    /// Any Unicode whitespace.
    Whitespace,
    /// Any of the listed characters.
    AnyOf(Vec<char>),
    /// A caller-supplied classifier.
    Custom(CharPredicate),
}

impl Delimiter {
    /// Split on commas.
    pub fn comma() -> Self {
        Delimiter::Char(',')
    }

    /// Split on tabs.
    pub fn tab() -> Self {
        Delimiter::Char('\t')
    }

    /// Does `c` separate fields?
    pub fn matches(&self, c: char) -> bool {
        match self {
            Delimiter::Char(d) => c == *d,
            Delimiter::Whitespace => c.is_whitespace(),
            Delimiter::AnyOf(set) => set.contains(&c),
            Delimiter::Custom(f) => f(c),
        }
    }

    /// Split `line` into its non-empty fields.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split(|c: char| self.matches(c))
            .filter(|field| !field.is_empty())
            .collect()
    }

    /// Split wherever `f` returns true. `f` may capture state.
    pub fn custom(f: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Delimiter::Custom(Arc::new(f))
    }
}

impl fmt::Debug for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Delimiter::Whitespace => f.write_str("Whitespace"),
            Delimiter::AnyOf(set) => f.debug_tuple("AnyOf").field(set).finish(),
            Delimiter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        Delimiter::Char(c)
    }
}

impl From<fn(char) -> bool> for Delimiter {
    fn from(f: fn(char) -> bool) -> Self {
        Delimiter::custom(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comma() {
        assert_eq!(Delimiter::comma().split("1,2,3,4"), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_split_collapses_runs() {
        assert_eq!(Delimiter::comma().split(",,a,,,b,"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_whitespace_mixed() {
        let fields = Delimiter::Whitespace.split("alpha    bravo\tcharlie \u{3000}delta");
        assert_eq!(fields, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_split_empty_and_separator_only() {
        assert!(Delimiter::comma().split("").is_empty());
        assert!(Delimiter::comma().split(",,,").is_empty());
    }

    #[test]
    fn test_split_any_of() {
        let d = Delimiter::AnyOf(vec![';', '|']);
        assert_eq!(d.split("a;b|c;|d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_custom() {
        fn is_digit(c: char) -> bool {
            c.is_ascii_digit()
        }
        let d = Delimiter::from(is_digit as fn(char) -> bool);
        assert_eq!(d.split("ab1cd22ef"), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn test_split_multibyte_fields_intact() {
        let fields = Delimiter::from('·').split("naïve·日本語··€uro");
        assert_eq!(fields, vec!["naïve", "日本語", "€uro"]);
    }

    #[test]
    fn test_split_capturing_closure() {
        let separators = vec!['/', ':'];
        let d = Delimiter::custom(move |c| separators.contains(&c));
        assert_eq!(d.split("usr/local:bin//x"), vec!["usr", "local", "bin", "x"]);

        let cloned = d.clone();
        assert!(cloned.matches(':'));
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", Delimiter::comma()), "Char(',')");
        assert_eq!(format!("{:?}", Delimiter::Whitespace), "Whitespace");
        assert_eq!(format!("{:?}", Delimiter::custom(|c| c == 'x')), "Custom(..)");
    }

    #[test]
    fn test_matches() {
        assert!(Delimiter::tab().matches('\t'));
        assert!(!Delimiter::tab().matches(' '));
        assert!(Delimiter::Whitespace.matches('\n'));
    }
}
