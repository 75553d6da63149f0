//! Character-class predicates on strings.

/// Whole-string character checks.
///
/// Both predicates hold vacuously for the empty string.
///
/// ```rust
/// use preludium::text::StrExt;
///
/// assert!("2024".contains_only_digits());
/// assert!("٣٤".contains_only_digits());
/// assert!(!"12a".contains_only_digits());
///
/// assert!("Grüße".contains_only_letters());
/// assert!(!"two words".contains_only_letters());
///
/// assert!("".contains_only_digits() && "".contains_only_letters());
/// ```
pub trait StrExt {
    /// Whether every character is numeric in the Unicode sense.
    fn contains_only_digits(&self) -> bool;

    /// Whether every character is alphabetic in the Unicode sense.
    fn contains_only_letters(&self) -> bool;
}

impl StrExt for str {
    fn contains_only_digits(&self) -> bool {
        self.chars().all(char::is_numeric)
    }

    fn contains_only_letters(&self) -> bool {
        self.chars().all(char::is_alphabetic)
    }
}
