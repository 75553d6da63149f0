//! A cursor over a non-empty array.
//!
//! An [`ArrayZipper`] pairs the backing values with a focused position. The
//! position is clamped into `0..len` on construction and after every move,
//! so a zipper can never point outside its values. Moves consume the zipper
//! and return a new one.
//!
//! ```
//! use preludium::list::ArrayZipper;
//!
//! let zipper = ArrayZipper::new(vec!['a', 'b', 'c'], 1)?;
//! assert_eq!(*zipper.focus(), 'b');
//!
//! let zipper = zipper.move_by(10);
//! assert_eq!(zipper.position(), 2);
//! assert!(zipper.is_at_end());
//!
//! let zipper = zipper.move_to(-4);
//! assert_eq!(*zipper.focus(), 'a');
//! # Ok::<(), preludium::error::EmptyInputError>(())
//! ```

use crate::error::EmptyInputError;
use crate::typeclass::{Functor, TypeConstructor};

/// A non-empty array with a focused element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "ZipperParts<A>",
        bound(deserialize = "A: serde::Deserialize<'de>")
    )
)]
pub struct ArrayZipper<A> {
    values: Vec<A>,
    position: usize,
}

/// Unvalidated wire form of an [`ArrayZipper`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ZipperParts<A> {
    values: Vec<A>,
    position: isize,
}

#[cfg(feature = "serde")]
impl<A> TryFrom<ZipperParts<A>> for ArrayZipper<A> {
    type Error = EmptyInputError;

    fn try_from(parts: ZipperParts<A>) -> Result<Self, Self::Error> {
        Self::new(parts.values, parts.position)
    }
}

fn clamp_position(requested: isize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let clamped = usize::try_from(requested).map_or(0, |index| index.min(last));
    if isize::try_from(clamped).ok() != Some(requested) {
        tracing::trace!(requested, clamped, len, "clamped zipper position");
    }
    clamped
}

#[allow(clippy::len_without_is_empty)]
impl<A> ArrayZipper<A> {
    /// Builds a zipper focused on `position`, clamped into range.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when `values` is empty, since an empty
    /// array has no position to focus on.
    pub fn new(values: Vec<A>, position: isize) -> Result<Self, EmptyInputError> {
        if values.is_empty() {
            return Err(EmptyInputError::new("ArrayZipper::new"));
        }
        let position = clamp_position(position, values.len());
        Ok(Self { values, position })
    }

    /// Builds a zipper focused on the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when `values` is empty.
    pub fn from_values(values: Vec<A>) -> Result<Self, EmptyInputError> {
        if values.is_empty() {
            return Err(EmptyInputError::new("ArrayZipper::from_values"));
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Moves the focus by `offset` (negative moves left), clamping at
    /// either end.
    #[must_use]
    pub fn move_by(self, offset: isize) -> Self {
        let current = isize::try_from(self.position).unwrap_or(isize::MAX);
        self.move_to(current.saturating_add(offset))
    }

    /// Moves the focus to `position`, clamped into range.
    #[must_use]
    pub fn move_to(self, position: isize) -> Self {
        let position = clamp_position(position, self.values.len());
        Self { position, ..self }
    }

    /// One step towards the start.
    #[must_use]
    pub fn left(self) -> Self {
        self.move_by(-1)
    }

    /// One step towards the end.
    #[must_use]
    pub fn right(self) -> Self {
        self.move_by(1)
    }

    /// The focused element.
    pub fn focus(&self) -> &A {
        &self.values[self.position]
    }

    /// Replaces the focused element with `function` applied to it.
    #[must_use]
    pub fn modify<F>(mut self, function: F) -> Self
    where
        F: FnOnce(&A) -> A,
    {
        if let Some(slot) = self.values.get_mut(self.position) {
            let updated = function(slot);
            *slot = updated;
        }
        self
    }

    /// All values, in order.
    pub fn values(&self) -> &[A] {
        &self.values
    }

    /// Index of the focused element.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of values; always at least one.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the focus is on the first element.
    pub const fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Whether the focus is on the last element.
    pub fn is_at_end(&self) -> bool {
        self.position + 1 == self.values.len()
    }

    /// Gives back the values, dropping the focus.
    pub fn into_values(self) -> Vec<A> {
        self.values
    }
}

impl<A> TryFrom<Vec<A>> for ArrayZipper<A> {
    type Error = EmptyInputError;

    fn try_from(values: Vec<A>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl<A> TypeConstructor for ArrayZipper<A> {
    type Inner = A;
    type WithType<B> = ArrayZipper<B>;
}

/// Maps every value and keeps the focus where it was.
impl<A> Functor for ArrayZipper<A> {
    fn fmap<B, F>(self, function: F) -> ArrayZipper<B>
    where
        F: FnMut(A) -> B,
    {
        ArrayZipper {
            values: self.values.into_iter().map(function).collect(),
            position: self.position,
        }
    }
}
