//! Heterogeneous lists.
//!
//! An HList is a tuple with list structure: [`HNil`] is the empty list and
//! [`HCons<H, T>`] prepends a value of type `H` to the list `T`. Length and
//! element types are part of the type, so asking for the head of an empty
//! list does not compile.
//!
//! Operations are provided as traits, each implemented by structural
//! recursion over the two node types:
//!
//! - [`HAppend`]: concatenation, producing a list of the combined type
//! - [`HMap`] with [`HMapper`]: map every element, possibly changing types
//! - [`HFoldRight`] and [`HFoldLeft`] with [`HFolder`]: reduce to one value
//!
//! Use [`hlist!`](crate::hlist!) to build values and [`HList!`](crate::HList!)
//! to spell their types.
//!
//! # Examples
//!
//! ```rust
//! use preludium::{HList, hlist};
//! use preludium::hlist::{HAppend, HList as _};
//!
//! let first: HList![i32, &str] = hlist![1, "two"];
//! let joined = first.append(hlist![3.0]);
//!
//! assert_eq!(joined.len(), 3);
//! assert_eq!(*joined.tail().tail().head(), 3.0);
//! ```

/// Builds an HList value from a comma-separated list of expressions.
///
/// ```rust
/// use preludium::hlist;
/// use preludium::hlist::{HCons, HNil};
///
/// let list = hlist![1, "two", 3.0];
/// let (one, rest) = list.into_parts();
/// assert_eq!(one, 1);
/// assert_eq!(rest, HCons::new("two", HCons::new(3.0, HNil)));
///
/// assert_eq!(hlist![], HNil);
/// ```
#[macro_export]
macro_rules! hlist {
    () => { $crate::hlist::HNil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::hlist::HCons::new($head, $crate::hlist!($($rest),*))
    };
}

/// Names the type of an HList from a comma-separated list of types.
///
/// ```rust
/// use preludium::{HList, hlist};
///
/// type Row = HList![u32, String, bool];
/// let row: Row = hlist![7, String::from("seven"), true];
/// assert_eq!(row.head(), &7);
/// ```
#[macro_export]
macro_rules! HList {
    () => { $crate::hlist::HNil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::hlist::HCons<$head, $crate::HList!($($rest),*)>
    };
}

mod append;
mod fold;
mod map;

pub use append::HAppend;
pub use fold::{HFoldLeft, HFoldRight, HFolder};
pub use map::{HMap, HMapper};

/// The empty heterogeneous list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HNil;

/// A heterogeneous list whose first element has type `H` and whose
/// remaining elements form the list `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HCons<H, T> {
    head: H,
    tail: T,
}

impl<H, T: HList> HCons<H, T> {
    /// Prepends `head` to `tail`.
    #[must_use]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }

    /// The first element.
    pub const fn head(&self) -> &H {
        &self.head
    }

    /// Everything after the first element.
    pub const fn tail(&self) -> &T {
        &self.tail
    }

    /// Mutable access to the first element.
    pub fn head_mut(&mut self) -> &mut H {
        &mut self.head
    }

    /// Mutable access to everything after the first element.
    pub fn tail_mut(&mut self) -> &mut T {
        &mut self.tail
    }

    /// Splits the list into its owned head and tail.
    pub fn into_parts(self) -> (H, T) {
        (self.head, self.tail)
    }
}

/// Common interface of [`HNil`] and [`HCons`].
///
/// Both the length and emptiness are known at compile time.
///
/// ```rust
/// use preludium::hlist::{HList, HNil};
/// use preludium::HList;
///
/// assert_eq!(<HList![u8, String, bool]>::LEN, 3);
/// assert!(HNil::IS_NIL);
///
/// let list = HNil.prepend('z').prepend(1);
/// assert_eq!(list.len(), 2);
/// assert_eq!(*list.head(), 1);
/// ```
#[allow(clippy::len_without_is_empty)]
pub trait HList: Sized {
    /// Number of elements.
    const LEN: usize;

    /// Whether this is the empty list.
    const IS_NIL: bool;

    /// [`LEN`](HList::LEN) for a value.
    fn len(&self) -> usize {
        Self::LEN
    }

    /// [`IS_NIL`](HList::IS_NIL) for a value.
    fn is_nil(&self) -> bool {
        Self::IS_NIL
    }

    /// Prepends `head`, producing a list one element longer.
    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons::new(head, self)
    }
}

impl HList for HNil {
    const LEN: usize = 0;
    const IS_NIL: bool = true;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
    const IS_NIL: bool = false;
}

static_assertions::const_assert_eq!(<HNil as HList>::LEN, 0);
static_assertions::const_assert_eq!(<HCons<(), HCons<(), HNil>> as HList>::LEN, 2);
static_assertions::assert_impl_all!(HNil: Copy, Send, Sync, Default);
