//! List algorithms in the style of a functional prelude.
//!
//! # Overview
//!
//! - Destructuring: [`match_list`], [`head`], [`tail`], [`uncons`], [`null`],
//!   [`cons`], [`safe_index`]
//! - Slicing: [`take`], [`drop`], [`split_at`]
//! - Folds: [`foldl`], [`foldr`], [`foldl1`], [`foldr1`], [`para`], [`hylo`]
//!   and the specialised folds [`and`], [`or`], [`any`], [`all`], [`sum`],
//!   [`product`], [`maximum`], [`minimum`], [`concat`], [`concat_map`]
//! - Scans: [`scanl`], [`scanl1`], [`scanr`], [`scanr1`]
//! - Predicates: [`span`], [`break_when`], [`take_while`], [`drop_while`],
//!   [`drop_while_end`], [`group_by`], [`group`], [`find`]
//! - Construction: [`unfoldr`], [`iterate_while`], [`intersperse`],
//!   [`intercalate`], [`map_with_index`], [`map_maybe`], [`cat_options`]
//! - Zipping: [`zip`], [`zip3`], [`zip_with`], [`zip_with3`], [`unzip`],
//!   [`unzip3`]
//! - [`SliceExt`] for method syntax and [`ArrayZipper`] for a cursor
//!
//! Functions that only traverse their input accept any [`IntoIterator`];
//! functions that cut a list into pieces take a slice and return borrowed
//! sub-slices. Operations that need at least one element return
//! [`EmptyInputError`](crate::error::EmptyInputError) instead of panicking,
//! and lookups that may find nothing return [`Option`].
//!
//! Every algorithm is iterative, so input length is bounded by memory only.
//!
//! # Examples
//!
//! ```
//! use preludium::list::{foldl1, scanl, span, unfoldr, zip_with};
//!
//! assert_eq!(scanl(|acc, x| acc + x, 0, [1, 2, 3]), vec![0, 1, 3, 6]);
//! assert_eq!(zip_with(|a, b| a + b, [1, 2, 3], [10, 20]), vec![11, 22]);
//! assert_eq!(span(&[1, 2, 3, 1], |x| *x < 3).0, &[1, 2]);
//! assert_eq!(unfoldr(|n| (n < 3).then_some((n, n + 1)), 0), vec![0, 1, 2]);
//! assert!(foldl1(|a: i32, b| a + b, []).is_err());
//! ```

mod ext;
mod fold;
mod matcher;
mod scan;
mod slice;
mod sublist;
mod transform;
mod unfold;
mod zip;
mod zipper;

pub use ext::SliceExt;
pub use fold::{
    all, and, any, concat, concat_map, filter_length, foldl, foldl1, foldr, foldr1, hylo, maximum,
    maximum_by, minimum, minimum_by, or, para, product, sum,
};
pub use matcher::{ListMatcher, cons, head, match_list, null, safe_index, tail, uncons};
pub use scan::{scanl, scanl1, scanr, scanr1};
pub use slice::{drop, split_at, take};
pub use sublist::{break_when, drop_while, drop_while_end, find, group, group_by, span, take_while};
pub use transform::{cat_options, intercalate, intersperse, map_maybe, map_with_index};
pub use unfold::{iterate_while, unfoldr};
pub use zip::{unzip, unzip3, zip, zip3, zip_with, zip_with3};
pub use zipper::ArrayZipper;
