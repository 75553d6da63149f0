//! Utilities over standard collections: de-duplication, removal by value
//! and lazy map insertion.

mod compute;
mod remove;
mod uniq;

pub use compute::{ComputeIfAbsent, compute_if_absent};
pub use remove::{RemoveExt, remove_object};
pub use uniq::{Uniq, UniqExt, UniqHasher, uniq};
