//! Emulation of the higher kind `F<_>` through generic associated types.
//!
//! Rust cannot abstract over an unapplied constructor such as `Option` or
//! `Vec`. [`TypeConstructor`] describes a constructor *already applied* to
//! some `Inner` type, and `WithType<B>` names the same constructor applied
//! to `B`. `Functor`, `Applicative` and `Monad` are built on top of it.
//!
//! ```rust
//! use preludium::typeclass::TypeConstructor;
//!
//! fn empty_like<F>(_value: F) -> F::WithType<String>
//! where
//!     F: TypeConstructor,
//!     F::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let strings: Vec<String> = empty_like(vec![1, 2, 3]);
//! assert!(strings.is_empty());
//! ```

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A, E> TypeConstructor for Result<A, E> {
    type Inner = A;
    type WithType<B> = Result<B, E>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}

impl<A> TypeConstructor for Box<A> {
    type Inner = A;
    type WithType<B> = Box<B>;
}
