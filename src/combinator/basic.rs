//! Elementary combinators.
//!
//! - [`identity`] (I), [`constant`] (K), [`flip`] (C), [`compose`] (B)
//! - [`substitute`] (S), [`duplicate`] (W), [`on`] (Psi)
//! - [`apply`] and [`pipe`] for explicit application
//! - [`until`] for bounded-stack iteration
//!
//! All of them are pure; none allocate.

/// Returns its argument unchanged.
///
/// ```
/// use preludium::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(vec![1, 2].into_iter().map(identity).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its argument and returns `value`.
///
/// ```
/// use preludium::combinator::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// [`constant`] with the argument type pinned to the type of `value`.
///
/// Useful when inference would otherwise leave the ignored argument
/// ambiguous.
///
/// ```
/// use preludium::combinator::as_type_of;
///
/// let fallback = as_type_of(1_u8);
/// assert_eq!(fallback(200), 1);
/// ```
#[inline]
pub fn as_type_of<T: Clone>(value: T) -> impl Fn(T) -> T {
    constant(value)
}

/// Swaps the two arguments of a binary function.
///
/// ```
/// use preludium::combinator::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Reverses the three arguments of a ternary function.
///
/// `flip3(f)(z, y, x) == f(x, y, z)`.
#[inline]
pub fn flip3<A, B, C, D, F>(function: F) -> impl Fn(C, B, A) -> D
where
    F: Fn(A, B, C) -> D,
{
    move |third, second, first| function(first, second, third)
}

/// Reverses the four arguments of a quaternary function.
///
/// `flip4(f)(w, z, y, x) == f(x, y, z, w)`.
#[inline]
pub fn flip4<A, B, C, D, E, F>(function: F) -> impl Fn(D, C, B, A) -> E
where
    F: Fn(A, B, C, D) -> E,
{
    move |fourth, third, second, first| function(first, second, third, fourth)
}

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`.
///
/// For more than two functions use [`compose!`](crate::compose).
///
/// ```
/// use preludium::combinator::compose;
///
/// let describe = compose(|n: usize| format!("{n} chars"), str::len);
/// assert_eq!(describe("four"), "4 chars");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Applies `function` to `argument`.
#[inline]
pub fn apply<A, B, F>(function: F, argument: A) -> B
where
    F: FnOnce(A) -> B,
{
    function(argument)
}

/// Feeds `value` to `function`; the argument-first form of [`apply`].
///
/// For a chain of functions use [`pipe!`](crate::pipe).
#[inline]
pub fn pipe<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// Projects both arguments with `projection` before combining them.
///
/// `on(op, p)(x, y) == op(p(x), p(y))`.
///
/// ```
/// use preludium::combinator::on;
///
/// let same_length = on(|a: usize, b: usize| a == b, |s: &str| s.len());
/// assert!(same_length("abc", "xyz"));
/// assert!(!same_length("abc", "xy"));
/// ```
#[inline]
pub fn on<A, B, C, Op, P>(operation: Op, projection: P) -> impl Fn(A, A) -> C
where
    Op: Fn(B, B) -> C,
    P: Fn(A) -> B,
{
    move |left, right| operation(projection(left), projection(right))
}

/// Applies `step` to `value` until `predicate` holds, returning that value.
///
/// If `predicate` already holds for `value`, `step` is never called. There
/// is no iteration cap: a `predicate` that never becomes true loops forever.
///
/// ```
/// use preludium::combinator::until;
///
/// assert_eq!(until(|n: &u32| *n > 1000, |n| n * 2, 1), 1024);
/// assert_eq!(until(|_: &u32| true, |n| n * 2, 7), 7);
/// ```
pub fn until<A, P, F>(predicate: P, mut step: F, value: A) -> A
where
    P: Fn(&A) -> bool,
    F: FnMut(A) -> A,
{
    let mut current = value;
    while !predicate(&current) {
        current = step(current);
    }
    current
}

/// The S combinator: `substitute(f, g)(x) == f(x, g(x))`.
///
/// ```
/// use preludium::combinator::substitute;
///
/// let with_square = substitute(|x: i32, sq: i32| (x, sq), |x: i32| x * x);
/// assert_eq!(with_square(3), (3, 9));
/// ```
#[inline]
pub fn substitute<A, B, C, F, G>(function: F, derive: G) -> impl Fn(A) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
    G: Fn(A) -> B,
{
    move |argument: A| {
        let derived = derive(argument.clone());
        function(argument, derived)
    }
}

/// The W combinator: `duplicate(f)(x) == f(x, x)`.
///
/// ```
/// use preludium::combinator::duplicate;
///
/// let square = duplicate(|a: i32, b: i32| a * b);
/// assert_eq!(square(7), 49);
/// ```
#[inline]
pub fn duplicate<A, B, F>(function: F) -> impl Fn(A) -> B
where
    A: Clone,
    F: Fn(A, A) -> B,
{
    move |argument: A| function(argument.clone(), argument)
}

/// Exchanges the components of a pair.
#[inline]
pub fn swap<A, B>((first, second): (A, B)) -> (B, A) {
    (second, first)
}

/// A type with no values.
///
/// A function returning `Nothing` cannot return; a value of type `Nothing`
/// can be turned into anything with [`absurd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nothing {}

/// Eliminates an impossible value.
#[inline]
pub fn absurd<A>(nothing: Nothing) -> A {
    match nothing {}
}
