//! Fixed-point combinator for anonymous recursion.
//!
//! A closure cannot name itself. `fix` passes the closure a handle to "the
//! function being defined", which it calls to recurse.
//!
//! ```
//! use preludium::combinator::fix;
//!
//! let factorial = fix(|recur: &dyn Fn(u64) -> u64, n: u64| {
//!     if n <= 1 { 1 } else { n * recur(n - 1) }
//! });
//! assert_eq!(factorial(10), 3_628_800);
//! ```
//!
//! Termination is the caller's responsibility. Recursion happens on the
//! native stack, so unbounded recursion overflows it.

fn fix_apply<A, B, F>(function: &F, argument: A) -> B
where
    F: Fn(&dyn Fn(A) -> B, A) -> B,
{
    function(&|next: A| fix_apply(function, next), argument)
}

/// Ties the recursive knot of `function`.
///
/// `fix(f)(x) == f(fix(f), x)`.
pub fn fix<A, B, F>(function: F) -> impl Fn(A) -> B
where
    F: Fn(&dyn Fn(A) -> B, A) -> B,
{
    move |argument| fix_apply(&function, argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 55)]
    #[case(20, 6765)]
    fn fibonacci(#[case] n: u32, #[case] expected: u64) {
        let fib = fix(|recur: &dyn Fn(u32) -> u64, n: u32| {
            if n < 2 { u64::from(n) } else { recur(n - 1) + recur(n - 2) }
        });
        assert_eq!(fib(n), expected);
    }

    #[rstest]
    fn recursion_over_owned_values() {
        let length = fix(|recur: &dyn Fn(Vec<i32>) -> usize, mut items: Vec<i32>| {
            if items.pop().is_some() { 1 + recur(items) } else { 0 }
        });
        assert_eq!(length(vec![4, 5, 6]), 3);
    }

    #[rstest]
    fn captured_environment_is_visible() {
        let step = 3;
        let count_down = fix(move |recur: &dyn Fn(i32) -> Vec<i32>, n: i32| {
            if n <= 0 {
                Vec::new()
            } else {
                let mut rest = recur(n - step);
                rest.insert(0, n);
                rest
            }
        });
        assert_eq!(count_down(10), vec![10, 7, 4, 1]);
    }
}
