//! Variadic forms of [`compose`](super::compose) and [`pipe`](super::pipe).

/// Right-to-left composition of any number of functions.
///
/// `compose!(f, g, h)(x) == f(g(h(x)))`. A single argument is returned as is.
///
/// ```
/// use preludium::compose;
///
/// let shout = compose!(|s: String| s + "!", |s: &str| s.to_uppercase(), str::trim);
/// assert_eq!(shout("  hey "), "HEY!");
/// ```
///
/// Composition is associative, and [`identity`](crate::combinator::identity)
/// is its unit:
///
/// ```
/// use preludium::combinator::identity;
/// use preludium::compose;
///
/// fn inc(x: i32) -> i32 { x + 1 }
/// fn dbl(x: i32) -> i32 { x * 2 }
/// fn neg(x: i32) -> i32 { -x }
///
/// assert_eq!(compose!(inc, compose!(dbl, neg))(4), compose!(compose!(inc, dbl), neg)(4));
/// assert_eq!(compose!(identity, inc)(4), inc(4));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinator::compose($outer, $crate::compose!($($rest),+))
    };
}

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h) == h(g(f(x)))`; `pipe!(x)` is `x`. Each function is
/// called once, so `FnOnce` closures are accepted.
///
/// ```
/// use preludium::pipe;
///
/// let words = pipe!(
///     "a b  c",
///     str::split_whitespace,
///     Iterator::count,
///     |n: usize| n * 10,
/// );
/// assert_eq!(words, 30);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($function)($value) $(, $rest)*)
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn compose_single_is_passthrough() {
        let triple = |x: i32| x * 3;
        assert_eq!(compose!(triple)(2), 6);
    }

    #[rstest]
    fn compose_changes_types_along_the_chain() {
        let length = compose!(|s: String| s.len(), |n: u64| n.to_string());
        assert_eq!(length(123_456), 6);
    }

    #[rstest]
    fn compose_four() {
        let f = compose!(|x: i32| x - 1, |x: i32| x * x, |x: i32| x + 2, |x: i32| x * 10);
        assert_eq!(f(1), 143);
    }

    #[rstest]
    fn pipe_value_only() {
        assert_eq!(pipe!("same"), "same");
    }

    #[rstest]
    fn pipe_matches_reversed_compose() {
        let square = |x: i32| x * x;
        let halve = |x: i32| x / 2;
        assert_eq!(pipe!(6, square, halve), compose!(halve, square)(6));
    }

    #[rstest]
    fn pipe_accepts_fn_once() {
        let suffix = String::from("!");
        let result = pipe!(String::from("hi"), move |s: String| s + &suffix);
        assert_eq!(result, "hi!");
    }
}
