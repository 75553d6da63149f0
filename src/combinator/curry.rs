//! Conversion between tupled and curried multi-argument functions.
//!
//! `curry2` through `curry5` turn `f(a, b, ...)` into `f(a)(b)...`;
//! `uncurry2` through `uncurry5` go the other way.
//!
//! Every stage of a curried function is a [`Curried`] boxed closure and may be
//! called any number of times. Because a partially applied stage can be
//! reused, the arguments it captured are cloned on each call, so all but the
//! last argument must be [`Clone`].
//!
//! ```
//! use preludium::combinator::{curry3, uncurry3};
//!
//! let volume = curry3(|w: u32, h: u32, d: u32| w * h * d);
//! let base = volume(2)(3);
//! assert_eq!(base(4), 24);
//! assert_eq!(base(5), 30);
//!
//! let tupled = uncurry3(volume);
//! assert_eq!(tupled(1, 2, 3), 6);
//! ```

use std::rc::Rc;

/// One stage of a curried function.
pub type Curried<'a, A, B> = Box<dyn Fn(A) -> B + 'a>;

/// Curries a binary function.
pub fn curry2<'a, A, B, R, F>(function: F) -> Curried<'a, A, Curried<'a, B, R>>
where
    F: Fn(A, B) -> R + 'a,
    A: Clone + 'a,
    B: 'a,
    R: 'a,
{
    let function = Rc::new(function);
    Box::new(move |first: A| {
        let function = Rc::clone(&function);
        Box::new(move |second: B| function(first.clone(), second)) as Curried<'a, B, R>
    })
}

/// Curries a ternary function.
pub fn curry3<'a, A, B, C, R, F>(function: F) -> Curried<'a, A, Curried<'a, B, Curried<'a, C, R>>>
where
    F: Fn(A, B, C) -> R + 'a,
    A: Clone + 'a,
    B: Clone + 'a,
    C: 'a,
    R: 'a,
{
    let function = Rc::new(function);
    Box::new(move |first: A| {
        let function = Rc::clone(&function);
        Box::new(move |second: B| {
            let function = Rc::clone(&function);
            let first = first.clone();
            Box::new(move |third: C| function(first.clone(), second.clone(), third))
                as Curried<'a, C, R>
        }) as Curried<'a, B, Curried<'a, C, R>>
    })
}

/// Curries a function of four arguments.
#[allow(clippy::type_complexity)]
pub fn curry4<'a, A, B, C, D, R, F>(
    function: F,
) -> Curried<'a, A, Curried<'a, B, Curried<'a, C, Curried<'a, D, R>>>>
where
    F: Fn(A, B, C, D) -> R + 'a,
    A: Clone + 'a,
    B: Clone + 'a,
    C: Clone + 'a,
    D: 'a,
    R: 'a,
{
    let function = Rc::new(function);
    Box::new(move |first: A| {
        let function = Rc::clone(&function);
        Box::new(move |second: B| {
            let function = Rc::clone(&function);
            let first = first.clone();
            Box::new(move |third: C| {
                let function = Rc::clone(&function);
                let first = first.clone();
                let second = second.clone();
                Box::new(move |fourth: D| {
                    function(first.clone(), second.clone(), third.clone(), fourth)
                }) as Curried<'a, D, R>
            }) as Curried<'a, C, Curried<'a, D, R>>
        }) as Curried<'a, B, Curried<'a, C, Curried<'a, D, R>>>
    })
}

/// Curries a function of five arguments.
#[allow(clippy::type_complexity)]
pub fn curry5<'a, A, B, C, D, E, R, F>(
    function: F,
) -> Curried<'a, A, Curried<'a, B, Curried<'a, C, Curried<'a, D, Curried<'a, E, R>>>>>
where
    F: Fn(A, B, C, D, E) -> R + 'a,
    A: Clone + 'a,
    B: Clone + 'a,
    C: Clone + 'a,
    D: Clone + 'a,
    E: 'a,
    R: 'a,
{
    let function = Rc::new(function);
    Box::new(move |first: A| {
        let function = Rc::clone(&function);
        Box::new(move |second: B| {
            let function = Rc::clone(&function);
            let first = first.clone();
            Box::new(move |third: C| {
                let function = Rc::clone(&function);
                let first = first.clone();
                let second = second.clone();
                Box::new(move |fourth: D| {
                    let function = Rc::clone(&function);
                    let first = first.clone();
                    let second = second.clone();
                    let third = third.clone();
                    Box::new(move |fifth: E| {
                        function(
                            first.clone(),
                            second.clone(),
                            third.clone(),
                            fourth.clone(),
                            fifth,
                        )
                    }) as Curried<'a, E, R>
                }) as Curried<'a, D, Curried<'a, E, R>>
            }) as Curried<'a, C, Curried<'a, D, Curried<'a, E, R>>>
        }) as Curried<'a, B, Curried<'a, C, Curried<'a, D, Curried<'a, E, R>>>>
    })
}

/// Turns a curried binary function back into a tupled one.
pub fn uncurry2<A, B, R, F, G>(function: F) -> impl Fn(A, B) -> R
where
    F: Fn(A) -> G,
    G: Fn(B) -> R,
{
    move |first, second| function(first)(second)
}

/// Turns a curried ternary function back into a tupled one.
pub fn uncurry3<A, B, C, R, F, G, H>(function: F) -> impl Fn(A, B, C) -> R
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> R,
{
    move |first, second, third| function(first)(second)(third)
}

/// Turns a curried function of four arguments back into a tupled one.
pub fn uncurry4<A, B, C, D, R, F, G, H, I>(function: F) -> impl Fn(A, B, C, D) -> R
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> I,
    I: Fn(D) -> R,
{
    move |first, second, third, fourth| function(first)(second)(third)(fourth)
}

/// Turns a curried function of five arguments back into a tupled one.
pub fn uncurry5<A, B, C, D, E, R, F, G, H, I, J>(function: F) -> impl Fn(A, B, C, D, E) -> R
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> I,
    I: Fn(D) -> J,
    J: Fn(E) -> R,
{
    move |first, second, third, fourth, fifth| function(first)(second)(third)(fourth)(fifth)
}
