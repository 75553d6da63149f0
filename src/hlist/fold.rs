use super::{HCons, HList, HNil};

/// One step of a fold: combines an element of type `H` with an
/// accumulator of type `Acc`.
///
/// The output type may differ from `Acc`, which lets a right fold change
/// the accumulator type at every step. Closures `FnMut(H, Acc) -> Out`
/// implement this trait.
pub trait HFolder<H, Acc> {
    /// The new accumulator.
    type Output;

    /// Folds one element into the accumulator.
    fn fold(&mut self, element: H, accumulator: Acc) -> Self::Output;
}

impl<F, H, Acc, Out> HFolder<H, Acc> for F
where
    F: FnMut(H, Acc) -> Out,
{
    type Output = Out;

    fn fold(&mut self, element: H, accumulator: Acc) -> Out {
        self(element, accumulator)
    }
}

/// Right fold: the last element is combined with `init` first, and the
/// head is combined last.
///
/// ```rust
/// use preludium::hlist;
/// use preludium::hlist::{HFoldRight, HFolder};
///
/// struct Render;
///
/// impl HFolder<i32, String> for Render {
///     type Output = String;
///     fn fold(&mut self, element: i32, accumulator: String) -> String {
///         format!("{element}:{accumulator}")
///     }
/// }
///
/// impl HFolder<bool, &'static str> for Render {
///     type Output = String;
///     fn fold(&mut self, element: bool, accumulator: &'static str) -> String {
///         format!("{element}:{accumulator}")
///     }
/// }
///
/// // The accumulator starts as `&str` and becomes `String` after the first step.
/// let rendered = hlist![1_i32, 2_i32, true].fold_right(Render, "end");
/// assert_eq!(rendered, "1:2:true:end");
/// ```
pub trait HFoldRight<F, Init>: HList {
    /// Type of the final accumulator.
    type Output;

    /// Folds from the last element to the first.
    fn fold_right(self, mut folder: F, init: Init) -> Self::Output {
        self.fold_right_by(&mut folder, init)
    }

    /// Like [`fold_right`](HFoldRight::fold_right), borrowing the folder.
    fn fold_right_by(self, folder: &mut F, init: Init) -> Self::Output;
}

impl<F, Init> HFoldRight<F, Init> for HNil {
    type Output = Init;

    fn fold_right_by(self, _folder: &mut F, init: Init) -> Init {
        init
    }
}

impl<F, Init, H, T> HFoldRight<F, Init> for HCons<H, T>
where
    T: HFoldRight<F, Init>,
    F: HFolder<H, T::Output>,
{
    type Output = F::Output;

    fn fold_right_by(self, folder: &mut F, init: Init) -> Self::Output {
        let (head, tail) = self.into_parts();
        let accumulator = tail.fold_right_by(folder, init);
        folder.fold(head, accumulator)
    }
}

/// Left fold with an accumulator whose type stays the same throughout.
///
/// ```rust
/// use preludium::hlist;
/// use preludium::hlist::HFoldLeft;
///
/// let total = hlist![1, 2, 3].fold_left(|n: i32, total: i32| total * 10 + n, 0);
/// assert_eq!(total, 123);
/// ```
pub trait HFoldLeft<F, Acc>: HList {
    /// Folds from the first element to the last.
    fn fold_left(self, folder: F, accumulator: Acc) -> Acc;
}

impl<F, Acc> HFoldLeft<F, Acc> for HNil {
    fn fold_left(self, _folder: F, accumulator: Acc) -> Acc {
        accumulator
    }
}

impl<F, Acc, H, T> HFoldLeft<F, Acc> for HCons<H, T>
where
    F: HFolder<H, Acc, Output = Acc>,
    T: HFoldLeft<F, Acc>,
{
    fn fold_left(self, mut folder: F, accumulator: Acc) -> Acc {
        let (head, tail) = self.into_parts();
        let accumulator = folder.fold(head, accumulator);
        tail.fold_left(folder, accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Describe;

    impl HFolder<u8, Vec<String>> for Describe {
        type Output = Vec<String>;

        fn fold(&mut self, element: u8, mut accumulator: Vec<String>) -> Vec<String> {
            accumulator.push(format!("u8 {element}"));
            accumulator
        }
    }

    impl HFolder<&str, Vec<String>> for Describe {
        type Output = Vec<String>;

        fn fold(&mut self, element: &str, mut accumulator: Vec<String>) -> Vec<String> {
            accumulator.push(format!("str {element}"));
            accumulator
        }
    }

    #[rstest]
    fn fold_right_of_nil_is_init() {
        assert_eq!(HNil.fold_right(|_: (), acc: u8| acc, 9_u8), 9);
    }

    #[rstest]
    fn fold_right_visits_last_first() {
        let visited = hlist![1_u8, "two", 3_u8].fold_right(Describe, Vec::new());
        assert_eq!(visited, vec!["u8 3", "str two", "u8 1"]);
    }

    #[rstest]
    fn fold_left_visits_first_first() {
        let visited = hlist![1_u8, "two", 3_u8].fold_left(Describe, Vec::new());
        assert_eq!(visited, vec!["u8 1", "str two", "u8 3"]);
    }

    #[rstest]
    fn non_associative_closure_shows_direction() {
        let right = hlist![10_i32, 3, 2].fold_right(|n: i32, acc: i32| n - acc, 0);
        let left = hlist![10_i32, 3, 2].fold_left(|n: i32, acc: i32| acc - n, 0);
        assert_eq!(right, 9);
        assert_eq!(left, -15);
    }

    #[rstest]
    fn borrowed_folder_keeps_state() {
        let mut calls = 0;
        let mut counting = |n: i32, acc: i32| {
            calls += 1;
            n + acc
        };
        let sum = hlist![1_i32, 2, 3].fold_right_by(&mut counting, 0);
        let again = hlist![4_i32].fold_right_by(&mut counting, sum);
        assert_eq!(again, 10);
        assert_eq!(calls, 4);
    }
}
