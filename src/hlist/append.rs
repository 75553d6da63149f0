use super::{HCons, HList, HNil};

/// Concatenation of two HLists.
///
/// The output type is computed from both operand types, so
/// `HList![A, B]` appended with `HList![C]` is exactly `HList![A, B, C]`.
///
/// ```rust
/// use preludium::{HList, hlist};
/// use preludium::hlist::HAppend;
///
/// let joined: HList![char, u8, bool] = hlist!['x'].append(hlist![2, true]);
/// assert_eq!(joined, hlist!['x', 2, true]);
/// ```
pub trait HAppend<Rhs: HList>: HList {
    /// `Self` followed by `Rhs`.
    type Output: HList;

    /// Concatenates `self` and `rhs`.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs: HList> HAppend<Rhs> for HNil {
    type Output = Rhs;

    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> HAppend<Rhs> for HCons<H, T>
where
    T: HAppend<Rhs>,
    Rhs: HList,
{
    type Output = HCons<H, T::Output>;

    fn append(self, rhs: Rhs) -> Self::Output {
        let (head, tail) = self.into_parts();
        HCons::new(head, tail.append(rhs))
    }
}
