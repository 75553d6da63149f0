use super::{HCons, HList, HNil};

/// A function applicable to an element of type `In`.
///
/// A single mapper type can implement `HMapper` for many input types,
/// which is how a list of mixed types gets mapped. Any `FnMut(In) -> Out`
/// closure is a mapper for its own input type, enough for lists whose
/// elements share a type.
pub trait HMapper<In> {
    /// Result of applying the mapper to an `In`.
    type Output;

    /// Maps one element.
    fn apply(&mut self, input: In) -> Self::Output;
}

impl<F, In, Out> HMapper<In> for F
where
    F: FnMut(In) -> Out,
{
    type Output = Out;

    fn apply(&mut self, input: In) -> Out {
        self(input)
    }
}

/// Element-wise mapping of an HList.
///
/// ```rust
/// use preludium::{HList, hlist};
/// use preludium::hlist::{HMap, HMapper};
///
/// struct Describe;
///
/// impl HMapper<i32> for Describe {
///     type Output = String;
///     fn apply(&mut self, input: i32) -> String {
///         format!("int {input}")
///     }
/// }
///
/// impl HMapper<bool> for Describe {
///     type Output = &'static str;
///     fn apply(&mut self, input: bool) -> &'static str {
///         if input { "yes" } else { "no" }
///     }
/// }
///
/// let described: HList![String, &str] = hlist![5_i32, true].map(Describe);
/// assert_eq!(described, hlist![String::from("int 5"), "yes"]);
///
/// let doubled = hlist![1, 2, 3].map(|n: i32| n * 2);
/// assert_eq!(doubled, hlist![2, 4, 6]);
/// ```
pub trait HMap<M>: HList {
    /// The list of mapped element types.
    type Output: HList;

    /// Applies `mapper` to every element, front to back.
    fn map(self, mapper: M) -> Self::Output;
}

impl<M> HMap<M> for HNil {
    type Output = Self;

    fn map(self, _mapper: M) -> Self {
        self
    }
}

impl<M, H, T> HMap<M> for HCons<H, T>
where
    M: HMapper<H>,
    T: HMap<M>,
{
    type Output = HCons<M::Output, T::Output>;

    fn map(self, mut mapper: M) -> Self::Output {
        let (head, tail) = self.into_parts();
        let head = mapper.apply(head);
        HCons::new(head, tail.map(mapper))
    }
}
