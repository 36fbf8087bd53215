pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch, for call
    /// sites where None would mean that an internal invariant has been broken.
    ///
    /// No panics annotations are used, as the whole semantics are that if used, the function
    /// indicates that None is impossible.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("internal invariant violated: value was None"),
        }
    }
}
