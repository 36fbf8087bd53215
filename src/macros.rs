/// Creates a [`HashSet`](crate::collections::hash::HashSet) containing the provided members.
/// Duplicates collapse into one member, and no arguments create an empty set.
///
/// ```
/// use gadget::hash_set;
///
/// let set = hash_set!["a", "b", "a"];
/// assert_eq!(set.len(), 2);
///
/// let empty: gadget::collections::hash::HashSet<u8> = hash_set![];
/// assert!(empty.is_empty());
/// ```
#[cfg(feature = "hash")]
#[macro_export]
macro_rules! hash_set {
    () => {
        $crate::collections::hash::HashSet::new()
    };
    ($($item:expr),+ $(,)?) => {
        <$crate::collections::hash::HashSet<_> as ::core::convert::From<_>>::from([$($item),+])
    };
}
