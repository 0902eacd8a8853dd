/// Build a finite [`List`](crate::List) from its elements.
///
/// ```
/// use lazy_list::{List, list};
///
/// let xs = list![1, 2, 3];
/// assert_eq!(xs.to_string(), "[1:2:3:[]]");
/// assert!(list![].ptr_eq(&List::<i32>::empty()));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::empty()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::List::from(::std::vec![$($x),+])
    };
}
