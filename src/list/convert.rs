//! Iteration and conversions to and from standard collections.

use std::any::Any;
use std::iter::FusedIterator;

use super::node::List;

/// Iterator over the elements of a list, forcing tails as it goes.
///
/// Holds its own handle on the list, so it may outlive the list it came
/// from. Yields clones of the elements.
pub struct Iter<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (x, xs) = self.list.uncons()?;
        let x = x.clone();
        self.list = xs;
        return Some(x);
    }
}

impl<T: Clone> FusedIterator for Iter<T> {}

impl<T> List<T> {
    /// Iterate over the elements. Works on infinite lists too; pair it with
    /// `take` or `take_while` to stop.
    pub fn iter(&self) -> Iter<T> {
        return Iter { list: self.clone() };
    }

    /// Whether `value` is a list of `T`.
    pub fn is_list(value: &dyn Any) -> bool
    where
        T: 'static,
    {
        return value.is::<List<T>>();
    }
}

impl<T: Clone> List<T> {
    /// Collect every element into a `Vec`. The list must be finite.
    pub fn to_vec(&self) -> Vec<T> {
        return self.iter().collect();
    }

    /// A list holding clones of the elements of `items`.
    pub fn from_slice(items: &[T]) -> List<T> {
        return items.iter().rev().fold(List::empty(), |acc, x| List::cons(x.clone(), acc));
    }
}

impl List<char> {
    /// The characters of `s`, in order.
    pub fn from_str_chars(s: &str) -> List<char> {
        return s.chars().collect();
    }

    /// The characters of the list as a `String`. The list must be finite.
    pub fn to_plain_string(&self) -> String {
        return self.iter().collect();
    }
}

impl From<&str> for List<char> {
    fn from(s: &str) -> Self {
        return List::from_str_chars(s);
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        return items.into_iter().rev().fold(List::empty(), |acc, x| List::cons(x, acc));
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        return List::from(items);
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        return Iter { list: self };
    }
}

impl<T: Clone> IntoIterator for &List<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        return self.iter();
    }
}
