//! Structural equality and lexicographic ordering.
//!
//! Both walk the two lists in step and stop at the first difference, so a
//! finite list can be compared with an infinite one. Two infinite lists that
//! agree everywhere never finish comparing.

use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;

use super::node::List;

/// The natural three-way comparison built from `==` and `<`.
///
/// Unlike [`PartialOrd::partial_cmp`] this is total: anything that is neither
/// equal nor less counts as greater.
pub fn natural<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a < b {
        return Ordering::Less;
    }
    return Ordering::Greater;
}

impl<T> List<T> {
    /// Lexicographic comparison with a custom element comparison. Returns
    /// `None` as soon as `cmp` does.
    fn lexicographic<F>(&self, other: &List<T>, mut cmp: F) -> Option<Ordering>
    where
        F: FnMut(&T, &T) -> Option<Ordering>,
    {
        let mut a = self.clone();
        let mut b = other.clone();
        loop {
            let (next_a, next_b) = match (a.node(), b.node()) {
                (None, None) => return Some(Ordering::Equal),
                (None, Some(_)) => return Some(Ordering::Less),
                (Some(_), None) => return Some(Ordering::Greater),
                (Some(x), Some(y)) => match cmp(&x.head, &y.head)? {
                    Ordering::Equal => (x.force_tail(), y.force_tail()),
                    ord => return Some(ord),
                },
            };
            a = next_a;
            b = next_b;
        }
    }

    /// Compare with `other` element by element using `cmp`: the empty list
    /// sorts first, and the first differing position decides.
    pub fn compare_by<F>(&self, other: &List<T>, mut cmp: F) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        return self
            .lexicographic(other, |a, b| Some(cmp(a, b)))
            .unwrap_or(Ordering::Equal);
    }

    /// Element-wise equality using `eq`. Lists of different length are
    /// never equal.
    pub fn eq_by<F>(&self, other: &List<T>, mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ord = self.lexicographic(other, |a, b| eq(a, b).then_some(Ordering::Equal));
        return ord == Some(Ordering::Equal);
    }
}

impl<T: PartialEq> List<T> {
    /// Structural equality, same as `==`.
    pub fn is_eq(&self, other: &List<T>) -> bool {
        return self == other;
    }
}

impl<T: PartialOrd> List<T> {
    /// Lexicographic comparison using [`natural`] on the elements.
    pub fn compare(&self, other: &List<T>) -> Ordering {
        return self.compare_by(other, natural);
    }

    pub fn is_less_than(&self, other: &List<T>) -> bool {
        return self.compare(other) == Ordering::Less;
    }

    pub fn is_less_than_or_equal(&self, other: &List<T>) -> bool {
        return self.compare(other) != Ordering::Greater;
    }

    pub fn is_greater_than(&self, other: &List<T>) -> bool {
        return self.compare(other) == Ordering::Greater;
    }

    pub fn is_greater_than_or_equal(&self, other: &List<T>) -> bool {
        return self.compare(other) != Ordering::Less;
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.eq_by(other, T::eq);
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return self.lexicographic(other, T::partial_cmp);
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        return self.compare_by(other, T::cmp);
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0usize;
        let mut list = self.clone();
        while let Some(node) = list.node() {
            node.head.hash(state);
            len += 1;
            let next = node.force_tail();
            list = next;
        }
        state.write_usize(len);
    }
}
