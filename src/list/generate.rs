//! Generators for ranges, infinite streams and cycles.
//!
//! Every generator computes its first element eagerly and each following
//! element only when the previous node's tail is forced.

use std::ops::Add;
use std::ops::Sub;
use std::rc::Rc;
use std::rc::Weak;

use num_traits::One;

use super::node::List;
use super::node::Node;
use super::node::Tail;
use crate::error::Error;
use crate::error::Result;

/// Apply `f` to `x` until `p` holds, and return the first value that
/// satisfies it.
pub fn until<T>(p: impl Fn(&T) -> bool, f: impl Fn(T) -> T, mut x: T) -> T {
    while !p(&x) {
        x = f(x);
    }
    return x;
}

/// Which way a range walks, and so which test ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl<T: Clone + 'static> List<T> {
    /// `first`, then `succ(first)`, and so on until `succ` returns `None`.
    ///
    /// Each successor is computed when the node before it has its tail forced.
    pub fn successors<F>(first: T, succ: F) -> List<T>
    where
        F: Fn(&T) -> Option<T> + 'static,
    {
        fn go<T: Clone + 'static, F: Fn(&T) -> Option<T> + 'static>(x: T, succ: Rc<F>) -> List<T> {
            let seed = x.clone();
            return List::cons_lazy(x, move || match succ(&seed) {
                Some(next) => go(next, succ),
                None => List::empty(),
            });
        }
        return go(first, Rc::new(succ));
    }

    /// Build a list from a seed: `step` yields the next element and the next
    /// seed, or `None` to stop. The first step runs immediately.
    pub fn unfold<S, F>(seed: S, step: F) -> List<T>
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        fn go<T: Clone + 'static, S: 'static, F: Fn(S) -> Option<(T, S)> + 'static>(
            seed: S,
            step: Rc<F>,
        ) -> List<T> {
            match step(seed) {
                Some((x, next)) => List::cons_lazy(x, move || go(next, step)),
                None => List::empty(),
            }
        }
        return go(seed, Rc::new(step));
    }

    /// The values from `start` towards `end`, stepping with `step`.
    ///
    /// Ascending ranges (`start < end`) keep every value up to and including
    /// `end`. Descending ranges (`start > end`) stop before reaching `end`, so
    /// `range_by(10, 0, |x| x - 1)` is `10..=1`. Equal bounds give `[start]`.
    pub fn range_by<F>(start: T, end: T, step: F) -> List<T>
    where
        T: PartialOrd,
        F: Fn(&T) -> T + 'static,
    {
        let direction = if start < end {
            Direction::Up
        } else if start > end {
            Direction::Down
        } else {
            return List::cons(start, List::empty());
        };

        return List::successors(start, move |x| {
            // Stepping past a bound equal to the type's maximum would overflow.
            if direction == Direction::Up && *x >= end {
                return None;
            }
            let next = step(x);
            let within = match direction {
                Direction::Up => next <= end,
                Direction::Down => next > end,
            };
            return within.then_some(next);
        });
    }

    /// The values between `start` and `end`, counting by one in whichever
    /// direction reaches `end`. See [`List::range_by`] for the boundaries.
    pub fn range(start: T, end: T) -> List<T>
    where
        T: PartialOrd + One + Add<Output = T> + Sub<Output = T>,
    {
        if start <= end {
            return List::range_by(start, end, |x| x.clone() + T::one());
        }
        return List::range_by(start, end, |x| x.clone() - T::one());
    }

    /// The values of a range that satisfy `p`.
    pub fn range_filter<P>(start: T, end: T, p: P) -> List<T>
    where
        T: PartialOrd + One + Add<Output = T> + Sub<Output = T>,
        P: Fn(&T) -> bool + 'static,
    {
        return List::range(start, end).filter(p);
    }

    /// `start, start + 1, start + 2, ...` forever.
    pub fn inf(start: T) -> List<T>
    where
        T: One + Add<Output = T>,
    {
        return List::inf_by(start, |x| x.clone() + T::one());
    }

    /// `start, step(start), step(step(start)), ...` forever.
    pub fn inf_by<F>(start: T, step: F) -> List<T>
    where
        F: Fn(&T) -> T + 'static,
    {
        return List::successors(start, move |x| Some(step(x)));
    }

    /// The infinite list of repeated applications of `f` to `x`:
    /// `x, f(x), f(f(x)), ...`.
    pub fn iterate<F>(f: F, x: T) -> List<T>
    where
        F: Fn(&T) -> T + 'static,
    {
        return List::inf_by(x, f);
    }

    /// `x` forever.
    pub fn repeat(x: T) -> List<T> {
        return List::cons(x.clone(), List::iterate(T::clone, x));
    }

    /// A list of `n` copies of `x`.
    pub fn replicate(n: usize, x: T) -> List<T> {
        return List::repeat(x).take(n);
    }

    /// Repeat this finite list forever.
    ///
    /// The first pass is built lazily from the input. After that the list
    /// loops back onto its own nodes, so elements one period apart are the
    /// same node and nothing is recomputed.
    pub fn cycle(&self) -> Result<List<T>> {
        let (x, xs) = self.uncons().ok_or(Error::empty("cycle"))?;
        let source = self.clone();
        let first = Rc::new_cyclic(|anchor: &Weak<Node<T>>| Node {
            head: x.clone(),
            tail: cycle_tail(xs, anchor.clone(), source),
        });
        return Ok(List(Some(first)));
    }
}

/// Tail of a cycle node whose successors in the input are `rest`.
fn cycle_tail<T: Clone + 'static>(rest: List<T>, anchor: Weak<Node<T>>, source: List<T>) -> Tail<T> {
    if rest.is_empty() {
        return Tail::back(anchor, move || source.cycle().unwrap_or_default());
    }
    return Tail::deferred(move || {
        let (x, xs) = match rest.uncons() {
            Some(split) => split,
            None => return List::empty(),
        };
        return List::from_node(Node {
            head: x.clone(),
            tail: cycle_tail(xs, anchor, source),
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn until_applies_until_true() {
        assert_eq!(until(|x: &i32| *x > 10, |x| x + 1, 1), 11);
        assert_eq!(until(|x: &i32| *x > 10, |x| x + 1, 20), 20);
    }

    #[test]
    fn range_ascending_includes_end() {
        assert_eq!(List::range(0, 10), list![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn range_descending_stops_before_end() {
        assert_eq!(List::range(10, 0), list![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(List::range_by(10, 0, |x| x - 1), list![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn range_equal_bounds_is_singleton() {
        assert_eq!(List::range(1, 1), list![1]);
        assert_eq!(List::range_by(1, 1, |x| x * 100), list![1]);
    }

    #[test]
    fn range_by_custom_step() {
        assert_eq!(List::range_by(0, 50, |x| x + 5), list![0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
        // Overshooting steps never cross the end.
        assert_eq!(List::range_by(0, 12, |x| x + 5), list![0, 5, 10]);
    }

    #[test]
    fn range_ending_at_type_maximum() {
        assert_eq!(List::range(250u8, 255), list![250, 251, 252, 253, 254, 255]);
        assert_eq!(List::range(i32::MAX - 2, i32::MAX).length(), 3);
        assert_eq!(List::range_by(0u8, u8::MAX, |x| x + 85), list![0, 85, 170, 255]);
        assert_eq!(List::range(u8::MAX, u8::MAX), list![u8::MAX]);
    }

    #[test]
    fn range_descending_to_type_minimum() {
        assert_eq!(List::range(3u8, 0), list![3, 2, 1]);
        assert_eq!(List::range(i32::MIN + 2, i32::MIN), list![i32::MIN + 2, i32::MIN + 1]);
    }

    #[test]
    fn range_over_floats() {
        assert_eq!(List::range(0.5, 2.5), list![0.5, 1.5, 2.5]);
    }

    #[test]
    fn range_filter_keeps_matches() {
        let evens = List::range_filter(1, 30, |x| x % 2 == 0);
        assert_eq!(evens, list![2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30]);
    }

    #[test]
    fn range_is_lazy() {
        let range = List::range(0, 1_000_000_000);
        assert!(!range.is_forced());
        assert_eq!(range.index(5), Ok(5));
    }

    #[test]
    fn inf_counts_up() {
        assert_eq!(List::inf(1).take(5), list![1, 2, 3, 4, 5]);
        assert_eq!(List::inf_by(1, |x| x * 2).take(5), list![1, 2, 4, 8, 16]);
    }

    #[test]
    fn iterate_doubles() {
        let powers = List::iterate(|x| x * 2, 1);
        assert_eq!(powers.take(10), list![1, 2, 4, 8, 16, 32, 64, 128, 256, 512]);
        assert_eq!(powers.index(10), Ok(1024));
    }

    #[test]
    fn successors_stop_on_none() {
        let halves = List::successors(100, |x| if *x > 1 { Some(x / 2) } else { None });
        assert_eq!(halves, list![100, 50, 25, 12, 6, 3, 1]);
    }

    #[test]
    fn unfold_fibonacci() {
        let fib = List::unfold((0u64, 1u64), |(a, b)| Some((a, (b, a + b))));
        assert_eq!(fib.take(10), list![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn unfold_may_be_empty() {
        let none: List<i32> = List::unfold(0, |_| None);
        assert!(none.is_empty());
    }

    #[test]
    fn repeat_and_replicate() {
        let threes = List::repeat(3);
        assert_eq!(threes.take(10), list![3, 3, 3, 3, 3, 3, 3, 3, 3, 3]);
        assert_eq!(threes.index(100), Ok(3));
        assert_eq!(List::replicate(4, 'x'), list!['x', 'x', 'x', 'x']);
        assert!(List::replicate(0, 'x').is_empty());
    }

    #[test]
    fn cycle_repeats_input() {
        let c = list![1, 2, 3].cycle().unwrap();
        assert_eq!(c.take(9), list![1, 2, 3, 1, 2, 3, 1, 2, 3]);
        assert_eq!(c.index(100), Ok(2));
    }

    #[test]
    fn cycle_of_empty_fails() {
        assert_eq!(List::<i32>::empty().cycle().unwrap_err(), Error::empty("cycle"));
    }

    #[test]
    fn cycle_reuses_nodes_one_period_apart() {
        let c = list![1, 2, 3].cycle().unwrap();
        assert!(c.drop(3).ptr_eq(&c));
        assert!(c.drop(4).ptr_eq(&c.drop(1)));
        assert!(c.drop(3_000_001).ptr_eq(&c.drop(1)));
    }

    #[test]
    fn cycle_of_singleton_loops_on_itself() {
        let c = list![7].cycle().unwrap();
        assert!(c.tail().unwrap().ptr_eq(&c));
        assert_eq!(c.take(3), list![7, 7, 7]);
    }

    #[test]
    fn cycle_survives_dropping_its_front() {
        let c = list![1, 2, 3].cycle().unwrap();
        let rest = c.drop(1);
        drop(c);
        assert_eq!(rest.take(7), list![2, 3, 1, 2, 3, 1, 2]);
        assert_eq!(rest.index(301), Ok(3));
    }

    #[test]
    fn cycle_over_lazy_input() {
        let c = List::range(1, 4).cycle().unwrap();
        assert_eq!(c.take(8), list![1, 2, 3, 4, 1, 2, 3, 4]);
    }
}
