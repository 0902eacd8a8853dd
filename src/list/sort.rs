//! Natural merge sort.
//!
//! The input is first cut into maximal runs: ascending runs (ties allowed)
//! are kept, strictly descending runs are reversed. Adjacent runs are then
//! merged pairwise until one is left. Sorted or reverse-sorted input is a
//! single run, so it costs one pass.
//!
//! Runs are built eagerly; sorting requires a finite list.

use std::cmp::Ordering;

use smallvec::SmallVec;
use smallvec::smallvec;

use super::compare::natural;
use super::node::List;
use crate::profiling;

/// Ascending runs up to this length are buffered inline.
const RUN_INLINE: usize = 16;

impl<T: Clone + 'static> List<T> {
    /// Sort with the natural ordering of the elements. Stable.
    pub fn sort(&self) -> List<T>
    where
        T: PartialOrd,
    {
        return self.sort_by(natural);
    }

    /// Sort with a three-way comparison. Stable: elements that compare equal
    /// keep their relative order.
    pub fn sort_by<F>(&self, mut cmp: F) -> List<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.is_empty() || self.rest().is_empty() {
            return self.clone();
        }
        let mut cmp = |a: &T, b: &T| {
            profiling::sort_compare();
            return cmp(a, b);
        };
        let runs = sequences(self, &mut cmp);
        return merge_all(runs, &mut cmp);
    }
}

/// Cut a list into sorted runs.
fn sequences<T, F>(list: &List<T>, cmp: &mut F) -> Vec<List<T>>
where
    T: Clone + 'static,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs = Vec::new();
    let mut items = list.iter().peekable();

    while let Some(a) = items.next() {
        profiling::sort_run();
        let Some(b) = items.next() else {
            runs.push(List::pure(a));
            break;
        };

        if cmp(&a, &b) == Ordering::Greater {
            // Consing a descending run reverses it for free.
            let mut run = List::pure(a);
            let mut last = b;
            while let Some(next) = items.next_if(|c| cmp(&last, c) == Ordering::Greater) {
                run = List::cons(last, run);
                last = next;
            }
            runs.push(List::cons(last, run));
        } else {
            let mut run: SmallVec<[T; RUN_INLINE]> = smallvec![a];
            let mut last = b;
            while let Some(next) = items.next_if(|c| cmp(&last, c) != Ordering::Greater) {
                run.push(last);
                last = next;
            }
            run.push(last);
            runs.push(run.into_iter().collect());
        }
    }

    return runs;
}

/// Merge runs pairwise until one remains.
fn merge_all<T, F>(mut runs: Vec<List<T>>, cmp: &mut F) -> List<T>
where
    T: Clone + 'static,
    F: FnMut(&T, &T) -> Ordering,
{
    while runs.len() > 1 {
        runs = merge_pairs(runs, cmp);
    }
    return runs.pop().unwrap_or_default();
}

/// Merge runs 0 and 1, 2 and 3, and so on. An odd run out is kept as is.
fn merge_pairs<T, F>(runs: Vec<List<T>>, cmp: &mut F) -> Vec<List<T>>
where
    T: Clone + 'static,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
    let mut runs = runs.into_iter();
    while let Some(a) = runs.next() {
        match runs.next() {
            Some(b) => merged.push(merge(a, b, cmp)),
            None => merged.push(a),
        }
    }
    return merged;
}

/// Stable two-way merge. Whichever input is left over is shared, not copied.
fn merge<T, F>(mut a: List<T>, mut b: List<T>, cmp: &mut F) -> List<T>
where
    T: Clone + 'static,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::new();
    let rest = loop {
        let (x, y) = match (a.first(), b.first()) {
            (None, _) => break b,
            (_, None) => break a,
            (Some(x), Some(y)) => (x, y),
        };
        if cmp(x, y) == Ordering::Greater {
            out.push(y.clone());
            b = b.rest();
        } else {
            out.push(x.clone());
            a = a.rest();
        }
    };
    return out.into_iter().rev().fold(rest, |acc, x| List::cons(x, acc));
}
