//! Functor, applicative, monad and monoid operations, plus traversal.
//!
//! Lists model nondeterminism here: `ap` and `flat_map` combine every
//! choice on the left with every choice on the right, left-major.

use super::node::List;

impl<T: Clone + 'static> List<T> {
    /// Functor map. Same as [`List::map`].
    pub fn fmap<U, F>(&self, f: F) -> List<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        return self.map(f);
    }

    /// Lift a value into a one-element list.
    pub fn pure(x: T) -> List<T> {
        return List::cons(x, List::empty());
    }

    /// Map `f` over the list and concatenate the resulting lists in order.
    pub fn flat_map<U, F>(&self, f: F) -> List<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> List<U> + 'static,
    {
        return self.map(f).concat();
    }

    /// Sequential composition: `other` once per element of `self`, with the
    /// elements of `self` discarded.
    pub fn then<U: Clone + 'static>(&self, other: &List<U>) -> List<U> {
        let other = other.clone();
        return self.flat_map(move |_| other.clone());
    }

    /// The monoid identity, i.e. the empty list.
    pub fn mempty() -> List<T> {
        return List::empty();
    }

    /// The monoid operation, i.e. [`List::append`].
    pub fn mappend(&self, other: &List<T>) -> List<T> {
        return self.append(other);
    }

    /// Apply `f` to every element and collect every combination of the
    /// results.
    ///
    /// With `f` returning lists this is the cartesian product of
    /// `f(x0), f(x1), ...`, each combination a list. An empty input yields
    /// `[[]]`. The input must be finite. `f` is applied to the elements
    /// first to last.
    pub fn traverse<U, F>(&self, f: F) -> List<List<U>>
    where
        U: Clone + 'static,
        F: Fn(&T) -> List<U>,
    {
        let choices: Vec<List<U>> = self.iter().map(|x| f(&x)).collect();
        return choices.into_iter().rev().fold(List::pure(List::empty()), |rests, ys| {
            return ys.flat_map(move |y| {
                let y = y.clone();
                return rests.map(move |rest| List::cons(y.clone(), rest.clone()));
            });
        });
    }
}

impl<F: Clone + 'static> List<F> {
    /// Apply every function to every value: all of `xs` through the first
    /// function, then all of `xs` through the second, and so on.
    pub fn ap<A, U>(&self, xs: &List<A>) -> List<U>
    where
        A: Clone + 'static,
        U: Clone + 'static,
        F: Fn(&A) -> U,
    {
        let xs = xs.clone();
        return self.flat_map(move |f| xs.map(f.clone()));
    }
}

impl<T: Clone + 'static> List<List<T>> {
    /// Every way of picking one element from each inner list, in order.
    pub fn sequence(&self) -> List<List<T>> {
        return self.traverse(List::clone);
    }
}
