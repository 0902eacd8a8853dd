//! Structural operations over lists.
//!
//! Operations that build a list (`map`, `filter`, `append`, `take`, ...) are
//! lazy: each output node forces the input only as far as it needs to, so
//! they are safe on infinite lists. Operations that reduce a list (`length`,
//! `last`, `reverse`, `fold`) walk the whole thing and need a finite input.

use std::rc::Rc;

use super::node::List;
use crate::error::Error;
use crate::error::Result;

impl<T: Clone + 'static> List<T> {
    /// Apply `f` to every element.
    pub fn map<U, F>(&self, f: F) -> List<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        fn go<T: Clone + 'static, U: 'static, F: Fn(&T) -> U + 'static>(list: List<T>, f: Rc<F>) -> List<U> {
            let Some(x) = list.first() else {
                return List::empty();
            };
            let y = f(x);
            return List::cons_lazy(y, move || go(list.rest(), f));
        }
        return go(self.clone(), Rc::new(f));
    }

    /// The elements for which `p` holds.
    ///
    /// Finding each element may force arbitrarily many input nodes; on an
    /// infinite list with no further matches this never returns.
    pub fn filter<P>(&self, p: P) -> List<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        fn go<T: Clone + 'static, P: Fn(&T) -> bool + 'static>(mut list: List<T>, p: Rc<P>) -> List<T> {
            loop {
                let Some(x) = list.first() else {
                    return List::empty();
                };
                if p(x) {
                    let x = x.clone();
                    return List::cons_lazy(x, move || go(list.rest(), p));
                }
                list = list.rest();
            }
        }
        return go(self.clone(), Rc::new(p));
    }

    /// This list followed by `other`. If this list is infinite, `other` is
    /// never reached.
    pub fn append(&self, other: &List<T>) -> List<T> {
        fn go<T: Clone + 'static>(list: List<T>, other: List<T>) -> List<T> {
            let Some(x) = list.first().cloned() else {
                return other;
            };
            return List::cons_lazy(x, move || go(list.rest(), other));
        }
        if other.is_empty() {
            return self.clone();
        }
        return go(self.clone(), other.clone());
    }

    /// The first `n` elements, or all of them if there are fewer.
    pub fn take(&self, n: usize) -> List<T> {
        fn go<T: Clone + 'static>(list: List<T>, n: usize) -> List<T> {
            if n == 0 {
                return List::empty();
            }
            let Some(x) = list.first().cloned() else {
                return List::empty();
            };
            if n == 1 {
                return List::cons(x, List::empty());
            }
            return List::cons_lazy(x, move || go(list.rest(), n - 1));
        }
        return go(self.clone(), n);
    }

    /// Everything after the first `n` elements. Shares nodes with `self`.
    pub fn drop(&self, n: usize) -> List<T> {
        let mut list = self.clone();
        for _ in 0..n {
            if list.is_empty() {
                break;
            }
            list = list.rest();
        }
        return list;
    }

    /// The longest prefix whose elements all satisfy `p`.
    pub fn take_while<P>(&self, p: P) -> List<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        fn go<T: Clone + 'static, P: Fn(&T) -> bool + 'static>(list: List<T>, p: Rc<P>) -> List<T> {
            let x = match list.first() {
                Some(x) if p(x) => x.clone(),
                _ => return List::empty(),
            };
            return List::cons_lazy(x, move || go(list.rest(), p));
        }
        return go(self.clone(), Rc::new(p));
    }

    /// What remains after dropping the longest prefix that satisfies `p`.
    pub fn drop_while<P>(&self, p: P) -> List<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut list = self.clone();
        while list.first().is_some_and(|x| p(x)) {
            list = list.rest();
        }
        return list;
    }

    /// The element at zero-based position `n`.
    pub fn index(&self, n: usize) -> Result<T> {
        let mut list = self.clone();
        for _ in 0..n {
            if list.is_empty() {
                break;
            }
            list = list.rest();
        }
        return list.first().cloned().ok_or(Error::out_of_range("index", n));
    }

    /// Number of elements.
    pub fn length(&self) -> usize {
        let mut len = 0;
        let mut list = self.clone();
        while !list.is_empty() {
            len += 1;
            list = list.rest();
        }
        return len;
    }

    /// The final element.
    pub fn last(&self) -> Result<T> {
        let mut list = self.clone();
        loop {
            let Some((x, xs)) = list.uncons() else {
                return Err(Error::empty("last"));
            };
            if xs.is_empty() {
                return Ok(x.clone());
            }
            list = xs;
        }
    }

    /// Every element except the last one.
    pub fn init(&self) -> Result<List<T>> {
        fn go<T: Clone + 'static>(list: List<T>) -> List<T> {
            let Some((x, xs)) = list.uncons() else {
                return List::empty();
            };
            if xs.is_empty() {
                return List::empty();
            }
            return List::cons_lazy(x.clone(), move || go(xs));
        }
        if self.is_empty() {
            return Err(Error::empty("init"));
        }
        return Ok(go(self.clone()));
    }

    /// The elements in reverse order.
    pub fn reverse(&self) -> List<T> {
        let mut reversed = List::empty();
        let mut list = self.clone();
        while let Some((x, xs)) = list.uncons() {
            reversed = List::cons(x.clone(), reversed);
            list = xs;
        }
        return reversed;
    }

    /// Right fold: `f(x0, f(x1, ... f(xn, acc)))`.
    ///
    /// The whole list is materialized before `f` is first applied.
    pub fn fold<A, F>(&self, acc: A, mut f: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        let items = self.to_vec();
        return items.iter().rev().fold(acc, |acc, x| f(x, acc));
    }
}

impl<T: Clone + 'static> List<List<T>> {
    /// Flatten a list of lists, in order.
    pub fn concat(&self) -> List<T> {
        fn go<T: Clone + 'static>(mut inner: List<T>, mut outer: List<List<T>>) -> List<T> {
            loop {
                if let Some(x) = inner.first().cloned() {
                    return List::cons_lazy(x, move || go(inner.rest(), outer));
                }
                let Some(next) = outer.first().cloned() else {
                    return List::empty();
                };
                inner = next;
                outer = outer.rest();
            }
        }
        return go(List::empty(), self.clone());
    }
}
