//! Lazy cons cells and the force/memoize protocol.
//!
//! A [`List`] is either the empty list or a reference-counted [`Node`]. Every
//! node owns an eagerly-known head and a [`Tail`] slot. A tail is either
//! already known, or a production rule that runs at most once; its result is
//! cached in place so every holder of the node sees the same suffix.
//!
//! ```text
//! [1 | Known] -> [2 | Deferred(rule)]        before forcing
//! [1 | Known] -> [2 | Deferred(cached)] -> [3 | Deferred(rule)]
//! ```
//!
//! Cycles close with a [`Tail::Back`] slot holding a weak reference to the
//! first node of the period, so a circular list never keeps itself alive.

use std::cell::Cell;
use std::cell::OnceCell;
use std::rc::Rc;
use std::rc::Weak;

use crate::error::Error;
use crate::error::Result;
use crate::profiling;

/// A zero-argument production rule for the rest of a list.
pub(crate) type Rule<T> = Box<dyn FnOnce() -> List<T>>;

/// A persistent, possibly infinite, lazily evaluated linked list.
///
/// Cloning a `List` is O(1) and shares every node, including the memoized
/// tails, with the original.
pub struct List<T>(pub(crate) Option<Rc<Node<T>>>);

/// A single cons cell.
pub(crate) struct Node<T> {
    pub(crate) head: T,
    pub(crate) tail: Tail<T>,
}

/// The tail slot of a node.
pub(crate) enum Tail<T> {
    /// Tail supplied at construction.
    Known(List<T>),
    /// Tail produced on first read, then cached.
    Deferred {
        rule: Cell<Option<Rule<T>>>,
        cached: OnceCell<List<T>>,
    },
    /// Back edge of a cycle. Resolves to `anchor` while it is alive and
    /// otherwise runs `rebuild` once.
    Back {
        anchor: Weak<Node<T>>,
        rebuild: Cell<Option<Rule<T>>>,
        cached: OnceCell<List<T>>,
    },
}

/// Run a rule that has not been taken yet.
fn run<T>(rule: &Cell<Option<Rule<T>>>) -> List<T> {
    profiling::rule_call();
    // The rule is only missing while it is already running for this slot.
    let rule = rule.take().expect("list tail forced reentrantly");
    return rule();
}

impl<T> Tail<T> {
    pub(crate) fn deferred(rule: impl FnOnce() -> List<T> + 'static) -> Tail<T> {
        return Tail::Deferred {
            rule: Cell::new(Some(Box::new(rule))),
            cached: OnceCell::new(),
        };
    }

    pub(crate) fn back(anchor: Weak<Node<T>>, rebuild: impl FnOnce() -> List<T> + 'static) -> Tail<T> {
        return Tail::Back {
            anchor,
            rebuild: Cell::new(Some(Box::new(rebuild))),
            cached: OnceCell::new(),
        };
    }

    /// Detach the strongly held rest of the list, leaving the slot empty.
    fn take_next(&mut self) -> Option<Rc<Node<T>>> {
        match self {
            Tail::Known(list) => list.0.take(),
            Tail::Deferred { cached, .. } => cached.take().and_then(|list| list.0),
            Tail::Back { cached, .. } => cached.take().and_then(|list| list.0),
        }
    }
}

impl<T> Node<T> {
    /// Resolve the tail, running its rule if this is the first read.
    pub(crate) fn force_tail(&self) -> List<T> {
        match &self.tail {
            Tail::Known(list) => list.clone(),
            Tail::Deferred { rule, cached } => {
                profiling::tail_force();
                return cached.get_or_init(|| run(rule)).clone();
            }
            Tail::Back { anchor, rebuild, cached } => {
                profiling::tail_force();
                if let Some(list) = cached.get() {
                    return list.clone();
                }
                if let Some(first) = anchor.upgrade() {
                    profiling::cycle_revisit();
                    return List(Some(first));
                }
                profiling::cycle_rebuild();
                return cached.get_or_init(|| run(rebuild)).clone();
            }
        }
    }

    /// Whether the tail slot is the back edge that closes a cycle.
    pub(crate) fn closes_cycle(&self) -> bool {
        return matches!(self.tail, Tail::Back { .. });
    }

    /// The tail if it is already available, without running any rule.
    pub(crate) fn peek_tail(&self) -> Option<List<T>> {
        match &self.tail {
            Tail::Known(list) => Some(list.clone()),
            Tail::Deferred { cached, .. } => cached.get().cloned(),
            Tail::Back { anchor, cached, .. } => {
                cached.get().cloned().or_else(|| anchor.upgrade().map(|first| List(Some(first))))
            }
        }
    }
}

impl<T> Drop for Node<T> {
    // Unlink uniquely owned successors one at a time so that long chains do
    // not recurse through the destructor.
    fn drop(&mut self) {
        let mut next = self.tail.take_next();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => next = node.tail.take_next(),
                Err(_) => break,
            }
        }
    }
}

impl<T> List<T> {
    /// The empty list.
    pub const fn empty() -> List<T> {
        return List(None);
    }

    /// The empty list.
    pub const fn new() -> List<T> {
        return List::empty();
    }

    /// Prepend `head` to an existing list.
    pub fn cons(head: T, tail: List<T>) -> List<T> {
        return List::from_node(Node { head, tail: Tail::Known(tail) });
    }

    /// Prepend `head` to a list that is produced on first demand.
    ///
    /// The rule runs at most once, however many times the tail is read.
    pub fn cons_lazy(head: T, rest: impl FnOnce() -> List<T> + 'static) -> List<T> {
        return List::from_node(Node { head, tail: Tail::deferred(rest) });
    }

    pub(crate) fn from_node(node: Node<T>) -> List<T> {
        return List(Some(Rc::new(node)));
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        return self.0.as_deref();
    }

    /// Whether this is the empty list. Never forces anything.
    pub fn is_empty(&self) -> bool {
        return self.0.is_none();
    }

    /// The first element.
    pub fn head(&self) -> Result<&T> {
        return self.first().ok_or(Error::empty("head"));
    }

    /// The first element, or `None` for the empty list.
    pub fn first(&self) -> Option<&T> {
        return self.node().map(|node| &node.head);
    }

    /// Everything after the first element, forcing it if needed.
    ///
    /// Repeated calls return the very same list (see [`List::ptr_eq`]).
    pub fn tail(&self) -> Result<List<T>> {
        return self.node().map(Node::force_tail).ok_or(Error::empty("tail"));
    }

    /// Split into head and tail, or `None` for the empty list.
    pub fn uncons(&self) -> Option<(&T, List<T>)> {
        let node = self.node()?;
        return Some((&node.head, node.force_tail()));
    }

    /// The tail, treating the tail of the empty list as empty.
    pub(crate) fn rest(&self) -> List<T> {
        return self.node().map(Node::force_tail).unwrap_or_default();
    }

    /// Whether the tail has already been materialized. Always true for the
    /// empty list.
    pub fn is_forced(&self) -> bool {
        return self.node().map_or(true, |node| node.peek_tail().is_some());
    }

    /// Identity comparison: both empty, or both the same node.
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        return List(self.0.clone());
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        return List::empty();
    }
}
