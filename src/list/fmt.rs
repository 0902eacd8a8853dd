//! Rendering lists as text.

use std::any::type_name;
use std::fmt;

use super::node::List;

impl<T> List<T> {
    /// The element type in brackets, e.g. `[i32]`, or `[]` for the empty list.
    pub fn type_of(&self) -> String {
        if self.is_empty() {
            return "[]".to_string();
        }
        return format!("[{}]", type_name::<T>());
    }
}

/// Cons notation: `[1:2:3:[]]`, and `[]` for the empty list. Forces the
/// whole list, so it must be finite.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        f.write_str("[")?;
        let mut list = self.clone();
        while let Some(node) = list.node() {
            write!(f, "{}:", node.head)?;
            let next = node.force_tail();
            list = next;
        }
        return f.write_str("[]]");
    }
}

/// Shows the elements evaluated so far, followed by `..` if the rest has not
/// been forced yet. Never runs a rule.
impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_list();
        let mut list = self.clone();
        while let Some(node) = list.node() {
            out.entry(&node.head);
            if node.closes_cycle() {
                out.entry(&format_args!("..."));
                break;
            }
            let Some(next) = node.peek_tail() else {
                out.entry(&format_args!(".."));
                break;
            };
            list = next;
        }
        return out.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn display_cons_notation() {
        assert_eq!(list![1, 2, 3].to_string(), "[1:2:3:[]]");
        assert_eq!(List::<i32>::empty().to_string(), "[]");
        assert_eq!(list!['a', 'b'].to_string(), "[a:b:[]]");
    }

    #[test]
    fn debug_shows_forced_prefix() {
        let naturals = List::inf(1);
        assert_eq!(format!("{naturals:?}"), "[1, ..]");
        let _ = naturals.index(2);
        assert_eq!(format!("{naturals:?}"), "[1, 2, 3, ..]");
        assert!(!naturals.drop(2).is_forced());
        assert_eq!(format!("{:?}", list![1, 2]), "[1, 2]");
    }

    #[test]
    fn debug_stops_at_cycle() {
        let xs = list![1, 2].cycle().unwrap();
        let _ = xs.index(2);
        assert_eq!(format!("{xs:?}"), "[1, 2, ...]");
    }

    #[test]
    fn debug_stops_at_cycle_behind_a_prefix() {
        let xs = list![1, 2].cycle().unwrap();
        let _ = xs.index(2);
        let prefixed = List::cons(0, xs.clone());
        assert_eq!(format!("{prefixed:?}"), "[0, 1, 2, ...]");

        let appended = list![0].append(&xs);
        let _ = appended.index(5);
        assert_eq!(format!("{appended:?}"), "[0, 1, 2, ...]");

        let middle = xs.drop(1);
        assert_eq!(format!("{middle:?}"), "[2, ...]");
    }

    #[test]
    fn type_names() {
        assert_eq!(list![1, 2, 3].type_of(), "[i32]");
        assert_eq!(List::from("abc").type_of(), "[char]");
        assert_eq!(List::<i32>::empty().type_of(), "[]");
    }
}
