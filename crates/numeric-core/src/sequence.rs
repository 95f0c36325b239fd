//! Sequence inputs for container aggregates

use std::collections::{btree_set, linked_list, vec_deque, BTreeSet, LinkedList, VecDeque};
use std::slice;

/// A container whose elements can be traversed front to back by reference.
///
/// Aggregates borrow their input through this trait and never mutate it.
/// Iteration order is preserved but none of the aggregates depend on it for
/// their value, only for tie-breaking in `max`/`min`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not Iterable: it cannot be traversed element by element",
    label = "expected a sequence such as a slice, array, `Vec` or `VecDeque`",
    note = "implement `numeric_core::Iterable` for `{Self}` to aggregate over it"
)]
pub trait Iterable {
    /// Element type yielded by the traversal
    type Element;

    /// Forward iterator over borrowed elements
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Iterate the elements in order
    fn elements(&self) -> Self::Iter<'_>;

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Iterable for [T] {
    type Element = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    type Element = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Iterable for Vec<T> {
    type Element = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Iterable for Box<[T]> {
    type Element = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Iterable for VecDeque<T> {
    type Element = T;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Iterable for LinkedList<T> {
    type Element = T;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Iterable for BTreeSet<T> {
    type Element = T;
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<C: Iterable + ?Sized> Iterable for &C {
    type Element = C::Element;
    type Iter<'a> = C::Iter<'a> where Self: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        (**self).elements()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<C: Iterable + ?Sized>(seq: &C) -> Vec<&C::Element> {
        seq.elements().collect()
    }

    #[test]
    fn test_slice_and_array() {
        let array = [3, 1, 2];
        assert_eq!(collect(&array), vec![&3, &1, &2]);
        assert_eq!(Iterable::len(&array), 3);
        assert_eq!(collect(&array[1..]), vec![&1, &2]);
    }

    #[test]
    fn test_vec_and_boxed_slice() {
        let v = vec![1.5, 2.5];
        assert_eq!(collect(&v), vec![&1.5, &2.5]);
        let boxed: Box<[i32]> = vec![4, 5, 6].into_boxed_slice();
        assert_eq!(Iterable::len(&boxed), 3);
    }

    #[test]
    fn test_deque_preserves_front_to_back_order() {
        let mut deque = VecDeque::new();
        deque.push_back(2);
        deque.push_front(1);
        deque.push_back(3);
        assert_eq!(collect(&deque), vec![&1, &2, &3]);
    }

    #[test]
    fn test_linked_list_and_set() {
        let list: LinkedList<u8> = [9, 8].into_iter().collect();
        assert_eq!(collect(&list), vec![&9, &8]);
        let set: BTreeSet<i64> = [5, -1, 5].into_iter().collect();
        assert_eq!(Iterable::len(&set), 2);
    }

    #[test]
    fn test_empty_sequences() {
        let empty: Vec<f64> = Vec::new();
        assert!(Iterable::is_empty(&empty));
        assert!(Iterable::is_empty(&[0u8; 0]));
        assert!(!Iterable::is_empty(&[0u8; 1]));
    }

    #[test]
    fn test_references_forward_to_the_container() {
        let v = vec![4, 5];
        let by_ref = &v;
        assert_eq!(collect(&by_ref), vec![&4, &5]);
        assert_eq!(Iterable::len(&by_ref), 2);

        let deque: VecDeque<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(collect(&&&deque), vec![&1, &2, &3]);
        assert!(Iterable::is_empty(&&[0u8; 0]));
    }
}
