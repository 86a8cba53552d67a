use std::ops::{Index, IndexMut};

use super::ContainerError;

/// Capacity used by [Sequence::new]; eight is the size of the largest cell neighbourhood.
pub const DEFAULT_CAPACITY: usize = 8;

/// A growable array that can be used as a list, a stack (push/pop at the tail) or a FIFO queue
/// (enqueue at the tail, dequeue at the head).
///
/// Capacity doubles when the backing store is full. Dequeueing only advances a logical head;
/// slots in front of the head are reclaimed when the store fills up and at least half of it is
/// dead, or as soon as the sequence runs empty, so a long-lived queue does not grow without bound.
#[derive(Clone, Debug)]
pub struct Sequence<T> {
    slots: Vec<Option<T>>,
    head: usize,
    capacity: usize,
}

impl<T> Default for Sequence<T> {
    fn default() -> Sequence<T> {
        Sequence::new()
    }
}

impl<T> Sequence<T> {
    pub fn new() -> Sequence<T> {
        Sequence {
            slots: Vec::with_capacity(DEFAULT_CAPACITY),
            head: 0,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty sequence with room for `capacity` elements before the first growth.
    pub fn with_capacity(capacity: usize) -> Result<Sequence<T>, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::InvalidCapacity(capacity));
        }
        Ok(Sequence {
            slots: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots reserved in the backing store.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an element at the tail.
    pub fn push(&mut self, element: T) {
        if self.slots.len() == self.capacity {
            self.grow();
        }
        self.slots.push(Some(element));
    }

    /// Queue alias of [push](Self::push).
    pub fn enqueue(&mut self, element: T) {
        self.push(element);
    }

    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        match index.checked_add(self.head).and_then(|ix| self.slots.get(ix)) {
            Some(Some(element)) => Ok(element),
            _ => Err(self.out_of_range(index)),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let err = self.out_of_range(index);
        match index.checked_add(self.head).and_then(|ix| self.slots.get_mut(ix)) {
            Some(Some(element)) => Ok(element),
            _ => Err(err),
        }
    }

    /// Replaces the element at `index`.
    pub fn put(&mut self, index: usize, element: T) -> Result<(), ContainerError> {
        *self.get_mut(index)? = element;
        Ok(())
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ContainerError> {
        for index in [a, b] {
            if index >= self.len() {
                return Err(self.out_of_range(index));
            }
        }
        self.swap_slots(a, b);
        Ok(())
    }

    /// Removes and returns the element at the tail.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        let element = self.slots.pop().flatten();
        self.reset_if_empty();
        element.ok_or(ContainerError::Empty)
    }

    /// Removes and returns the element at the head.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        let element = self.slots[self.head].take();
        self.head += 1;
        self.reset_if_empty();
        element.ok_or(ContainerError::Empty)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[self.head..].iter().flatten()
    }

    /// Unchecked swap by logical index, panics like slice indexing. Used by the heap, which only
    /// ever swaps positions it has just bounds-checked itself.
    pub(crate) fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(self.head + a, self.head + b);
    }

    fn out_of_range(&self, index: usize) -> ContainerError {
        ContainerError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }

    fn reset_if_empty(&mut self) {
        if self.head == self.slots.len() {
            self.slots.clear();
            self.head = 0;
        }
    }

    fn grow(&mut self) {
        if self.head > 0 && self.head >= self.capacity / 2 {
            self.slots.drain(..self.head);
            self.head = 0;
            return;
        }
        self.capacity *= 2;
        self.slots.reserve_exact(self.capacity - self.slots.len());
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Sequence<T> {
        let mut sequence = Sequence::new();
        sequence.extend(iter);
        sequence
    }
}
