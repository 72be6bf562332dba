use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::{Error, Result, check_range};
use crate::util::write_items;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list with O(1) access to both ends.
///
/// Every node is owned by the list; `tail` aliases the last node reachable from `head`.
/// `len == 0` iff `head` and `tail` are both `None`.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc_node(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Walks from the head. Caller guarantees `index < len`.
    fn node_at(&self, index: usize) -> NonNull<Node<T>> {
        debug_assert!(index < self.len);
        let mut cur = self.head;
        for _ in 0..index {
            cur = cur.and_then(|ptr| unsafe { (*ptr.as_ptr()).next });
        }
        match cur {
            Some(ptr) => ptr,
            None => unreachable!("node_at: list shorter than its length"),
        }
    }

    pub fn append(&mut self, value: T) {
        let node = Self::alloc_node(value, None);
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn prepend(&mut self, value: T) {
        let node = Self::alloc_node(value, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` was produced by `alloc_node` and is unlinked here exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::index_out_of_range(index, self.len));
        }
        let node = self.node_at(index);
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::index_out_of_range(index, self.len));
        }
        let node = self.node_at(index);
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    pub fn first(&self) -> Result<&T> {
        self.head
            .map(|ptr| unsafe { &(*ptr.as_ptr()).value })
            .ok_or(Error::EmptySequence)
    }

    pub fn last(&self) -> Result<&T> {
        self.tail
            .map(|ptr| unsafe { &(*ptr.as_ptr()).value })
            .ok_or(Error::EmptySequence)
    }

    /// Inserts `value` so that it ends up at `index`; `index == len` appends.
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::index_out_of_range(index, self.len));
        }
        if index == 0 {
            self.prepend(value);
        } else if index == self.len {
            self.append(value);
        } else {
            let prev = self.node_at(index - 1);
            unsafe {
                let node = Self::alloc_node(value, (*prev.as_ptr()).next);
                (*prev.as_ptr()).next = Some(node);
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Unlinks the node at `index`.
    ///
    /// Removing from an empty list is a no-op and yields `Ok(None)`.
    pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
        if self.len == 0 {
            return Ok(None);
        }
        if index >= self.len {
            return Err(Error::index_out_of_range(index, self.len));
        }
        if index == 0 {
            return Ok(self.pop_front());
        }
        let prev = self.node_at(index - 1);
        // SAFETY: `index < len`, so `prev` has a successor, and it is unlinked exactly once.
        let node = unsafe {
            let Some(target) = (*prev.as_ptr()).next else {
                unreachable!("remove: missing successor");
            };
            let node = Box::from_raw(target.as_ptr());
            (*prev.as_ptr()).next = node.next;
            if node.next.is_none() {
                self.tail = Some(prev);
            }
            node
        };
        self.len -= 1;
        Ok(Some(node.value))
    }

    /// Deep copy of the inclusive range `[start, end]`.
    pub fn sub_list(&self, start: usize, end: usize) -> Result<Self>
    where
        T: Clone,
    {
        check_range(start, end, self.len)?;
        Ok(self.iter().skip(start).take(end - start + 1).cloned().collect())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.iter())
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let ptr = self.next?;
        // SAFETY: the list is borrowed for `'a`, so every reachable node outlives the iterator.
        let node = unsafe { &*ptr.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
