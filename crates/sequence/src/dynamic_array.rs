use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result, check_range};
use crate::util::write_items;

/// Contiguous storage with an explicit, exactly-sized capacity.
///
/// - Slots `[0, len)` are live. Slots `[len, capacity)` hold stale or default values and
///   are never observable through the public API.
/// - Capacity never shrinks and grows to exactly the requested amount.
/// - Equality compares live elements only.
#[derive(Clone)]
pub struct DynamicArray<T> {
    data: Box<[T]>,
    len: usize,
}

fn default_slots<T: Default>(n: usize) -> Box<[T]> {
    std::iter::repeat_with(T::default).take(n).collect()
}

impl<T> DynamicArray<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(Error::index_out_of_range(index, self.len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::index_out_of_range(index, len))
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Copies the inclusive range `[start, end]` into a new array with `capacity == len`.
    pub fn sub_array(&self, start: usize, end: usize) -> Result<Self>
    where
        T: Clone,
    {
        check_range(start, end, self.len)?;
        Ok(Self::from(&self.as_slice()[start..=end]))
    }
}

impl<T: Default> DynamicArray<T> {
    /// An array of `len` default values.
    pub fn new(len: usize) -> Self {
        Self {
            data: default_slots(len),
            len,
        }
    }

    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity <= self.data.len() {
            return;
        }
        let mut data = Vec::with_capacity(capacity);
        data.extend(self.data[..self.len].iter_mut().map(mem::take));
        data.resize_with(capacity, T::default);
        self.data = data.into_boxed_slice();
    }

    /// Sets the length, growing capacity to exactly `len` if needed.
    ///
    /// Slots exposed by growing hold unspecified values until they are set.
    pub fn resize(&mut self, len: usize) {
        if len > self.data.len() {
            self.ensure_capacity(len);
        }
        self.len = len;
    }

    /// Removes the element at `index` and shifts the tail left.
    ///
    /// Removing from an empty array is a no-op and yields `Ok(None)`.
    pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
        if self.len == 0 {
            return Ok(None);
        }
        if index >= self.len {
            return Err(Error::index_out_of_range(index, self.len));
        }
        self.data[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(Some(mem::take(&mut self.data[self.len])))
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self {
            data: Box::default(),
            len: 0,
        }
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self {
            data: items.into(),
            len: items.len(),
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            data: items.into_boxed_slice(),
            len,
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.iter())
    }
}
