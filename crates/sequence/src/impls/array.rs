use std::fmt;

use crate::error::{Error, Result};
use crate::util::write_items;
use crate::{Backing, DynamicArray, ListSequence, Sequence, StaticSequence};

const MIN_GROWTH: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArraySequence<T> {
    items: DynamicArray<T>,
}

impl<T> ArraySequence<T> {
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_array(&self) -> &DynamicArray<T> {
        &self.items
    }

    pub fn into_array(self) -> DynamicArray<T> {
        self.items
    }
}

impl<T: Default> ArraySequence<T> {
    /// Same contract as [`DynamicArray::resize`].
    pub fn resize(&mut self, len: usize) {
        self.items.resize(len);
    }

    /// Opens one slot at the end. Capacity doubles here so appends stay amortized O(1);
    /// `resize` itself never over-allocates.
    fn grow_by_one(&mut self) -> usize {
        let len = self.items.len();
        if len == self.items.capacity() {
            self.items.ensure_capacity((2 * len).max(MIN_GROWTH));
        }
        self.items.resize(len + 1);
        len
    }
}

impl<T> Default for ArraySequence<T> {
    fn default() -> Self {
        Self {
            items: DynamicArray::default(),
        }
    }
}

impl<T> From<DynamicArray<T>> for ArraySequence<T> {
    fn from(items: DynamicArray<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Default> Sequence for ArraySequence<T> {
    type Item = T;

    fn backing(&self) -> Backing {
        Self::BACKING
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.items.set(index, value)
    }

    fn append(&mut self, value: T) -> &mut Self {
        let slot = self.grow_by_one();
        self.items[slot] = value;
        self
    }

    fn prepend(&mut self, value: T) -> &mut Self {
        let slot = self.grow_by_one();
        self.items[slot] = value;
        self.items.as_mut_slice().rotate_right(1);
        self
    }

    fn insert_at(&mut self, value: T, index: usize) -> Result<&mut Self> {
        if index > self.items.len() {
            return Err(Error::index_out_of_range(index, self.items.len()));
        }
        let slot = self.grow_by_one();
        self.items[slot] = value;
        self.items.as_mut_slice()[index..].rotate_right(1);
        Ok(self)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        // `None` only comes back from an empty array.
        self.items
            .remove(index)?
            .ok_or(Error::index_out_of_range(index, 0))
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn empty_like(&self) -> Self {
        Self::new()
    }

    fn subsequence(&self, start: usize, end: usize) -> Result<Self>
    where
        T: Clone,
    {
        self.items.sub_array(start, end).map(Self::from)
    }

    fn concat<S>(&self, other: &S) -> Self
    where
        S: Sequence<Item = T>,
        T: Clone,
    {
        let mut items = DynamicArray::new(0);
        items.ensure_capacity(self.len() + other.len());
        let mut out = Self::from(items);
        for value in self.items.iter().chain(other.iter()) {
            out.append(value.clone());
        }
        out
    }
}

impl<T: Default> StaticSequence for ArraySequence<T> {
    const BACKING: Backing = Backing::Array;

    fn new() -> Self {
        Self::default()
    }

    fn with_len(len: usize) -> Self {
        Self {
            items: DynamicArray::new(len),
        }
    }

    fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            items: DynamicArray::from(items),
        }
    }
}

impl<T: PartialEq> PartialEq<ListSequence<T>> for ArraySequence<T> {
    fn eq(&self, other: &ListSequence<T>) -> bool {
        self.items.len() == other.as_list().len() && self.items.iter().eq(other.as_list().iter())
    }
}

impl<T: fmt::Display> fmt::Display for ArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items.iter())
    }
}
