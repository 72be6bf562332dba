use crate::Backing;
use crate::error::{Error, Result};

/// Ordered collection with one contract shared by every storage strategy.
///
/// - `get`, `set` and `remove` accept indices in `[0, len)`; `insert_at` accepts `[0, len]`.
/// - `subsequence` takes an inclusive range and returns an independent copy with the same
///   backing.
/// - `concat` copies the receiver followed by `other` into a new sequence backed like the
///   receiver.
/// - A failed call leaves the sequence unchanged.
pub trait Sequence: Sized {
    type Item;

    fn backing(&self) -> Backing;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item>;

    fn first(&self) -> Result<&Self::Item> {
        if self.is_empty() {
            return Err(Error::EmptySequence);
        }
        self.get(0)
    }

    fn last(&self) -> Result<&Self::Item> {
        match self.len() {
            0 => Err(Error::EmptySequence),
            n => self.get(n - 1),
        }
    }

    fn append(&mut self, value: Self::Item) -> &mut Self;

    fn prepend(&mut self, value: Self::Item) -> &mut Self;

    fn insert_at(&mut self, value: Self::Item, index: usize) -> Result<&mut Self>;

    fn remove(&mut self, index: usize) -> Result<Self::Item>;

    /// Elements in index order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// A new empty sequence with the receiver's backing.
    fn empty_like(&self) -> Self;

    fn subsequence(&self, start: usize, end: usize) -> Result<Self>
    where
        Self::Item: Clone;

    fn concat<S>(&self, other: &S) -> Self
    where
        S: Sequence<Item = Self::Item>,
        Self::Item: Clone,
    {
        let mut out = self.empty_like();
        for value in self.iter().chain(other.iter()) {
            out.append(value.clone());
        }
        out
    }

    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    // Copy-on-write variants: the receiver is left as it was.

    fn with_appended(&self, value: Self::Item) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.append(value);
        out
    }

    fn with_prepended(&self, value: Self::Item) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.prepend(value);
        out
    }

    fn with_inserted(&self, value: Self::Item, index: usize) -> Result<Self>
    where
        Self: Clone,
    {
        if index > self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        let mut out = self.clone();
        out.insert_at(value, index)?;
        Ok(out)
    }

    fn with_set(&self, index: usize, value: Self::Item) -> Result<Self>
    where
        Self: Clone,
    {
        if index >= self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        let mut out = self.clone();
        out.set(index, value)?;
        Ok(out)
    }

    fn with_removed(&self, index: usize) -> Result<Self>
    where
        Self: Clone,
    {
        if index >= self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        let mut out = self.clone();
        out.remove(index)?;
        Ok(out)
    }
}

/// A sequence whose backing is fixed by its type.
pub trait StaticSequence: Sequence {
    const BACKING: Backing;

    fn new() -> Self;

    /// A sequence of `len` default values.
    fn with_len(len: usize) -> Self
    where
        Self::Item: Default;

    fn from_slice(items: &[Self::Item]) -> Self
    where
        Self::Item: Clone;
}
