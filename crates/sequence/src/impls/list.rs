use std::fmt;

use crate::error::{Error, Result};
use crate::util::write_items;
use crate::{ArraySequence, Backing, LinkedList, Sequence, StaticSequence};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSequence<T> {
    items: LinkedList<T>,
}

impl<T> ListSequence<T> {
    pub fn as_list(&self) -> &LinkedList<T> {
        &self.items
    }

    pub fn into_list(self) -> LinkedList<T> {
        self.items
    }
}

impl<T> Default for ListSequence<T> {
    fn default() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }
}

impl<T> From<LinkedList<T>> for ListSequence<T> {
    fn from(items: LinkedList<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ListSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Sequence for ListSequence<T> {
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

    fn first(&self) -> Result<&T> {
        self.items.first()
    }

    fn last(&self) -> Result<&T> {
        self.items.last()
    }

    fn append(&mut self, value: T) -> &mut Self {
        self.items.append(value);
        self
    }

    fn prepend(&mut self, value: T) -> &mut Self {
        self.items.prepend(value);
        self
    }

    fn insert_at(&mut self, value: T, index: usize) -> Result<&mut Self> {
        self.items.insert_at(value, index)?;
        Ok(self)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        // `None` only comes back from an empty list.
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
        self.items.sub_list(start, end).map(Self::from)
    }
}

impl<T> StaticSequence for ListSequence<T> {
    const BACKING: Backing = Backing::List;

    fn new() -> Self {
        Self::default()
    }

    fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        std::iter::repeat_with(T::default).take(len).collect()
    }

    fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        items.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq<ArraySequence<T>> for ListSequence<T> {
    fn eq(&self, other: &ArraySequence<T>) -> bool {
        other == self
    }
}

impl<T: fmt::Display> fmt::Display for ListSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_prepend_insert_scenario() {
        let mut seq = ListSequence::new();
        seq.append(1).append(2).prepend(0);
        assert_eq!(seq.to_vec(), [0, 1, 2]);

        seq.insert_at(5, 1).unwrap();
        assert_eq!(seq.to_vec(), [0, 5, 1, 2]);

        let mut sub = seq.subsequence(1, 2).unwrap();
        assert_eq!(sub.to_vec(), [5, 1]);
        sub.append(3);
        sub.set(0, 50).unwrap();
        assert_eq!(seq.to_vec(), [0, 5, 1, 2]);
    }

    #[test]
    fn matches_array_backing_elementwise() {
        let list = ListSequence::from_slice(&[1, 2, 3]);
        let array = ArraySequence::from_slice(&[1, 2, 3]);
        assert!(list == array);
        assert!(array == list);
        assert!(list != ArraySequence::from_slice(&[1, 2]));
        assert!(list != ArraySequence::from_slice(&[1, 2, 4]));
        assert_eq!(list.to_string(), array.to_string());
    }

    #[test]
    fn ends_are_constant_time_lookups() {
        let seq: ListSequence<u32> = (0..50_000).collect();
        assert_eq!(seq.first(), Ok(&0));
        assert_eq!(seq.last(), Ok(&49_999));
        assert_eq!(ListSequence::<u32>::new().last(), Err(Error::EmptySequence));
    }
}
