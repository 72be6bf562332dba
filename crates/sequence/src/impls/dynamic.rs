use std::fmt;

use crate::error::Result;
use crate::linked_list;
use crate::util::write_items;
use crate::{ArraySequence, Backing, ListSequence, Sequence, StaticSequence};

/// A sequence whose backing is picked at runtime.
#[derive(Clone, Debug)]
pub enum DynSequence<T> {
    Array(ArraySequence<T>),
    List(ListSequence<T>),
}

macro_rules! dispatch {
    ($self:expr, $seq:ident => $body:expr) => {
        match $self {
            DynSequence::Array($seq) => $body,
            DynSequence::List($seq) => $body,
        }
    };
}

impl<T> DynSequence<T> {
    pub fn new(backing: Backing) -> Self {
        match backing {
            Backing::Array => Self::Array(ArraySequence::default()),
            Backing::List => Self::List(ListSequence::default()),
        }
    }

    pub fn from_slice(backing: Backing, items: &[T]) -> Self
    where
        T: Clone + Default,
    {
        match backing {
            Backing::Array => Self::Array(ArraySequence::from_slice(items)),
            Backing::List => Self::List(ListSequence::from_slice(items)),
        }
    }

    pub fn with_len(backing: Backing, len: usize) -> Self
    where
        T: Default,
    {
        match backing {
            Backing::Array => Self::Array(ArraySequence::with_len(len)),
            Backing::List => Self::List(ListSequence::with_len(len)),
        }
    }

    /// Elements in index order, without requiring `T: Default`.
    pub fn items(&self) -> DynIter<'_, T> {
        match self {
            Self::Array(seq) => DynIter::Array(seq.as_array().iter()),
            Self::List(seq) => DynIter::List(seq.as_list().iter()),
        }
    }

    fn item_count(&self) -> usize {
        match self {
            Self::Array(seq) => seq.as_array().len(),
            Self::List(seq) => seq.as_list().len(),
        }
    }
}

impl<T: Default> Sequence for DynSequence<T> {
    type Item = T;

    fn backing(&self) -> Backing {
        dispatch!(self, seq => seq.backing())
    }

    fn len(&self) -> usize {
        self.item_count()
    }

    fn get(&self, index: usize) -> Result<&T> {
        dispatch!(self, seq => seq.get(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        dispatch!(self, seq => seq.set(index, value))
    }

    fn first(&self) -> Result<&T> {
        dispatch!(self, seq => seq.first())
    }

    fn last(&self) -> Result<&T> {
        dispatch!(self, seq => seq.last())
    }

    fn append(&mut self, value: T) -> &mut Self {
        dispatch!(&mut *self, seq => {
            seq.append(value);
        });
        self
    }

    fn prepend(&mut self, value: T) -> &mut Self {
        dispatch!(&mut *self, seq => {
            seq.prepend(value);
        });
        self
    }

    fn insert_at(&mut self, value: T, index: usize) -> Result<&mut Self> {
        dispatch!(&mut *self, seq => {
            seq.insert_at(value, index)?;
        });
        Ok(self)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        dispatch!(self, seq => seq.remove(index))
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.items()
    }

    fn empty_like(&self) -> Self {
        Self::new(self.backing())
    }

    fn subsequence(&self, start: usize, end: usize) -> Result<Self>
    where
        T: Clone,
    {
        match self {
            Self::Array(seq) => seq.subsequence(start, end).map(Self::Array),
            Self::List(seq) => seq.subsequence(start, end).map(Self::List),
        }
    }

    fn concat<S>(&self, other: &S) -> Self
    where
        S: Sequence<Item = T>,
        T: Clone,
    {
        match self {
            Self::Array(seq) => Self::Array(seq.concat(other)),
            Self::List(seq) => Self::List(seq.concat(other)),
        }
    }
}

impl<T> From<ArraySequence<T>> for DynSequence<T> {
    fn from(seq: ArraySequence<T>) -> Self {
        Self::Array(seq)
    }
}

impl<T> From<ListSequence<T>> for DynSequence<T> {
    fn from(seq: ListSequence<T>) -> Self {
        Self::List(seq)
    }
}

/// Equal when the elements are, whatever the backings.
impl<T: PartialEq> PartialEq for DynSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item_count() == other.item_count() && self.items().eq(other.items())
    }
}

impl<T: fmt::Display> fmt::Display for DynSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items())
    }
}

pub enum DynIter<'a, T> {
    Array(std::slice::Iter<'a, T>),
    List(linked_list::Iter<'a, T>),
}

impl<'a, T> Iterator for DynIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            Self::Array(iter) => iter.next(),
            Self::List(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Array(iter) => iter.size_hint(),
            Self::List(iter) => iter.size_hint(),
        }
    }
}
