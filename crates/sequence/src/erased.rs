//! Element-type erasure for holding sequences of different element types side by side.
//!
//! Indices and sizes arrive here as signed integers straight from user input, so this is
//! where negative values are turned into errors before the typed core sees them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::util::write_items;
use crate::{Backing, DynSequence, Sequence};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ElementType {
    Int,
    Double,
    Str,
}

pub const ALL_ELEMENT_TYPES: [ElementType; 3] =
    [ElementType::Int, ElementType::Double, ElementType::Str];

impl ElementType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ALL_ELEMENT_TYPES
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown element type `{s}`")))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Double(f64),
    Str(String),
}

impl Value {
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Int(_) => ElementType::Int,
            Self::Double(_) => ElementType::Double,
            Self::Str(_) => ElementType::Str,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// Element types an [`AnySequence`] can hold.
pub trait Element: Clone + Default + PartialEq + fmt::Display + Sized {
    const TYPE: ElementType;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

/// Sequence over one of the supported element types, tagged with that type.
#[derive(Clone, Debug, PartialEq)]
pub enum AnySequence {
    Int(DynSequence<i64>),
    Double(DynSequence<f64>),
    Str(DynSequence<String>),
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            const TYPE: ElementType = ElementType::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(Error::InvalidArgument(format!(
                        "expected {} value, got {}",
                        Self::TYPE,
                        other.element_type()
                    ))),
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }

        impl From<DynSequence<$ty>> for AnySequence {
            fn from(seq: DynSequence<$ty>) -> Self {
                AnySequence::$variant(seq)
            }
        }
    };
}

impl_element!(i64, Int);
impl_element!(f64, Double);
impl_element!(String, Str);

macro_rules! each {
    ($self:expr, $seq:ident => $body:expr) => {
        match $self {
            AnySequence::Int($seq) => $body,
            AnySequence::Double($seq) => $body,
            AnySequence::Str($seq) => $body,
        }
    };
}

fn to_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index).map_err(|_| Error::IndexOutOfRange { index, len })
}

fn to_size(size: i64) -> Result<usize> {
    usize::try_from(size).map_err(|_| Error::NegativeSize(size))
}

impl AnySequence {
    pub fn new(element: ElementType, backing: Backing) -> Self {
        match element {
            ElementType::Int => Self::Int(DynSequence::new(backing)),
            ElementType::Double => Self::Double(DynSequence::new(backing)),
            ElementType::Str => Self::Str(DynSequence::new(backing)),
        }
    }

    /// A sequence of `len` default values (`0`, `0.0` or the empty string).
    pub fn with_len(element: ElementType, backing: Backing, len: i64) -> Result<Self> {
        let len = to_size(len)?;
        Ok(match element {
            ElementType::Int => Self::Int(DynSequence::with_len(backing, len)),
            ElementType::Double => Self::Double(DynSequence::with_len(backing, len)),
            ElementType::Str => Self::Str(DynSequence::with_len(backing, len)),
        })
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Int(_) => ElementType::Int,
            Self::Double(_) => ElementType::Double,
            Self::Str(_) => ElementType::Str,
        }
    }

    pub fn backing(&self) -> Backing {
        each!(self, seq => seq.backing())
    }

    pub fn len(&self) -> usize {
        each!(self, seq => seq.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: i64) -> Result<Value> {
        let index = to_index(index, self.len())?;
        each!(self, seq => seq.get(index).cloned().map(Element::into_value))
    }

    pub fn set(&mut self, index: i64, value: Value) -> Result<Value> {
        let index = to_index(index, self.len())?;
        each!(self, seq => {
            let value = Element::from_value(value)?;
            seq.set(index, value).map(Element::into_value)
        })
    }

    pub fn append(&mut self, value: Value) -> Result<()> {
        each!(self, seq => {
            seq.append(Element::from_value(value)?);
        });
        Ok(())
    }

    pub fn prepend(&mut self, value: Value) -> Result<()> {
        each!(self, seq => {
            seq.prepend(Element::from_value(value)?);
        });
        Ok(())
    }

    pub fn insert_at(&mut self, value: Value, index: i64) -> Result<()> {
        let index = to_index(index, self.len())?;
        each!(self, seq => {
            seq.insert_at(Element::from_value(value)?, index)?;
        });
        Ok(())
    }

    pub fn remove(&mut self, index: i64) -> Result<Value> {
        let index = to_index(index, self.len())?;
        each!(self, seq => seq.remove(index).map(Element::into_value))
    }

    pub fn subsequence(&self, start: i64, end: i64) -> Result<AnySequence> {
        let len = self.len();
        let (Ok(from), Ok(to)) = (usize::try_from(start), usize::try_from(end)) else {
            return Err(Error::InvalidIndices { start, end, len });
        };
        each!(self, seq => seq.subsequence(from, to).map(AnySequence::from))
    }

    /// Concatenation of two sequences holding the same element type; the result is backed
    /// like `self`.
    pub fn concat(&self, other: &AnySequence) -> Result<AnySequence> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(a.concat(b))),
            (Self::Double(a), Self::Double(b)) => Ok(Self::Double(a.concat(b))),
            (Self::Str(a), Self::Str(b)) => Ok(Self::Str(a.concat(b))),
            (a, b) => Err(Error::ConcatTypeMismatch {
                left: a.element_type(),
                right: b.element_type(),
            }),
        }
    }

    pub fn values(&self) -> Vec<Value> {
        each!(self, seq => seq.items().cloned().map(Element::into_value).collect())
    }
}

impl fmt::Display for AnySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each!(self, seq => write_items(f, seq.items()))
    }
}
