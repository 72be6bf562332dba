mod dynamic_array;
mod erased;
mod error;
mod linked_list;
mod traits;
mod util;

pub mod impls;

use std::fmt;
use std::str::FromStr;

pub use dynamic_array::DynamicArray;
pub use erased::{ALL_ELEMENT_TYPES, AnySequence, Element, ElementType, Value};
pub use error::{Error, Result};
pub use impls::{ArraySequence, DynIter, DynSequence, ListSequence};
pub use linked_list::{Iter as ListIter, LinkedList};
pub use traits::{Sequence, StaticSequence};

/// Storage strategy behind a sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Backing {
    Array,
    List,
}

pub const ALL_BACKINGS: [Backing; 2] = [Backing::Array, Backing::List];

impl Backing {
    pub fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::List => "list",
        }
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ALL_BACKINGS
            .into_iter()
            .find(|backing| backing.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown structure `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn check_basic<S: Sequence<Item = i64>>(make: impl Fn(&[i64]) -> S) {
        let mut seq = make(&[]);
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.first(), Err(Error::EmptySequence));
        assert_eq!(seq.last(), Err(Error::EmptySequence));

        seq.append(1).append(2).prepend(0);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.to_vec(), [0, 1, 2]);
        assert_eq!(seq.first(), Ok(&0));
        assert_eq!(seq.last(), Ok(&2));

        seq.insert_at(5, 1).unwrap();
        assert_eq!(seq.to_vec(), [0, 5, 1, 2]);

        assert_eq!(seq.set(1, 6), Ok(5));
        assert_eq!(seq.remove(0), Ok(0));
        assert_eq!(seq.to_vec(), [6, 1, 2]);

        let sub = seq.subsequence(1, 2).unwrap();
        assert_eq!(sub.to_vec(), [1, 2]);
        assert_eq!(sub.backing(), seq.backing());

        for n in [0_usize, 1, 5, 33] {
            let items: Vec<i64> = (0..n as i64).collect();
            assert_eq!(make(&items).len(), n);
        }
    }

    fn check_bounds<S: Sequence<Item = i64>>(make: impl Fn(&[i64]) -> S) {
        let source = [10, 20, 30];
        let mut seq = make(&source);

        assert_eq!(seq.get(0), Ok(&10));
        assert_eq!(seq.get(2), Ok(&30));
        assert_eq!(seq.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(
            seq.set(3, 0),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(seq.insert_at(0, 4).is_err());
        assert_eq!(
            seq.remove(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(seq.subsequence(0, 3).is_err());
        assert!(seq.subsequence(2, 1).is_err());
        assert_eq!(seq.to_vec(), source, "failed calls must not mutate");

        seq.insert_at(40, 3).unwrap();
        assert_eq!(seq.to_vec(), [10, 20, 30, 40]);
        seq.insert_at(0, 0).unwrap();
        assert_eq!(seq.to_vec(), [0, 10, 20, 30, 40]);
        assert_eq!(seq.subsequence(4, 4).unwrap().to_vec(), [40]);
        assert_eq!(seq.remove(4), Ok(40));
        assert_eq!(seq.last(), Ok(&30));

        let mut empty = make(&[]);
        assert_eq!(
            empty.remove(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            empty.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(empty.subsequence(0, 0).is_err());
        empty.insert_at(7, 0).unwrap();
        assert_eq!(empty.to_vec(), [7]);
    }

    fn check_subsequence<S: Sequence<Item = i64>>(make: impl Fn(&[i64]) -> S) {
        let source: Vec<i64> = (0..6).map(|x| x * 11).collect();
        let seq = make(&source);
        for start in 0..source.len() {
            for end in start..source.len() {
                let mut sub = seq.subsequence(start, end).unwrap();
                assert_eq!(sub.len(), end - start + 1);
                assert_eq!(sub.to_vec(), source[start..=end], "start={start} end={end}");
                sub.set(0, -1).unwrap();
                sub.append(-2);
            }
        }
        assert_eq!(seq.to_vec(), source);
    }

    fn check_concat<S: Sequence<Item = i64>>(make: impl Fn(&[i64]) -> S) {
        let a = make(&[1, 2, 3]);
        let b = make(&[4, 5]);
        let joined = a.concat(&b);
        assert_eq!(joined.len(), a.len() + b.len());
        assert_eq!(joined.to_vec(), [1, 2, 3, 4, 5]);
        assert_eq!(joined.backing(), a.backing());

        let with_array = a.concat(&ArraySequence::from_slice(&[9]));
        let with_list = a.concat(&ListSequence::from_slice(&[9]));
        assert_eq!(with_array.to_vec(), with_list.to_vec());

        let empty = make(&[]);
        assert_eq!(empty.concat(&a).to_vec(), a.to_vec());
        assert_eq!(a.concat(&empty).to_vec(), a.to_vec());

        let mut joined = joined;
        joined.set(0, 100).unwrap();
        assert_eq!(a.to_vec(), [1, 2, 3]);
    }

    fn check_copy_on_write<S: Sequence<Item = i64> + Clone>(make: impl Fn(&[i64]) -> S) {
        let seq = make(&[1, 2, 3]);
        assert_eq!(seq.with_appended(4).to_vec(), [1, 2, 3, 4]);
        assert_eq!(seq.with_prepended(0).to_vec(), [0, 1, 2, 3]);
        assert_eq!(seq.with_inserted(9, 1).unwrap().to_vec(), [1, 9, 2, 3]);
        assert_eq!(seq.with_set(2, 7).unwrap().to_vec(), [1, 2, 7]);
        assert_eq!(seq.with_removed(0).unwrap().to_vec(), [2, 3]);
        assert!(seq.with_inserted(9, 4).is_err());
        assert!(seq.with_set(3, 0).is_err());
        assert!(seq.with_removed(3).is_err());
        assert_eq!(seq.to_vec(), [1, 2, 3]);
    }

    fn check_random<S: Sequence<Item = i64>>(make: impl Fn(&[i64]) -> S) {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut seq = make(&[]);
        let mut oracle: Vec<i64> = Vec::new();

        const OPS: usize = 5_000;
        for _ in 0..OPS {
            let roll = rng.random_range(0..100);
            let value: i64 = rng.random_range(-1_000..1_000);
            let len = oracle.len();
            if roll < 25 {
                seq.append(value);
                oracle.push(value);
            } else if roll < 35 {
                seq.prepend(value);
                oracle.insert(0, value);
            } else if roll < 55 {
                let index = rng.random_range(0..=len + 1);
                let got = seq.insert_at(value, index).map(|_| ());
                if index <= len {
                    assert_eq!(got, Ok(()));
                    oracle.insert(index, value);
                } else {
                    assert!(got.is_err());
                }
            } else if roll < 75 {
                let index = rng.random_range(0..=len);
                let got = seq.remove(index);
                if index < len {
                    assert_eq!(got, Ok(oracle.remove(index)));
                } else {
                    assert!(got.is_err());
                }
            } else if roll < 85 {
                let index = rng.random_range(0..=len);
                let got = seq.set(index, value);
                if index < len {
                    let old = std::mem::replace(&mut oracle[index], value);
                    assert_eq!(got, Ok(old));
                } else {
                    assert!(got.is_err());
                }
            } else if roll < 95 {
                let index = rng.random_range(0..=len);
                assert_eq!(seq.get(index).ok(), oracle.get(index));
            } else if len > 0 {
                let start = rng.random_range(0..len);
                let end = rng.random_range(start..len);
                let sub = seq.subsequence(start, end).unwrap();
                assert_eq!(sub.to_vec(), oracle[start..=end]);
            }

            assert_eq!(seq.len(), oracle.len());
        }
        assert_eq!(seq.to_vec(), oracle);
    }

    macro_rules! test_all {
        ($name:ident, $func:ident) => {
            #[test]
            fn $name() {
                $func(ArraySequence::<i64>::from_slice);
                $func(ListSequence::<i64>::from_slice);
                $func(|items: &[i64]| DynSequence::from_slice(Backing::Array, items));
                $func(|items: &[i64]| DynSequence::from_slice(Backing::List, items));
            }
        };
    }

    test_all!(basic_all_impls, check_basic);
    test_all!(bounds_all_impls, check_bounds);
    test_all!(subsequence_all_impls, check_subsequence);
    test_all!(concat_all_impls, check_concat);
    test_all!(copy_on_write_all_impls, check_copy_on_write);
    test_all!(random_all_impls, check_random);

    #[test]
    fn backing_names_round_trip() {
        for backing in ALL_BACKINGS {
            assert_eq!(backing.name().parse::<Backing>(), Ok(backing));
            assert_eq!(backing.to_string(), backing.name());
        }
        assert_eq!(
            "tree".parse::<Backing>(),
            Err(Error::InvalidArgument("unknown structure `tree`".into()))
        );
    }

    #[test]
    fn backings_are_observably_identical() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let mut array = ArraySequence::<i64>::new();
        let mut list = ListSequence::<i64>::new();
        for _ in 0..2_000 {
            let len = array.len();
            let index = rng.random_range(0..=len);
            let value: i64 = rng.random();
            match rng.random_range(0..3) {
                0 => {
                    let a = array.insert_at(value, index).map(|_| ());
                    let l = list.insert_at(value, index).map(|_| ());
                    assert_eq!(a, l);
                }
                1 => assert_eq!(array.remove(index), list.remove(index)),
                _ => assert_eq!(array.get(index), list.get(index)),
            }
            assert!(array == list);
        }
        assert_eq!(array.to_string(), list.to_string());
    }
}
