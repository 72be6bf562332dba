mod array;
mod dynamic;
mod list;

pub use array::ArraySequence;
pub use dynamic::{DynIter, DynSequence};
pub use list::ListSequence;
