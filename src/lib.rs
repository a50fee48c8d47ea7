//! Standard-library style containers: a growable [`DynArray`], an inline
//! [`FixedArray`], a singly linked [`List`], the [`Stack`] and [`Queue`]
//! adapters and a [`ByteString`].

pub mod dyn_array;
pub mod fixed_array;
pub mod list;
mod stack;
mod queue;
mod byte_string;

pub(crate) mod errors;
pub(crate) mod range;

pub use dyn_array::DynArray;
pub use fixed_array::FixedArray;
pub use list::List;
pub use stack::Stack;
pub use queue::Queue;
pub use byte_string::ByteString;
pub use errors::{AllocErr, OutOfRange};
