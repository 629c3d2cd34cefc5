mod access;
mod convert;
mod index;
mod iter;
mod value;

pub use iter::{Iter, IterMut};
pub use value::Value;
