//! Tree editing helpers: joining siblings and splicing a node into text.
//!
//! Both operations are pure. They borrow or consume their input and return a
//! new tree.

mod join;
mod replace;

pub use join::join;
pub use replace::{Replacer, replace_all};
