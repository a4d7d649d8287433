pub mod dataset;
pub mod logical;
pub mod semeion;

pub use dataset::{DataItem, Dataset};
pub use logical::Gate;
