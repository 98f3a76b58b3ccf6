pub mod catalog;
pub mod links;
pub mod sequence;
