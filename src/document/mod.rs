pub mod ids;
pub mod ops;
pub mod tree;
pub mod xml;
