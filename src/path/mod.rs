pub mod cluster;
pub mod decompose;
pub mod interp;
pub mod lexer;
