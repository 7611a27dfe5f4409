pub mod ast;
pub mod compile;
pub mod control;
pub mod format;
pub(crate) mod lexer;
pub mod parser;
