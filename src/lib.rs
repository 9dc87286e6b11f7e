pub mod ast;
pub mod codegen;
pub mod driver;
pub mod error;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod semantic;

pub use driver::{compile, compile_with, Compilation, Mode, Options};
pub use error::CompileError;
