//! CSV line tokenizing and stateful line parsing

mod parser;
pub mod tokenizer;

pub use parser::{LineParser, LineRead};
