//! Lexer module.
//!
//! This module organizes the line tokenizer into smaller, focused components:
//! - `core` - Main Lexer struct and per-token dispatch
//! - `string` - String literal opening and continuation across lines
//! - `number` - Numeric literal recognition
//! - `identifier` - Identifier classification and keyword promotion
//! - `operator` - Operators, brackets, punctuation and annotations
//! - `comment` - Line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
