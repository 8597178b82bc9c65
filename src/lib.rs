//! Pebble 语言词法分析器
//!
//! 把源码转换为有序的 Token 序列，供后续语法分析使用

pub mod config;
pub mod i18n;
pub mod lexer;
pub mod source;
pub mod batch;

pub use lexer::{tokenize, tokenize_with, ScanMode, Scanner, Token, TokenKind};
pub use batch::{BatchConfig, BatchScanner};
pub use source::SourceError;
