//! 词法分析模块
//!
//! 将源代码转换为 Token 流

pub mod token;
pub mod scanner;
pub mod diagnostic;

pub use token::{Token, TokenKind, KEYWORDS};
pub use scanner::{Scanner, ScanMode, tokenize, tokenize_with};
pub use diagnostic::{Diagnostic, DiagnosticKind};
