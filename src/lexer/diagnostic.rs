//! 扫描诊断
//!
//! 把报告模式下的跳过标记转换为可本地化的诊断信息

use std::fmt;

use crate::i18n::{format_message, messages, Locale};

use super::token::{Token, TokenKind};

/// 诊断种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// 无法识别的字符
    UnrecognizedCharacter,
    /// 非关键字的字母序列
    UnknownIdentifier,
}

/// 单条诊断
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 在报告模式 token 序列中的下标
    pub index: usize,
    pub kind: DiagnosticKind,
    pub lexeme: String,
}

impl Diagnostic {
    /// 本地化消息
    pub fn message(&self, locale: Locale) -> String {
        let key = match self.kind {
            DiagnosticKind::UnrecognizedCharacter => messages::DIAG_UNRECOGNIZED_CHARACTER,
            DiagnosticKind::UnknownIdentifier => messages::DIAG_UNKNOWN_IDENTIFIER,
        };
        format_message(key, locale, &[&self.index.to_string(), &self.lexeme])
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::En))
    }
}

/// 收集报告模式 token 序列中的所有诊断
pub fn collect(tokens: &[Token]) -> Vec<Diagnostic> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| {
            let kind = match token.kind {
                TokenKind::Skipped => DiagnosticKind::UnrecognizedCharacter,
                TokenKind::UnknownIdentifier => DiagnosticKind::UnknownIdentifier,
                _ => return None,
            };
            Some(Diagnostic {
                index,
                kind,
                lexeme: token.text.clone(),
            })
        })
        .collect()
}

/// 去掉跳过标记，得到与丢弃模式相同的序列
pub fn strip(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !token.kind.is_unrecognized())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, tokenize_with, ScanMode};

    #[test]
    fn test_collect_indices() {
        let tokens = tokenize_with("if x { 9 }", ScanMode::Report);
        let diagnostics = collect(&tokens);

        assert_eq!(
            diagnostics,
            vec![
                Diagnostic {
                    index: 1,
                    kind: DiagnosticKind::UnknownIdentifier,
                    lexeme: "x".to_string(),
                },
                Diagnostic {
                    index: 3,
                    kind: DiagnosticKind::UnrecognizedCharacter,
                    lexeme: "9".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_no_diagnostics_for_clean_input() {
        let tokens = tokenize_with("while not { break }", ScanMode::Report);
        assert!(collect(&tokens).is_empty());
    }

    #[test]
    fn test_strip_matches_drop_mode() {
        let sources = [
            "",
            "orand",
            "def add(a, b) { return a + b }",
            "x1 != y_2 >= 3.5",
            "class Foo { print \"hi\" }",
        ];
        for source in sources {
            assert_eq!(strip(tokenize_with(source, ScanMode::Report)), tokenize(source));
        }
    }

    #[test]
    fn test_localized_messages() {
        let diagnostic = Diagnostic {
            index: 4,
            kind: DiagnosticKind::UnknownIdentifier,
            lexeme: "foo".to_string(),
        };
        assert_eq!(diagnostic.to_string(), "token 4: 'foo' is not a keyword, skipped");
        assert_eq!(
            diagnostic.message(Locale::Zh),
            "第 4 个标记: 'foo' 不是关键字，已跳过"
        );
    }
}
