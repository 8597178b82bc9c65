//! 词法扫描器
//!
//! 将源代码字符串转换为 Token 流。单趟从左到右扫描，最多向前查看一个字符。

use log::{debug, trace};

use super::token::{Token, TokenKind};

/// 无法识别内容的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// 静默丢弃无法识别的字符和非关键字标识符（默认）
    #[default]
    Drop,
    /// 以 `UnknownIdentifier` / `Skipped` Token 报告
    Report,
}

/// 扫描整段源码（丢弃模式）
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, ScanMode::Drop)
}

/// 按指定模式扫描整段源码
pub fn tokenize_with(source: &str, mode: ScanMode) -> Vec<Token> {
    Scanner::with_mode(source, mode).scan_tokens()
}

/// 词法扫描器
pub struct Scanner {
    /// 源代码字符
    source: Vec<char>,
    /// 当前位置
    current: usize,
    /// 当前 token 起始位置
    start: usize,
    /// 处理方式
    mode: ScanMode,
}

impl Scanner {
    /// 创建新的扫描器
    pub fn new(source: &str) -> Self {
        Self::with_mode(source, ScanMode::Drop)
    }

    /// 创建指定模式的扫描器
    pub fn with_mode(source: &str, mode: ScanMode) -> Self {
        Self {
            source: source.chars().collect(),
            current: 0,
            start: 0,
            mode,
        }
    }

    /// 扫描所有 token
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.current;
            if let Some(token) = self.scan_token() {
                tokens.push(token);
            }
        }

        debug!(
            "scanned {} chars into {} tokens ({:?} mode)",
            self.source.len(),
            tokens.len(),
            self.mode
        );
        tokens
    }

    /// 扫描单个词素，空白和被丢弃的内容返回 None
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.advance();

        match c {
            // 分隔符
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),

            // 算术运算符
            '*' => self.make_token(TokenKind::Star),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),

            // 空白
            ' ' | '\n' | '\r' | '\t' => None,

            // ! 和 !=
            '!' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::BangEqual)
                } else {
                    self.make_token(TokenKind::Bang)
                }
            }

            // = 和 ==
            '=' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::EqualEqual)
                } else {
                    self.make_token(TokenKind::Equal)
                }
            }

            // < 和 <=
            '<' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::LessEqual)
                } else {
                    self.make_token(TokenKind::Less)
                }
            }

            // > 和 >=
            '>' => {
                if self.match_next('=') {
                    self.make_token(TokenKind::GreaterEqual)
                } else {
                    self.make_token(TokenKind::Greater)
                }
            }

            // 关键字
            c if c.is_alphabetic() => self.scan_word(),

            // 未知字符
            _ => {
                trace!("skipping unrecognized character {:?}", c);
                self.omit(TokenKind::Skipped)
            }
        }
    }

    /// 扫描字母序列并查关键字表
    fn scan_word(&mut self) -> Option<Token> {
        // 数字和下划线不属于标识符
        while !self.is_at_end() && self.peek().is_alphabetic() {
            self.advance();
        }

        let lexeme = self.lexeme();
        match TokenKind::keyword(&lexeme) {
            Some(kind) => Some(Token::new(kind, lexeme)),
            None => {
                trace!("skipping unknown identifier {:?}", lexeme);
                self.omit(TokenKind::UnknownIdentifier)
            }
        }
    }

    /// 判断是否到达源码末尾
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// 前进一个字符并返回
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// 查看当前字符
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// 如果当前字符匹配，则前进
    fn match_next(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// 当前词素文本
    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// 创建 token
    fn make_token(&self, kind: TokenKind) -> Option<Token> {
        Some(Token::new(kind, self.lexeme()))
    }

    /// 丢弃模式下不产生 token，报告模式下产生标记
    fn omit(&self, marker: TokenKind) -> Option<Token> {
        match self.mode {
            ScanMode::Drop => None,
            ScanMode::Report => self.make_token(marker),
        }
    }
}
