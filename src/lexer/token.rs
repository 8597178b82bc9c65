//! Token 定义
//!
//! 词法分析器产生的标记类型

use std::fmt;

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ============ 分隔符 ============
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// .
    Dot,

    // ============ 算术运算符 ============
    /// *
    Star,
    /// +
    Plus,
    /// -
    Minus,

    // ============ 比较和赋值运算符 ============
    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// <
    Less,
    /// <=
    LessEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,

    // ============ 逻辑关键字 ============
    /// and
    And,
    /// or
    Or,
    /// not
    Not,

    // ============ 控制流关键字 ============
    /// if
    If,
    /// elif
    Elif,
    /// else
    Else,
    /// while
    While,
    /// for
    For,
    /// break
    Break,
    /// continue
    Continue,

    // ============ 声明关键字 ============
    /// def
    Def,
    /// return
    Return,
    /// class
    Class,
    /// print
    Print,

    // ============ 报告模式标记 ============
    /// 不在关键字表中的字母序列（仅报告模式）
    UnknownIdentifier,
    /// 无法识别的单个字符（仅报告模式）
    Skipped,
}

/// 关键字表，按声明顺序排列
pub const KEYWORDS: [(&str, TokenKind); 14] = [
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("def", TokenKind::Def),
    ("return", TokenKind::Return),
    ("class", TokenKind::Class),
    ("print", TokenKind::Print),
];

impl TokenKind {
    /// 识别关键字（整词、区分大小写）
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        let kind = match lexeme {
            // 逻辑关键字
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,

            // 控制流关键字
            "if" => TokenKind::If,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "for" => TokenKind::For,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,

            // 声明关键字
            "def" => TokenKind::Def,
            "return" => TokenKind::Return,
            "class" => TokenKind::Class,
            "print" => TokenKind::Print,

            _ => return None,
        };
        Some(kind)
    }

    /// 判断是否是关键字
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::If
                | TokenKind::Elif
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Def
                | TokenKind::Return
                | TokenKind::Class
                | TokenKind::Print
        )
    }

    /// 判断是否是运算符
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Star
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::BangEqual
                | TokenKind::Equal
                | TokenKind::EqualEqual
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
        )
    }

    /// 判断是否是报告模式下的跳过标记
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, TokenKind::UnknownIdentifier | TokenKind::Skipped)
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token 类型
    pub kind: TokenKind,
    /// 原始文本
    pub text: String,
}

impl Token {
    /// 创建新的 Token
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// 判断是否是指定类型
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}'", self.kind, self.text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // 分隔符
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",

            // 算术运算符
            TokenKind::Star => "*",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",

            // 比较和赋值运算符
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",

            // 关键字
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Def => "def",
            TokenKind::Return => "return",
            TokenKind::Class => "class",
            TokenKind::Print => "print",

            // 报告模式标记
            TokenKind::UnknownIdentifier => "<identifier>",
            TokenKind::Skipped => "<skipped>",
        };
        f.write_str(s)
    }
}
