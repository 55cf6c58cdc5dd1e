//! Keyword and operator tables.
//!
//! Both tables are `const` arrays; lookups never allocate and nothing here
//! is mutable at runtime.
//!
//! - [`KEYWORDS`] is sorted by spelling so identifiers resolve with a binary
//!   search.
//! - [`OPERATORS`] is sorted by descending spelling length. The operator
//!   scanner takes the first entry that prefixes the input, so this order is
//!   what makes `>>>=` win over `>>>`, `>>`, and `>`.

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordKind {
    Bit,
    Break,
    Case,
    Const,
    Continue,
    Default,
    Do,
    Else,
    Enum,
    Extern,
    For,
    Goto,
    If,
    Law,
    Marshal,
    Noreturn,
    Pure,
    Register,
    Return,
    Sizeof,
    Struct,
    Switch,
    Typedef,
    Union,
    Volatile,
    While,
}

impl KeywordKind {
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Bit => "bit",
            Self::Break => "break",
            Self::Case => "case",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Do => "do",
            Self::Else => "else",
            Self::Enum => "enum",
            Self::Extern => "extern",
            Self::For => "for",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Law => "law",
            Self::Marshal => "marshal",
            Self::Noreturn => "noreturn",
            Self::Pure => "pure",
            Self::Register => "register",
            Self::Return => "return",
            Self::Sizeof => "sizeof",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::Typedef => "typedef",
            Self::Union => "union",
            Self::Volatile => "volatile",
            Self::While => "while",
        }
    }
}

/// All keywords, sorted by spelling.
pub const KEYWORDS: [KeywordKind; 26] = [
    KeywordKind::Bit,
    KeywordKind::Break,
    KeywordKind::Case,
    KeywordKind::Const,
    KeywordKind::Continue,
    KeywordKind::Default,
    KeywordKind::Do,
    KeywordKind::Else,
    KeywordKind::Enum,
    KeywordKind::Extern,
    KeywordKind::For,
    KeywordKind::Goto,
    KeywordKind::If,
    KeywordKind::Law,
    KeywordKind::Marshal,
    KeywordKind::Noreturn,
    KeywordKind::Pure,
    KeywordKind::Register,
    KeywordKind::Return,
    KeywordKind::Sizeof,
    KeywordKind::Struct,
    KeywordKind::Switch,
    KeywordKind::Typedef,
    KeywordKind::Union,
    KeywordKind::Volatile,
    KeywordKind::While,
];

/// Shortest and longest keyword spellings, for a cheap pre-filter.
const KEYWORD_LEN: std::ops::RangeInclusive<usize> = 2..=8;

/// Resolve an identifier's bytes to a keyword. Matching is case-sensitive.
pub fn lookup_keyword(text: &[u8]) -> Option<KeywordKind> {
    if !KEYWORD_LEN.contains(&text.len()) {
        return None;
    }
    KEYWORDS
        .binary_search_by(|kw| kw.spelling().as_bytes().cmp(text))
        .ok()
        .map(|idx| KEYWORDS[idx])
}

/// Operator and punctuator tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `>>>=`
    SignedShrAssign,
    /// `>>=`
    ShrAssign,
    /// `<<<=`
    RotlAssign,
    /// `<<=`
    ShlAssign,
    /// `||=`
    OrOrAssign,
    /// `|=`
    OrAssign,
    /// `&&=`
    AndAndAssign,
    /// `&=`
    AndAssign,
    /// `*=`
    MulAssign,
    /// `^^=`
    PowAssign,
    /// `^=`
    XorAssign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    RemAssign,
    /// `~=`
    BitNotAssign,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `!=`
    NotEq,
    /// `==`
    EqEq,
    /// `=`
    Assign,
    /// `>>>`
    SignedShr,
    /// `>>`
    Shr,
    /// `<<<`
    Rotl,
    /// `<<`
    Shl,
    /// `||`
    OrOr,
    /// `|`
    Pipe,
    /// `&&`
    AndAnd,
    /// `&`
    Amp,
    /// `*`
    Star,
    /// `^^`
    Pow,
    /// `^`
    Caret,
    /// `++`
    PlusPlus,
    /// `+`
    Plus,
    /// `--`
    MinusMinus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `~`
    Tilde,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `!`
    Bang,
    /// `...`
    Ellipsis,
    /// `.`
    Dot,
    /// `?`
    Question,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
}

impl OperatorKind {
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::SignedShrAssign => ">>>=",
            Self::ShrAssign => ">>=",
            Self::RotlAssign => "<<<=",
            Self::ShlAssign => "<<=",
            Self::OrOrAssign => "||=",
            Self::OrAssign => "|=",
            Self::AndAndAssign => "&&=",
            Self::AndAssign => "&=",
            Self::MulAssign => "*=",
            Self::PowAssign => "^^=",
            Self::XorAssign => "^=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::DivAssign => "/=",
            Self::RemAssign => "%=",
            Self::BitNotAssign => "~=",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::NotEq => "!=",
            Self::EqEq => "==",
            Self::Assign => "=",
            Self::SignedShr => ">>>",
            Self::Shr => ">>",
            Self::Rotl => "<<<",
            Self::Shl => "<<",
            Self::OrOr => "||",
            Self::Pipe => "|",
            Self::AndAnd => "&&",
            Self::Amp => "&",
            Self::Star => "*",
            Self::Pow => "^^",
            Self::Caret => "^",
            Self::PlusPlus => "++",
            Self::Plus => "+",
            Self::MinusMinus => "--",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Tilde => "~",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Bang => "!",
            Self::Ellipsis => "...",
            Self::Dot => ".",
            Self::Question => "?",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
        }
    }

    /// Spelling length in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "spellings are at most four bytes"
    )]
    pub const fn byte_len(self) -> u32 {
        self.spelling().len() as u32
    }
}

/// Longest operator spelling, in bytes.
pub const MAX_OPERATOR_LEN: u32 = 4;

/// All operators, longest spelling first.
pub const OPERATORS: [OperatorKind; 54] = [
    // 4 bytes
    OperatorKind::SignedShrAssign,
    OperatorKind::RotlAssign,
    // 3 bytes
    OperatorKind::ShrAssign,
    OperatorKind::ShlAssign,
    OperatorKind::OrOrAssign,
    OperatorKind::AndAndAssign,
    OperatorKind::PowAssign,
    OperatorKind::SignedShr,
    OperatorKind::Rotl,
    OperatorKind::Ellipsis,
    // 2 bytes
    OperatorKind::OrAssign,
    OperatorKind::AndAssign,
    OperatorKind::MulAssign,
    OperatorKind::XorAssign,
    OperatorKind::AddAssign,
    OperatorKind::SubAssign,
    OperatorKind::DivAssign,
    OperatorKind::RemAssign,
    OperatorKind::BitNotAssign,
    OperatorKind::LtEq,
    OperatorKind::GtEq,
    OperatorKind::NotEq,
    OperatorKind::EqEq,
    OperatorKind::Shr,
    OperatorKind::Shl,
    OperatorKind::OrOr,
    OperatorKind::AndAnd,
    OperatorKind::Pow,
    OperatorKind::PlusPlus,
    OperatorKind::MinusMinus,
    // 1 byte
    OperatorKind::Assign,
    OperatorKind::Pipe,
    OperatorKind::Amp,
    OperatorKind::Star,
    OperatorKind::Caret,
    OperatorKind::Plus,
    OperatorKind::Minus,
    OperatorKind::Slash,
    OperatorKind::Percent,
    OperatorKind::Tilde,
    OperatorKind::Lt,
    OperatorKind::Gt,
    OperatorKind::Bang,
    OperatorKind::Dot,
    OperatorKind::Question,
    OperatorKind::Comma,
    OperatorKind::Semicolon,
    OperatorKind::Colon,
    OperatorKind::LParen,
    OperatorKind::RParen,
    OperatorKind::LBracket,
    OperatorKind::RBracket,
    OperatorKind::LBrace,
    OperatorKind::RBrace,
];

/// Longest operator spelling that prefixes `input`.
pub fn match_operator(input: &[u8]) -> Option<OperatorKind> {
    OPERATORS
        .iter()
        .copied()
        .find(|op| input.starts_with(op.spelling().as_bytes()))
}
