//! Token definitions for the Cim front end.
//!
//! A token pairs a [`TokenKind`] with the lexeme text and the 1-based line
//! and column of the lexeme's first byte. The kind enumeration is closed:
//! 45 reserved words, identifier, four literal kinds, the punctuation and
//! operator symbols of the language, the two preprocessor marks, end of
//! file, and an invalid marker used for malformed numeric literals.

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved words
    KwAlignas,
    KwAlignof,
    KwAuto,
    KwBool,
    KwBreak,
    KwCase,
    KwChar,
    KwConst,
    KwConstexpr,
    KwContinue,
    KwDefault,
    KwDo,
    KwDouble,
    KwElse,
    KwEnum,
    KwExtern,
    KwFalse,
    KwFloat,
    KwFor,
    KwGoto,
    KwIf,
    KwInline,
    KwInt,
    KwLong,
    KwNullptr,
    KwRegister,
    KwRestrict,
    KwReturn,
    KwShort,
    KwSigned,
    KwSizeof,
    KwStatic,
    KwStaticAssert,
    KwStruct,
    KwSwitch,
    KwThreadLocal,
    KwTrue,
    KwTypedef,
    KwTypeof,
    KwTypeofUnqual,
    KwUnion,
    KwUnsigned,
    KwVoid,
    KwVolatile,
    KwWhile,

    // Identifiers and literals
    Identifier,
    IntLit,
    FloatLit,
    CharLit,
    StringLit,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,
    Question,
    Dot,
    Ellipsis,

    // Operators
    Plus,
    PlusPlus,
    PlusEq,
    Minus,
    MinusMinus,
    MinusEq,
    Arrow,
    Star,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Eq,
    EqEq,
    Bang,
    BangEq,
    Lt,
    LtEq,
    Shl,
    ShlEq,
    Gt,
    GtEq,
    Shr,
    ShrEq,
    Amp,
    AmpAmp,
    AmpEq,
    Pipe,
    PipePipe,
    PipeEq,
    Caret,
    CaretEq,
    Tilde,

    // Preprocessor marks. `#`-prefixed lines are consumed whole by the
    // scanner, so these kinds are reserved rather than produced.
    Hash,
    HashHash,

    /// End of file marker.
    Eof,
    /// Malformed numeric literal; terminates lexing.
    Invalid,
}

impl TokenKind {
    /// Returns true for the token kinds the parser accepts as a type
    /// specifier. The identifier spelling `string` is also accepted, but
    /// that check needs the lexeme and lives in the parser.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwVoid
                | TokenKind::KwChar
                | TokenKind::KwInt
                | TokenKind::KwFloat
                | TokenKind::KwDouble
                | TokenKind::KwBool
                | TokenKind::KwAuto
        )
    }
}

/// Looks up a reserved word, returning its keyword kind if `ident` is one
/// of the 45 reserved words of the language.
pub fn keyword_kind(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "alignas" => TokenKind::KwAlignas,
        "alignof" => TokenKind::KwAlignof,
        "auto" => TokenKind::KwAuto,
        "bool" => TokenKind::KwBool,
        "break" => TokenKind::KwBreak,
        "case" => TokenKind::KwCase,
        "char" => TokenKind::KwChar,
        "const" => TokenKind::KwConst,
        "constexpr" => TokenKind::KwConstexpr,
        "continue" => TokenKind::KwContinue,
        "default" => TokenKind::KwDefault,
        "do" => TokenKind::KwDo,
        "double" => TokenKind::KwDouble,
        "else" => TokenKind::KwElse,
        "enum" => TokenKind::KwEnum,
        "extern" => TokenKind::KwExtern,
        "false" => TokenKind::KwFalse,
        "float" => TokenKind::KwFloat,
        "for" => TokenKind::KwFor,
        "goto" => TokenKind::KwGoto,
        "if" => TokenKind::KwIf,
        "inline" => TokenKind::KwInline,
        "int" => TokenKind::KwInt,
        "long" => TokenKind::KwLong,
        "nullptr" => TokenKind::KwNullptr,
        "register" => TokenKind::KwRegister,
        "restrict" => TokenKind::KwRestrict,
        "return" => TokenKind::KwReturn,
        "short" => TokenKind::KwShort,
        "signed" => TokenKind::KwSigned,
        "sizeof" => TokenKind::KwSizeof,
        "static" => TokenKind::KwStatic,
        "static_assert" => TokenKind::KwStaticAssert,
        "struct" => TokenKind::KwStruct,
        "switch" => TokenKind::KwSwitch,
        "thread_local" => TokenKind::KwThreadLocal,
        "true" => TokenKind::KwTrue,
        "typedef" => TokenKind::KwTypedef,
        "typeof" => TokenKind::KwTypeof,
        "typeof_unqual" => TokenKind::KwTypeofUnqual,
        "union" => TokenKind::KwUnion,
        "unsigned" => TokenKind::KwUnsigned,
        "void" => TokenKind::KwVoid,
        "volatile" => TokenKind::KwVolatile,
        "while" => TokenKind::KwWhile,
        _ => return None,
    };
    Some(kind)
}

/// A lexical token.
///
/// The lexeme is the matched source text, except for string and character
/// literals where it is the text between the quotes with escape sequences
/// preserved literally. Line and column point at the first byte of the
/// token in the source (the opening quote for quoted literals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Kind of the token.
    pub kind: TokenKind,
    /// Matched source text.
    pub lexeme: String,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}
