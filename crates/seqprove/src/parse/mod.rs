use std::fmt;

pub mod formula;
pub mod sequent;

pub use formula::parse_formula;
pub use sequent::{parse_sequent, split_side};

pub type ParseResult<T> = Result<T, ParseErr>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseErr {
    Expected(String, String),
    EmptyAtom(usize),
    UnbalancedParens(usize),
    UnknownOperator(String, usize),
    InvalidNegation(String),
    UnknownToken(char, usize),
    MalformedSequent(String),
    TooDeep(usize),
    InvalidAtom(String),
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErr::Expected(expected, got) => write!(f, "Expected {} but got {}", expected, got),
            ParseErr::EmptyAtom(pos) => write!(f, "Empty formula at position {}", pos),
            ParseErr::UnbalancedParens(pos) => {
                write!(f, "Unbalanced parentheses at position {}", pos)
            }
            ParseErr::UnknownOperator(op, pos) => write!(
                f,
                "Unknown operator '{}' at position {}, use one of and, or, imp, iff",
                op, pos
            ),
            ParseErr::InvalidNegation(got) => write!(
                f,
                "neg must be followed by an atom or a parenthesized formula but got {}",
                got
            ),
            ParseErr::UnknownToken(c, pos) => {
                write!(f, "Unexpected character '{}' at position {}", c, pos)
            }
            ParseErr::MalformedSequent(reason) => write!(
                f,
                "Malformed sequent: {}. Please use the form [A1, A2] seq [B1, B2]",
                reason
            ),
            ParseErr::TooDeep(pos) => write!(
                f,
                "Parentheses nested deeper than {} levels at position {}",
                crate::NESTING_LIMIT,
                pos
            ),
            ParseErr::InvalidAtom(name) => write!(
                f,
                "'{}' is not a valid atom name, use letters, digits and _ but no keyword",
                name
            ),
        }
    }
}

impl std::error::Error for ParseErr {}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token<'t> {
    pub kind: TokenKind,
    pub spelling: &'t str,
    pub src_pos: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    And,
    Or,
    Neg,
    Imp,
    Iff,
    Seq,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Ident,
}

impl TokenKind {
    pub fn is_binary_op(self) -> bool {
        matches!(
            self,
            TokenKind::And | TokenKind::Or | TokenKind::Imp | TokenKind::Iff
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Neg => "neg",
            TokenKind::Imp => "imp",
            TokenKind::Iff => "iff",
            TokenKind::Seq => "seq",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Ident => "identifier",
        };

        write!(f, "{}", s)
    }
}

/// Lazily splits its input into tokens, skipping whitespace.
pub struct Tokenizer<'t> {
    src: &'t str,
    pos: usize,
}

impl<'t> Tokenizer<'t> {
    pub fn new(src: &'t str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'t str {
        &self.src[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    fn extract_token(&mut self) -> Option<ParseResult<Token<'t>>> {
        self.skip_whitespace();
        let rest = self.rest();
        let c = rest.chars().next()?;
        let start = self.pos;

        let kind = match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };
        if let Some(kind) = kind {
            self.pos += 1;
            return Some(Ok(Token {
                kind,
                spelling: &rest[..1],
                src_pos: start,
            }));
        }

        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_word_char(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if len == 0 {
            // Skip the offending character so the iterator makes progress
            self.pos += c.len_utf8();
            return Some(Err(ParseErr::UnknownToken(c, start)));
        }

        let spelling = &rest[..len];
        self.pos += len;
        let kind = match spelling {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "neg" => TokenKind::Neg,
            "imp" => TokenKind::Imp,
            "iff" => TokenKind::Iff,
            "seq" => TokenKind::Seq,
            _ => TokenKind::Ident,
        };

        Some(Ok(Token {
            kind,
            spelling,
            src_pos: start,
        }))
    }
}

impl<'t> Iterator for Tokenizer<'t> {
    type Item = ParseResult<Token<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.extract_token()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn tokenize(src: &str) -> ParseResult<Vec<Token<'_>>> {
    Tokenizer::new(src).collect()
}
