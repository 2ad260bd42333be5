use crate::{
    logic::{Atom, Formula},
    parse::{tokenize, ParseErr, ParseResult, Token, TokenKind},
    NESTING_LIMIT,
};

pub fn parse_formula(formula: &str) -> ParseResult<Formula> {
    let mut parser = FormulaParser::new(formula)?;
    let node = parser.parse_formula()?;
    parser.expect_end()?;
    Ok(node)
}

/// Recursive descent parser for the `neg`/`and`/`or`/`imp`/`iff` syntax.
///
/// A binary connective may appear bare at the top of a formula, its operands
/// must be atoms or parenthesized formulas. `neg` takes an atom or a
/// parenthesized formula. Parentheses nest at most `NESTING_LIMIT` deep.
pub struct FormulaParser<'t> {
    tokens: Vec<Token<'t>>,
    cur: usize,
    src_len: usize,
    depth: usize,
}

impl<'t> FormulaParser<'t> {
    pub fn new(src: &'t str) -> ParseResult<Self> {
        Ok(Self {
            tokens: tokenize(src)?,
            cur: 0,
            src_len: src.len(),
            depth: 0,
        })
    }

    pub fn parse_formula(&mut self) -> ParseResult<Formula> {
        if self.next_is(TokenKind::Neg) {
            self.bump();
            return self.parse_neg_operand().map(Formula::not);
        }

        let left = self.parse_operand()?;

        let kind = match self.peek_kind() {
            Some(k) if k.is_binary_op() => k,
            Some(TokenKind::Ident) => return Err(self.unknown_operator()),
            _ => return Ok(left),
        };
        self.bump();
        let right = self.parse_operand()?;

        Ok(match kind {
            TokenKind::And => Formula::and(left, right),
            TokenKind::Or => Formula::or(left, right),
            TokenKind::Imp => Formula::implies(left, right),
            _ => Formula::iff(left, right),
        })
    }

    fn parse_neg_operand(&mut self) -> ParseResult<Formula> {
        match self.peek_kind() {
            Some(TokenKind::Ident) => self.parse_atom(),
            Some(TokenKind::LParen) => self.parse_paren(),
            _ => Err(ParseErr::InvalidNegation(self.got_msg())),
        }
    }

    fn parse_operand(&mut self) -> ParseResult<Formula> {
        match self.peek_kind() {
            Some(TokenKind::Ident) => self.parse_atom(),
            Some(TokenKind::LParen) => self.parse_paren(),
            None | Some(TokenKind::Comma | TokenKind::RParen | TokenKind::RBracket) => {
                Err(ParseErr::EmptyAtom(self.cur_pos()))
            }
            Some(_) => Err(ParseErr::Expected(
                "atom or parenthesized formula".to_string(),
                self.got_msg(),
            )),
        }
    }

    fn parse_paren(&mut self) -> ParseResult<Formula> {
        let open = self.cur_pos();
        // Every nested formula passes through here
        if self.depth >= NESTING_LIMIT {
            return Err(ParseErr::TooDeep(open));
        }
        self.depth += 1;
        self.bump();
        let exp = self.parse_formula()?;
        self.depth -= 1;
        match self.peek_kind() {
            Some(TokenKind::RParen) => {
                self.bump();
                Ok(exp)
            }
            Some(TokenKind::Ident) => Err(self.unknown_operator()),
            Some(k) if k.is_binary_op() => {
                Err(ParseErr::Expected(")".to_string(), self.got_msg()))
            }
            _ => Err(ParseErr::UnbalancedParens(open)),
        }
    }

    fn parse_atom(&mut self) -> ParseResult<Formula> {
        let atom = match self.peek() {
            Some(t) if t.kind == TokenKind::Ident => Atom::from_ident(t.spelling),
            _ => return Err(ParseErr::Expected("atom".to_string(), self.got_msg())),
        };
        self.bump();
        Ok(Formula::Atom(atom))
    }

    /// Fails unless every token has been consumed.
    pub fn expect_end(&mut self) -> ParseResult<()> {
        match self.peek_kind() {
            None => Ok(()),
            Some(TokenKind::RParen) => Err(ParseErr::UnbalancedParens(self.cur_pos())),
            Some(TokenKind::Ident) => Err(self.unknown_operator()),
            Some(_) => Err(ParseErr::Expected(
                "end of input".to_string(),
                self.got_msg(),
            )),
        }
    }

    pub fn peek(&self) -> Option<&Token<'t>> {
        self.tokens.get(self.cur)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    pub fn next_is(&self, expected: TokenKind) -> bool {
        matches!(self.peek(), Some(Token { kind, .. }) if *kind == expected)
    }

    pub fn bump(&mut self) {
        if self.cur < self.tokens.len() {
            self.cur += 1;
        }
    }

    /// Source position of the next token, or the input length at the end.
    pub fn cur_pos(&self) -> usize {
        self.peek().map(|t| t.src_pos).unwrap_or(self.src_len)
    }

    fn unknown_operator(&self) -> ParseErr {
        match self.peek() {
            Some(t) => ParseErr::UnknownOperator(t.spelling.to_string(), t.src_pos),
            None => ParseErr::Expected("operator".to_string(), "end of input".to_string()),
        }
    }

    pub fn got_msg(&self) -> String {
        match self.peek() {
            Some(t) => format!("{} at position {}", t, t.src_pos),
            None => "end of input".to_string(),
        }
    }
}
