use crate::logic::Formula;

use super::{formula::FormulaParser, ParseErr, ParseResult, TokenKind};

/// Parses `[A1, A2, ...] seq [B1, B2, ...]` into antecedents and succedents.
/// Either side may be empty.
pub fn parse_sequent(sequent: &str) -> ParseResult<(Vec<Formula>, Vec<Formula>)> {
    let mut parser = FormulaParser::new(sequent)?;

    let left = parse_side(&mut parser)?;
    if !parser.next_is(TokenKind::Seq) {
        return Err(ParseErr::MalformedSequent(format!(
            "expected seq but got {}",
            parser.got_msg()
        )));
    }
    parser.bump();
    let right = parse_side(&mut parser)?;
    expect_envelope_end(&parser)?;

    Ok((left, right))
}

/// Parses a single bracketed side `[F1, F2, ...]`.
pub fn split_side(side: &str) -> ParseResult<Vec<Formula>> {
    let mut parser = FormulaParser::new(side)?;
    let formulas = parse_side(&mut parser)?;
    expect_envelope_end(&parser)?;
    Ok(formulas)
}

fn parse_side(parser: &mut FormulaParser<'_>) -> ParseResult<Vec<Formula>> {
    if !parser.next_is(TokenKind::LBracket) {
        return Err(ParseErr::MalformedSequent(format!(
            "expected [ but got {}",
            parser.got_msg()
        )));
    }
    parser.bump();

    let mut formulas = vec![];
    if parser.next_is(TokenKind::RBracket) {
        parser.bump();
        return Ok(formulas);
    }

    loop {
        formulas.push(parser.parse_formula()?);

        match parser.peek_kind() {
            Some(TokenKind::Comma) => parser.bump(),
            Some(TokenKind::RBracket) => {
                parser.bump();
                return Ok(formulas);
            }
            Some(TokenKind::RParen) => return Err(ParseErr::UnbalancedParens(parser.cur_pos())),
            Some(TokenKind::Ident) => {
                // Any other identifier here sits where an operator belongs
                let pos = parser.cur_pos();
                let op = parser.peek().map(|t| t.spelling.to_string());
                return Err(ParseErr::UnknownOperator(op.unwrap_or_default(), pos));
            }
            None => {
                return Err(ParseErr::MalformedSequent(
                    "missing closing ]".to_string(),
                ))
            }
            Some(_) => {
                return Err(ParseErr::Expected(
                    "',' or ']'".to_string(),
                    parser.got_msg(),
                ))
            }
        }
    }
}

fn expect_envelope_end(parser: &FormulaParser<'_>) -> ParseResult<()> {
    match parser.peek() {
        None => Ok(()),
        Some(t) => Err(ParseErr::MalformedSequent(format!(
            "unexpected {} at position {} after closing ]",
            t, t.src_pos
        ))),
    }
}
