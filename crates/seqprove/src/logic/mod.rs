use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::parse::{tokenize, ParseErr, ParseResult, TokenKind};

/// Name of a propositional variable.
///
/// Only word characters are allowed and keywords are rejected, so every atom
/// prints as text the parser reads back as the same atom.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Atom(String);

impl Atom {
    pub fn new(name: &str) -> ParseResult<Self> {
        name.parse()
    }

    /// Wraps the spelling of an identifier token.
    pub(crate) fn from_ident(spelling: &str) -> Self {
        Atom(spelling.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Atom {
    type Err = ParseErr;

    fn from_str(s: &str) -> ParseResult<Self> {
        match tokenize(s).as_deref() {
            Ok([t]) if t.kind == TokenKind::Ident && t.spelling == s => Ok(Atom::from_ident(s)),
            _ => Err(ParseErr::InvalidAtom(s.to_string())),
        }
    }
}

impl TryFrom<String> for Atom {
    type Error = ParseErr;

    fn try_from(value: String) -> ParseResult<Self> {
        value.parse()
    }
}

impl From<Atom> for String {
    fn from(atom: Atom) -> Self {
        atom.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub enum Formula {
    Atom(Atom),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: &str) -> ParseResult<Self> {
        Atom::new(name).map(Formula::Atom)
    }

    pub fn not(child: Formula) -> Self {
        Formula::Not(Box::new(child))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    pub fn atom_name(&self) -> Option<&str> {
        match self {
            Formula::Atom(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Number of connective nodes in the formula. Atoms have complexity 0.
    pub fn complexity(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Not(c) => 1 + c.complexity(),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => 1 + l.complexity() + r.complexity(),
        }
    }

    // Anything but an atom needs parentheses when it is an operand.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{}", name),
            _ => write!(f, "({})", self),
        }
    }
}

/// Writes the textual form accepted by the parser: a top-level binary
/// formula is left bare and every compound operand is parenthesized.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{}", name),
            Formula::Not(c) => match c.as_ref() {
                Formula::Atom(name) => write!(f, "neg {}", name),
                _ => write!(f, "neg({})", c),
            },
            Formula::And(l, r) => fmt_binary(f, l, "and", r),
            Formula::Or(l, r) => fmt_binary(f, l, "or", r),
            Formula::Implies(l, r) => fmt_binary(f, l, "imp", r),
            Formula::Iff(l, r) => fmt_binary(f, l, "iff", r),
        }
    }
}

fn fmt_binary(f: &mut fmt::Formatter<'_>, l: &Formula, op: &str, r: &Formula) -> fmt::Result {
    l.fmt_operand(f)?;
    write!(f, " {} ", op)?;
    r.fmt_operand(f)
}

#[cfg(test)]
mod tests {
    use super::{Atom, Formula};
    use crate::parse::ParseErr;

    fn p() -> Formula {
        Formula::atom("P").unwrap()
    }

    fn q() -> Formula {
        Formula::atom("Q").unwrap()
    }

    #[test]
    fn display_top_level() {
        assert_eq!("P", p().to_string());
        assert_eq!("neg P", Formula::not(p()).to_string());
        assert_eq!("P imp Q", Formula::implies(p(), q()).to_string());
        assert_eq!("P iff Q", Formula::iff(p(), q()).to_string());
    }

    #[test]
    fn display_nested() {
        let f = Formula::and(Formula::or(p(), q()), Formula::not(q()));
        assert_eq!("(P or Q) and (neg Q)", f.to_string());

        let f = Formula::not(Formula::and(p(), q()));
        assert_eq!("neg(P and Q)", f.to_string());

        let f = Formula::not(Formula::not(p()));
        assert_eq!("neg(neg P)", f.to_string());

        let f = Formula::implies(p(), Formula::iff(q(), Formula::not(Formula::or(p(), q()))));
        assert_eq!("P imp (Q iff (neg(P or Q)))", f.to_string());
    }

    #[test]
    fn complexity() {
        assert_eq!(0, p().complexity());
        assert_eq!(1, Formula::not(p()).complexity());
        assert_eq!(3, Formula::and(Formula::or(p(), q()), Formula::not(q())).complexity());
        assert_eq!(
            4,
            Formula::iff(Formula::implies(p(), q()), Formula::not(Formula::not(p()))).complexity()
        );
    }

    #[test]
    fn atoms() {
        assert!(p().is_atom());
        assert_eq!(Some("P"), p().atom_name());
        assert!(!Formula::not(p()).is_atom());
        assert_eq!(None, Formula::not(p()).atom_name());
        assert_eq!(Ok(p()), Formula::atom("P"));
        assert_ne!(p(), q());
    }

    #[test]
    fn atom_names() {
        for name in ["P", "p_1", "_x", "andy", "seq2", "Ä"] {
            assert_eq!(name, Atom::new(name).expect(name).as_str());
        }
        for name in ["", "and", "or", "neg", "imp", "iff", "seq", "P Q", " P", "a-b", "(P)"] {
            assert_eq!(
                Err(ParseErr::InvalidAtom(name.to_string())),
                Atom::new(name),
                "{:?}",
                name
            );
        }
    }

    #[test]
    fn atom_json() {
        let json = serde_json::to_string(&p()).unwrap();
        assert_eq!(r#"{"Atom":"P"}"#, json);
        assert_eq!(p(), serde_json::from_str::<Formula>(&json).unwrap());
        assert!(serde_json::from_str::<Formula>(r#"{"Atom":"neg"}"#).is_err());
        assert!(serde_json::from_str::<Formula>(r#"{"Atom":"P imp Q"}"#).is_err());
    }
}
