use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    logic::Formula,
    parse::{parse_sequent, ParseErr},
    CONNECTIVE_LIMIT,
};

pub mod apply;
pub mod prop;
pub mod prove;
pub mod rules;
pub mod trace;

pub use apply::{apply_rule, RuleResult};
pub use prop::PropSequent;
pub use prove::{prove, ProofNode};
pub use rules::{select_rule, Rule, Side};
pub use trace::Proof;

pub type SequentResult<T> = Result<T, SequentErr>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequentErr {
    Parse(ParseErr),
    TooComplex { connectives: usize, limit: usize },
    NotApplicable(Rule),
}

impl fmt::Display for SequentErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequentErr::Parse(e) => write!(f, "{}", e),
            SequentErr::TooComplex { connectives, limit } => write!(
                f,
                "The sequent contains {connectives} connectives, the limit is {limit}"
            ),
            SequentErr::NotApplicable(rule) => {
                write!(f, "{} is not applicable to this sequent", rule)
            }
        }
    }
}

impl std::error::Error for SequentErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SequentErr::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseErr> for SequentErr {
    fn from(e: ParseErr) -> Self {
        SequentErr::Parse(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct SequentParams {
    pub connective_limit: usize,
}

impl Default for SequentParams {
    fn default() -> Self {
        Self {
            connective_limit: CONNECTIVE_LIMIT,
        }
    }
}

/// A claim that the antecedents entail at least one of the succedents.
///
/// Both sides keep their order and may hold duplicates. The order only
/// decides which formula a rule picks first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequent {
    pub antecedents: Vec<Formula>,
    pub succedents: Vec<Formula>,
}

impl Sequent {
    pub fn new(antecedents: Vec<Formula>, succedents: Vec<Formula>) -> Self {
        Self {
            antecedents,
            succedents,
        }
    }

    pub fn side(&self, side: Side) -> &[Formula] {
        match side {
            Side::Left => &self.antecedents,
            Side::Right => &self.succedents,
        }
    }

    /// Total number of connectives over both sides.
    pub fn connectives(&self) -> usize {
        self.antecedents
            .iter()
            .chain(self.succedents.iter())
            .map(Formula::complexity)
            .sum()
    }
}

impl FromStr for Sequent {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = parse_sequent(s)?;
        Ok(Sequent::new(left, right))
    }
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.antecedents, &self.succedents))
    }
}

/// Renders both sides as `[A1, A2] seq [B1]`.
pub fn render(antecedents: &[Formula], succedents: &[Formula]) -> String {
    format!(
        "[{}] seq [{}]",
        join_formulas(antecedents),
        join_formulas(succedents)
    )
}

fn join_formulas(formulas: &[Formula]) -> String {
    formulas
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}
