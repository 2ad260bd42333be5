use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::logic::Formula;

use super::Sequent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Rule {
    Axiom,
    IffLeft,
    IffRight,
    ImpliesLeft,
    ImpliesRight,
    OrLeft,
    OrRight,
    AndLeft,
    AndRight,
    NotLeft,
    NotRight,
    Exhausted,
}

/// Order in which the selector tries the rules. `Exhausted` is the fallback.
pub const PRIORITY: [Rule; 11] = [
    Rule::Axiom,
    Rule::IffLeft,
    Rule::IffRight,
    Rule::ImpliesLeft,
    Rule::ImpliesRight,
    Rule::OrLeft,
    Rule::OrRight,
    Rule::AndLeft,
    Rule::AndRight,
    Rule::NotLeft,
    Rule::NotRight,
];

impl Rule {
    /// Identifier used in serialized proofs.
    pub fn to_str(&self) -> &'static str {
        match self {
            Rule::Axiom => "ax",
            Rule::IffLeft => "iffLeft",
            Rule::IffRight => "iffRight",
            Rule::ImpliesLeft => "impLeft",
            Rule::ImpliesRight => "impRight",
            Rule::OrLeft => "orLeft",
            Rule::OrRight => "orRight",
            Rule::AndLeft => "andLeft",
            Rule::AndRight => "andRight",
            Rule::NotLeft => "notLeft",
            Rule::NotRight => "notRight",
            Rule::Exhausted => "noRule",
        }
    }

    /// Name printed in proof traces.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Axiom => "Rule P1",
            Rule::NotRight => "Rule P2a",
            Rule::NotLeft => "Rule P2b",
            Rule::AndRight => "Rule P3a",
            Rule::AndLeft => "Rule P3b",
            Rule::OrRight => "Rule P4a",
            Rule::OrLeft => "Rule P4b",
            Rule::ImpliesRight => "Rule P5a",
            Rule::ImpliesLeft => "Rule P5b",
            Rule::IffRight => "Rule P6a",
            Rule::IffLeft => "Rule P6b",
            Rule::Exhausted => "NO RULE",
        }
    }

    /// The side holding the principal formula, `None` for the terminal rules.
    pub fn side(&self) -> Option<Side> {
        match self {
            Rule::IffLeft | Rule::ImpliesLeft | Rule::OrLeft | Rule::AndLeft | Rule::NotLeft => {
                Some(Side::Left)
            }
            Rule::IffRight
            | Rule::ImpliesRight
            | Rule::OrRight
            | Rule::AndRight
            | Rule::NotRight => Some(Side::Right),
            Rule::Axiom | Rule::Exhausted => None,
        }
    }

    pub fn is_branching(&self) -> bool {
        matches!(
            self,
            Rule::IffLeft | Rule::IffRight | Rule::ImpliesLeft | Rule::OrLeft | Rule::AndRight
        )
    }

    /// Whether `formula` has the connective this rule decomposes.
    pub fn targets(&self, formula: &Formula) -> bool {
        match self {
            Rule::IffLeft | Rule::IffRight => matches!(formula, Formula::Iff(..)),
            Rule::ImpliesLeft | Rule::ImpliesRight => matches!(formula, Formula::Implies(..)),
            Rule::OrLeft | Rule::OrRight => matches!(formula, Formula::Or(..)),
            Rule::AndLeft | Rule::AndRight => matches!(formula, Formula::And(..)),
            Rule::NotLeft | Rule::NotRight => matches!(formula, Formula::Not(..)),
            Rule::Axiom | Rule::Exhausted => false,
        }
    }

    /// Index of the first formula on this rule's side it can decompose.
    pub fn principal(&self, sequent: &Sequent) -> Option<usize> {
        let side = self.side()?;
        sequent.side(side).iter().position(|f| self.targets(f))
    }

    /// Whether the rule can fire on `sequent`.
    pub fn matches(&self, sequent: &Sequent) -> bool {
        match self {
            Rule::Axiom => is_axiom(sequent),
            Rule::Exhausted => true,
            _ => self.principal(sequent).is_some(),
        }
    }
}

/// True if some atom occurs on both sides.
pub fn is_axiom(sequent: &Sequent) -> bool {
    sequent
        .antecedents
        .iter()
        .filter_map(Formula::atom_name)
        .any(|name| {
            sequent
                .succedents
                .iter()
                .any(|f| f.atom_name() == Some(name))
        })
}

/// Picks the first rule in [`PRIORITY`] order that fires on `sequent`.
pub fn select_rule(sequent: &Sequent) -> Rule {
    PRIORITY
        .iter()
        .copied()
        .find(|rule| rule.matches(sequent))
        .unwrap_or(Rule::Exhausted)
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'a> TryFrom<&'a str> for Rule {
    type Error = &'static str;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        match s {
            "ax" => Ok(Rule::Axiom),
            "iffLeft" => Ok(Rule::IffLeft),
            "iffRight" => Ok(Rule::IffRight),
            "impLeft" => Ok(Rule::ImpliesLeft),
            "impRight" => Ok(Rule::ImpliesRight),
            "orLeft" => Ok(Rule::OrLeft),
            "orRight" => Ok(Rule::OrRight),
            "andLeft" => Ok(Rule::AndLeft),
            "andRight" => Ok(Rule::AndRight),
            "notLeft" => Ok(Rule::NotLeft),
            "notRight" => Ok(Rule::NotRight),
            "noRule" => Ok(Rule::Exhausted),
            _ => Err("Unknown rule"),
        }
    }
}

impl TryFrom<String> for Rule {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rule::try_from(s.as_str())
    }
}

impl Serialize for Rule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_str())
    }
}
