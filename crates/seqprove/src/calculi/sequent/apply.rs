use serde::{Deserialize, Serialize};

use crate::logic::Formula;

use super::{
    rules::{is_axiom, Rule, Side},
    Sequent, SequentErr, SequentResult,
};

/// What a single rule application produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleResult {
    /// The sequent is closed.
    Axiom,
    /// No rule applies, the sequent is not valid.
    Exhausted,
    Single(Sequent),
    /// Both successors must be provable.
    Branch(Sequent, Sequent),
}

/// Applies `rule` to its principal formula in `sequent`.
///
/// The principal formula is the first formula on the rule's side carrying the
/// rule's connective. It is removed and its immediate subformulas are appended
/// to the successor sides. `sequent` itself stays untouched.
pub fn apply_rule(sequent: &Sequent, rule: Rule) -> SequentResult<RuleResult> {
    let res = match rule {
        Rule::Axiom if is_axiom(sequent) => Some(RuleResult::Axiom),
        Rule::Axiom => None,
        Rule::Exhausted => Some(RuleResult::Exhausted),
        _ => rule.principal(sequent).and_then(|i| match rule.side() {
            Some(Side::Left) => apply_left(&sequent.antecedents[i], i, sequent),
            Some(Side::Right) => apply_right(&sequent.succedents[i], i, sequent),
            None => None,
        }),
    };

    res.ok_or(SequentErr::NotApplicable(rule))
}

fn apply_left(principal: &Formula, i: usize, sequent: &Sequent) -> Option<RuleResult> {
    let rest = without(&sequent.antecedents, i);
    let right = &sequent.succedents;

    let res = match principal {
        Formula::Not(c) => RuleResult::Single(Sequent::new(rest, extended(right, [c.as_ref()]))),
        Formula::And(l, r) => RuleResult::Single(Sequent::new(
            extended(&rest, [l.as_ref(), r.as_ref()]),
            right.clone(),
        )),
        Formula::Or(l, r) => RuleResult::Branch(
            Sequent::new(extended(&rest, [l.as_ref()]), right.clone()),
            Sequent::new(extended(&rest, [r.as_ref()]), right.clone()),
        ),
        Formula::Implies(l, r) => RuleResult::Branch(
            Sequent::new(rest.clone(), extended(right, [l.as_ref()])),
            Sequent::new(extended(&rest, [r.as_ref()]), right.clone()),
        ),
        // Either both sides hold or neither does
        Formula::Iff(l, r) => RuleResult::Branch(
            Sequent::new(extended(&rest, [l.as_ref(), r.as_ref()]), right.clone()),
            Sequent::new(rest, extended(right, [l.as_ref(), r.as_ref()])),
        ),
        Formula::Atom(_) => return None,
    };

    Some(res)
}

fn apply_right(principal: &Formula, i: usize, sequent: &Sequent) -> Option<RuleResult> {
    let left = &sequent.antecedents;
    let rest = without(&sequent.succedents, i);

    let res = match principal {
        Formula::Not(c) => RuleResult::Single(Sequent::new(extended(left, [c.as_ref()]), rest)),
        Formula::And(l, r) => RuleResult::Branch(
            Sequent::new(left.clone(), extended(&rest, [l.as_ref()])),
            Sequent::new(left.clone(), extended(&rest, [r.as_ref()])),
        ),
        Formula::Or(l, r) => RuleResult::Single(Sequent::new(
            left.clone(),
            extended(&rest, [l.as_ref(), r.as_ref()]),
        )),
        Formula::Implies(l, r) => RuleResult::Single(Sequent::new(
            extended(left, [l.as_ref()]),
            extended(&rest, [r.as_ref()]),
        )),
        // Forward implication in the first branch, backward in the second
        Formula::Iff(l, r) => RuleResult::Branch(
            Sequent::new(extended(left, [l.as_ref()]), extended(&rest, [r.as_ref()])),
            Sequent::new(extended(left, [r.as_ref()]), extended(&rest, [l.as_ref()])),
        ),
        Formula::Atom(_) => return None,
    };

    Some(res)
}

fn without(formulas: &[Formula], i: usize) -> Vec<Formula> {
    formulas
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .map(|(_, f)| f.clone())
        .collect()
}

fn extended<'a, I>(formulas: &[Formula], extra: I) -> Vec<Formula>
where
    I: IntoIterator<Item = &'a Formula>,
{
    let mut v = formulas.to_vec();
    v.extend(extra.into_iter().cloned());
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequent {
        s.parse().expect(s)
    }

    fn apply(s: &str, rule: Rule) -> RuleResult {
        apply_rule(&seq(s), rule).unwrap()
    }

    fn single(s: &str, rule: Rule) -> String {
        match apply(s, rule) {
            RuleResult::Single(n) => n.to_string(),
            r => panic!("expected one successor for {} but got {:?}", s, r),
        }
    }

    fn branch(s: &str, rule: Rule) -> (String, String) {
        match apply(s, rule) {
            RuleResult::Branch(a, b) => (a.to_string(), b.to_string()),
            r => panic!("expected two successors for {} but got {:?}", s, r),
        }
    }

    mod not {
        use super::*;

        #[test]
        fn left() {
            assert_eq!("[Q] seq [R, P]", single("[neg P, Q] seq [R]", Rule::NotLeft));
            assert_eq!(
                "[] seq [P and Q]",
                single("[neg(P and Q)] seq []", Rule::NotLeft)
            );
        }

        #[test]
        fn right() {
            assert_eq!("[R, P] seq [Q]", single("[R] seq [neg P, Q]", Rule::NotRight));
            assert_eq!("[neg P] seq []", single("[] seq [neg(neg P)]", Rule::NotRight));
        }

        #[test]
        fn wrong_side() {
            assert_eq!(
                Err(SequentErr::NotApplicable(Rule::NotRight)),
                apply_rule(&seq("[neg P] seq [Q]"), Rule::NotRight)
            );
        }
    }

    mod and {
        use super::*;

        #[test]
        fn left() {
            assert_eq!(
                "[R, P, Q] seq [S]",
                single("[P and Q, R] seq [S]", Rule::AndLeft)
            );
        }

        #[test]
        fn right() {
            assert_eq!(
                ("[R] seq [S, P]".to_string(), "[R] seq [S, Q]".to_string()),
                branch("[R] seq [P and Q, S]", Rule::AndRight)
            );
        }

        #[test]
        fn first_match_only() {
            assert_eq!(
                "[R and S, P, Q] seq []",
                single("[P and Q, R and S] seq []", Rule::AndLeft)
            );
        }
    }

    mod or {
        use super::*;

        #[test]
        fn left() {
            assert_eq!(
                ("[R, P] seq [S]".to_string(), "[R, Q] seq [S]".to_string()),
                branch("[P or Q, R] seq [S]", Rule::OrLeft)
            );
        }

        #[test]
        fn right() {
            assert_eq!(
                "[R] seq [S, P, Q]",
                single("[R] seq [P or Q, S]", Rule::OrRight)
            );
        }
    }

    mod implies {
        use super::*;

        #[test]
        fn left() {
            assert_eq!(
                ("[R] seq [S, P]".to_string(), "[R, Q] seq [S]".to_string()),
                branch("[P imp Q, R] seq [S]", Rule::ImpliesLeft)
            );
        }

        #[test]
        fn right() {
            assert_eq!(
                "[R, P] seq [S, Q]",
                single("[R] seq [P imp Q, S]", Rule::ImpliesRight)
            );
        }

        #[test]
        fn nested_operands() {
            assert_eq!(
                "[neg P] seq [Q or R]",
                single("[] seq [(neg P) imp (Q or R)]", Rule::ImpliesRight)
            );
        }
    }

    mod iff {
        use super::*;

        #[test]
        fn left() {
            assert_eq!(
                ("[R, P, Q] seq [S]".to_string(), "[R] seq [S, P, Q]".to_string()),
                branch("[P iff Q, R] seq [S]", Rule::IffLeft)
            );
        }

        #[test]
        fn right() {
            assert_eq!(
                ("[R, P] seq [S, Q]".to_string(), "[R, Q] seq [S, P]".to_string()),
                branch("[R] seq [P iff Q, S]", Rule::IffRight)
            );
        }
    }

    #[test]
    fn terminal() {
        assert_eq!(RuleResult::Axiom, apply("[P] seq [P]", Rule::Axiom));
        assert_eq!(RuleResult::Exhausted, apply("[P] seq [Q]", Rule::Exhausted));
        assert!(apply_rule(&seq("[P] seq [Q]"), Rule::Axiom).is_err());
    }

    #[test]
    fn input_untouched() {
        let s = seq("[P and Q] seq [R or S]");
        let before = s.clone();
        apply_rule(&s, Rule::AndLeft).unwrap();
        apply_rule(&s, Rule::OrRight).unwrap();
        assert_eq!(before, s);
    }

    #[test]
    fn complexity_decreases() {
        for (s, rule) in [
            ("[neg(P and Q)] seq []", Rule::NotLeft),
            ("[] seq [P iff (Q or R)]", Rule::IffRight),
            ("[(P imp Q) iff R] seq []", Rule::IffLeft),
            ("[(P or Q) imp R] seq []", Rule::ImpliesLeft),
        ] {
            let s = seq(s);
            let before = s.connectives();
            match apply_rule(&s, rule).unwrap() {
                RuleResult::Single(n) => assert!(n.connectives() < before),
                RuleResult::Branch(a, b) => {
                    assert!(a.connectives() < before);
                    assert!(b.connectives() < before);
                }
                r => panic!("unexpected {:?}", r),
            }
        }
    }
}
