use log::trace;
use serde::{Deserialize, Serialize};

use super::{apply_rule, select_rule, Rule, RuleResult, Sequent, SequentResult};

/// One step of a proof: the sequent, the rule applied to it and the
/// sequents that rule produced.
///
/// `rule` is `None` for a branch that was recorded but never explored
/// because its sibling already failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofNode {
    pub sequent: Sequent,
    pub rule: Option<Rule>,
    pub closed: bool,
    pub children: Vec<ProofNode>,
}

impl ProofNode {
    fn leaf(sequent: Sequent, rule: Rule, closed: bool) -> Self {
        Self {
            sequent,
            rule: Some(rule),
            closed,
            children: vec![],
        }
    }

    fn unexplored(sequent: Sequent) -> Self {
        Self {
            sequent,
            rule: None,
            closed: false,
            children: vec![],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_explored(&self) -> bool {
        self.rule.is_some()
    }

    /// Number of rule applications on the longest path below this node.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in this subtree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(ProofNode::size).sum::<usize>()
    }
}

/// Searches a proof for `sequent` and returns the verdict with the proof tree.
pub fn prove(sequent: Sequent) -> SequentResult<(bool, ProofNode)> {
    let node = prove_node(sequent)?;
    Ok((node.closed, node))
}

fn prove_node(sequent: Sequent) -> SequentResult<ProofNode> {
    let rule = select_rule(&sequent);
    trace!("{} [{}]", sequent, rule);

    let node = match apply_rule(&sequent, rule)? {
        RuleResult::Axiom => ProofNode::leaf(sequent, rule, true),
        RuleResult::Exhausted => ProofNode::leaf(sequent, rule, false),
        RuleResult::Single(next) => {
            let child = prove_node(next)?;
            ProofNode {
                sequent,
                rule: Some(rule),
                closed: child.closed,
                children: vec![child],
            }
        }
        RuleResult::Branch(first, second) => {
            let first = prove_node(first)?;
            let second = if first.closed {
                prove_node(second)?
            } else {
                ProofNode::unexplored(second)
            };
            ProofNode {
                sequent,
                rule: Some(rule),
                closed: first.closed && second.closed,
                children: vec![first, second],
            }
        }
    };

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(s: &str) -> bool {
        prove(s.parse().expect(s)).unwrap().0
    }

    fn tree(s: &str) -> ProofNode {
        prove(s.parse().expect(s)).unwrap().1
    }

    mod scenarios {
        use super::*;

        #[test]
        fn self_implication() {
            assert!(valid("[] seq [P imp P]"));
        }

        #[test]
        fn modus_ponens() {
            assert!(valid("[P, P imp Q] seq [Q]"));
        }

        #[test]
        fn distinct_atoms() {
            assert!(!valid("[P] seq [Q]"));
        }

        #[test]
        fn iff_gives_implication() {
            assert!(valid("[P iff Q] seq [P imp Q]"));
        }

        #[test]
        fn unprovable_conjunction() {
            assert!(!valid("[] seq [P and Q]"));
        }

        #[test]
        fn negation_both_sides() {
            assert!(valid("[neg P] seq [neg P]"));
            let n = tree("[neg P] seq [neg P]");
            assert_eq!(Some(Rule::NotLeft), n.rule);
            assert_eq!(Some(Rule::NotRight), n.children[0].rule);
            assert_eq!(Some(Rule::Axiom), n.children[0].children[0].rule);
        }
    }

    #[test]
    fn tautologies() {
        for s in [
            "[] seq [P or (neg P)]",
            "[] seq [neg(P and (neg P))]",
            "[] seq [(P imp Q) iff ((neg Q) imp (neg P))]",
            "[] seq [(neg(P and Q)) iff ((neg P) or (neg Q))]",
            "[] seq [((P imp Q) imp P) imp P]",
            "[P and Q] seq [Q and P]",
            "[P or Q] seq [Q or P]",
            "[P imp Q, Q imp R] seq [P imp R]",
            "[P iff Q, Q iff R] seq [P iff R]",
            "[P, neg P] seq []",
            "[] seq [P, neg P]",
        ] {
            assert!(valid(s), "{} should be valid", s);
        }
    }

    #[test]
    fn non_tautologies() {
        for s in [
            "[] seq []",
            "[] seq [P]",
            "[P or Q] seq [P]",
            "[P imp Q] seq [Q imp P]",
            "[P iff Q] seq [P]",
            "[] seq [P iff (neg P)]",
            "[neg(P and Q)] seq [neg P]",
        ] {
            assert!(!valid(s), "{} should not be valid", s);
        }
    }

    #[test]
    fn axiom_closure() {
        for (l, r) in [
            ("", ""),
            ("Q, ", ""),
            ("P and Q, ", "R or S, "),
            ("neg R, Q iff S, ", "S imp T, "),
        ] {
            let s = format!("[{l}x] seq [{r}x]");
            assert!(valid(&s), "{} should be valid", s);
        }
    }

    #[test]
    fn depth_bounded_by_connectives() {
        for s in [
            "[] seq [(P imp Q) iff ((neg Q) imp (neg P))]",
            "[P iff Q, Q iff R] seq [P iff R]",
            "[(P or Q) and (R or S)] seq [(P and R) or (Q and S)]",
            "[] seq [P and Q]",
        ] {
            let seq: Sequent = s.parse().unwrap();
            let bound = seq.connectives();
            let (_, n) = prove(seq).unwrap();
            assert!(n.depth() <= bound, "{}: depth {} > {}", s, n.depth(), bound);
        }
    }

    #[test]
    fn short_circuit_records_second_branch() {
        let n = tree("[] seq [P and Q]");
        assert_eq!(Some(Rule::AndRight), n.rule);
        assert!(!n.closed);
        assert_eq!(2, n.children.len());

        let (first, second) = (&n.children[0], &n.children[1]);
        assert_eq!(Some(Rule::Exhausted), first.rule);
        assert!(!second.is_explored());
        assert_eq!("[] seq [Q]", second.sequent.to_string());
    }

    #[test]
    fn both_branches_explored_on_success() {
        let n = tree("[P, Q] seq [P and Q]");
        assert!(n.closed);
        assert!(n.children.iter().all(|c| c.rule == Some(Rule::Axiom)));
        assert_eq!(3, n.size());
        assert_eq!(1, n.depth());
    }

    #[test]
    fn second_branch_decides() {
        let n = tree("[P] seq [P and Q]");
        assert!(!n.closed);
        assert!(n.children[0].closed);
        assert_eq!(Some(Rule::Exhausted), n.children[1].rule);
    }

    #[test]
    fn deterministic() {
        let s = "[P iff Q, (neg R) or S] seq [(P and R) imp (Q and S)]";
        assert_eq!(tree(s), tree(s));
    }
}
