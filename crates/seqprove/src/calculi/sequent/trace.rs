use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::tamper_protect::{ProtectedState, Sealer};

use super::{prove, ProofNode, Sequent, SequentResult};

const UNEXPLORED: &str = "NOT EXPLORED";

/// The verdict for a sequent together with its sealed proof tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    pub valid: bool,
    pub tree: ProofNode,
    pub seal: String,
}

impl Proof {
    pub fn search(sequent: Sequent) -> SequentResult<Self> {
        let input = sequent.to_string();
        let (valid, tree) = prove(sequent)?;
        debug!(
            "{} is {} ({} nodes, depth {})",
            input,
            if valid { "valid" } else { "not valid" },
            tree.size(),
            tree.depth()
        );
        Ok(Self::new(valid, tree))
    }

    pub fn new(valid: bool, tree: ProofNode) -> Self {
        let mut proof = Self {
            valid,
            tree,
            seal: String::new(),
        };
        proof.seal = proof.compute_seal();
        proof
    }

    pub fn verdict(&self) -> &'static str {
        if self.valid {
            "True"
        } else {
            "False"
        }
    }

    /// One line per node, root first, each branch fully before its sibling.
    pub fn trace(&self) -> Vec<String> {
        let mut lines = vec![];
        trace_lines(&self.tree, &mut lines);
        lines
    }

    pub fn is_intact(&self) -> bool {
        self.verify_seal(&self.seal)
    }
}

fn trace_lines(node: &ProofNode, lines: &mut Vec<String>) {
    let rule = match node.rule {
        Some(rule) => rule.name(),
        None => UNEXPLORED,
    };
    lines.push(format!("{} [{}]", node.sequent, rule));
    for child in &node.children {
        trace_lines(child, lines);
    }
}

/// Covers the verdict and every node: its flag, sequent, rule and child count.
impl ProtectedState for Proof {
    fn feed_seal(&self, sealer: &mut Sealer) {
        sealer.flag(self.valid);
        seal_node(&self.tree, sealer);
    }
}

fn seal_node(node: &ProofNode, sealer: &mut Sealer) {
    sealer
        .flag(node.closed)
        .part(node.sequent.to_string())
        .part(node.rule.map_or(UNEXPLORED, |r| r.to_str()))
        .part(node.children.len().to_le_bytes());
    for child in &node.children {
        seal_node(child, sealer);
    }
}

/// The verdict line followed by the trace.
impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verdict())?;
        for line in self.trace() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}
