use crate::{calculus::CloseMsg, parse::parse_sequent, Calculus};

use super::{Proof, Sequent, SequentErr, SequentParams};

/// Automatic proof search in the propositional sequent calculus.
pub struct PropSequent;

impl<'f> Calculus<'f> for PropSequent {
    type Params = SequentParams;

    type State = Sequent;

    type Proof = Proof;

    type Error = SequentErr;

    fn parse_formula(
        formula: &'f str,
        params: Option<Self::Params>,
    ) -> Result<Self::State, Self::Error> {
        let (left, right) = parse_sequent(formula)?;
        let sequent = Sequent::new(left, right);

        let limit = params.unwrap_or_default().connective_limit;
        let connectives = sequent.connectives();
        if connectives > limit {
            return Err(SequentErr::TooComplex { connectives, limit });
        }

        Ok(sequent)
    }

    fn prove(state: Self::State) -> Result<Self::Proof, Self::Error> {
        Proof::search(state)
    }

    fn check_close(proof: &Self::Proof) -> CloseMsg {
        if proof.valid {
            CloseMsg {
                closed: true,
                msg: "The proof is closed and valid in Propositional Logic".to_string(),
            }
        } else {
            CloseMsg {
                closed: false,
                msg: "No rule applies to an open branch, the sequent is not valid".to_string(),
            }
        }
    }
}
