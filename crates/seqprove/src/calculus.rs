use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloseMsg {
    pub closed: bool,
    pub msg: String,
}

pub trait Calculus<'f> {
    type Params;
    type State;
    type Proof;
    type Error;

    fn parse_formula(
        formula: &'f str,

        params: Option<Self::Params>,
    ) -> Result<Self::State, Self::Error>;

    fn prove(state: Self::State) -> Result<Self::Proof, Self::Error>;

    fn check_close(proof: &Self::Proof) -> CloseMsg;
}
