pub mod calculi;
pub mod calculus;
mod consts;
pub mod logic;
pub mod parse;
pub mod tamper_protect;

pub use consts::{CONNECTIVE_LIMIT, NESTING_LIMIT};
pub use logic::{Atom, Formula};

pub use calculi::sequent;
pub use calculi::sequent::{Proof, PropSequent, Sequent, SequentErr, SequentParams};
pub use calculus::{Calculus, CloseMsg};
