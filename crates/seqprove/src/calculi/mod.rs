pub mod sequent;
