use std::{error::Error, process::ExitCode};

use argh::FromArgs;
use log::info;
use seqprove::{Calculus, PropSequent, SequentParams, CONNECTIVE_LIMIT};

/// Decide a propositional sequent and print its proof trace.
///
/// Example: seqprove "[P, P imp Q] seq [Q]"
#[derive(FromArgs)]
struct Args {
    /// print the proof as JSON instead of the verdict and trace lines.
    #[argh(switch)]
    json: bool,

    /// reject sequents with more connectives than this.
    #[argh(option, default = "CONNECTIVE_LIMIT")]
    limit: usize,

    /// the sequent, e.g. [A1, A2] seq [B1]. Several words are joined with spaces.
    #[argh(positional, greedy)]
    sequent: Vec<String>,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let input = args.sequent.join(" ");
    info!("proving {}", input);

    let params = SequentParams {
        connective_limit: args.limit,
    };
    let state = PropSequent::parse_formula(&input, Some(params))?;
    let proof = PropSequent::prove(state)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&proof)?);
    } else {
        println!("{}", proof);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Args = argh::from_env();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
