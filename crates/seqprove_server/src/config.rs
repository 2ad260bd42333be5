use std::env;

use lazy_static::lazy_static;
use log::warn;
use seqprove::{SequentParams, CONNECTIVE_LIMIT};

const BIND_VAR: &str = "SEQPROVE_BIND";
const DEFAULT_BIND: &str = "127.0.0.1:7000";
const MAX_CONNECTIVES_VAR: &str = "SEQPROVE_MAX_CONNECTIVES";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    /// Largest connective limit a request may ask for.
    pub max_connectives: usize,
}

impl Config {
    fn from_env() -> Self {
        Self::from_vars(env::var(BIND_VAR).ok(), env::var(MAX_CONNECTIVES_VAR).ok())
    }

    fn from_vars(bind: Option<String>, max_connectives: Option<String>) -> Self {
        let bind = bind
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let max_connectives = match max_connectives.map(|m| m.trim().parse::<usize>()) {
            Some(Ok(m)) => m,
            Some(Err(e)) => {
                warn!("ignoring {}: {}", MAX_CONNECTIVES_VAR, e);
                CONNECTIVE_LIMIT
            }
            None => CONNECTIVE_LIMIT,
        };

        Self {
            bind,
            max_connectives,
        }
    }

    /// Request parameters with the connective limit capped at `max_connectives`.
    pub fn clamp(&self, params: Option<SequentParams>) -> SequentParams {
        let mut params = params.unwrap_or_default();
        params.connective_limit = params.connective_limit.min(self.max_connectives);
        params
    }
}

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}
