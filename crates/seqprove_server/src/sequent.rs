use actix_web::{error, web, HttpResponse, Responder, Result};
use log::debug;
use seqprove::{sequent, tamper_protect::ProtectedState, Calculus, PropSequent};
use serde::Serialize;

use crate::{config::CONFIG, ProofForm, ProveForm};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProveResponse {
    proof: sequent::Proof,
    trace: Vec<String>,
    msg: String,
}

#[derive(Serialize)]
struct VerifyResponse {
    intact: bool,
}

pub(crate) async fn prop() -> impl Responder {
    HttpResponse::Ok().body(
        "Calculus prop-sequent loaded.
Interact via the /prove and /verify endpoints"
            .to_string(),
    )
}

pub(crate) async fn prop_prove(form: web::Form<ProveForm>) -> Result<HttpResponse> {
    let ProveForm { sequent: input, params } = form.0;
    let params: Option<sequent::SequentParams> = match params {
        Some(p) => Some(serde_json::from_str(&p)?),
        None => None,
    };

    let params = CONFIG.clamp(params);

    let state = PropSequent::parse_formula(&input, Some(params))
        .map_err(|e| error::ErrorBadRequest(e.to_string()))?;
    let proof =
        PropSequent::prove(state).map_err(|e| error::ErrorBadRequest(e.to_string()))?;
    debug!("{} -> {}", input, proof.verdict());

    let msg = PropSequent::check_close(&proof).msg;
    let trace = proof.trace();

    Ok(HttpResponse::Ok().json(ProveResponse { proof, trace, msg }))
}

pub(crate) async fn prop_verify(form: web::Form<ProofForm>) -> Result<HttpResponse> {
    let ProofForm { proof } = form.0;

    let proof: sequent::Proof = serde_json::from_str(&proof)?;
    let intact = proof.verify_seal(&proof.seal);

    Ok(HttpResponse::Ok().json(VerifyResponse { intact }))
}
