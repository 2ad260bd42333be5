use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use log::info;
use serde::Deserialize;

mod config;
mod sequent;

use config::CONFIG;

#[derive(Deserialize)]
struct ProveForm {
    sequent: String,
    params: Option<String>,
}

#[derive(Deserialize)]
struct ProofForm {
    proof: String,
}

async fn index() -> impl Responder {
    HttpResponse::Ok().body(
        "seqprove API Server

Available calculus endpoints:
prop-sequent",
    )
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("listening on {}", CONFIG.bind);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .route("/", web::get().to(index))
            .route("/prop-sequent", web::get().to(sequent::prop))
            .route("/prop-sequent/prove", web::post().to(sequent::prop_prove))
            .route("/prop-sequent/verify", web::post().to(sequent::prop_verify))
    })
    .bind(CONFIG.bind.as_str())?
    .run()
    .await
}
