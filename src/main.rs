use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod analysis;
mod config;
mod domain;
mod errors;
mod llm;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() {
    init_logging();
    let config = AppConfig::from_env();

    let addr = config.bind_addr;
    let max_workers = config.max_workers;

    info!(
        models = ?config.models,
        weights = %config.weights,
        server_key = config.openai_api_key.is_some(),
        "config.loaded"
    );

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "http_client.init_failed");
            std::process::exit(1);
        }
    };

    info!(%addr, max_workers, "server.starting");

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "http.request_failed");
            }
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server.stopped_with_error");
    }

    info!("server.shutdown");
}
