//! Single binary web server: REST API under /api, built frontend (if present) at /.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:3000 by default. Override with env: HOST, PORT, DATA_DIR, STATIC_DIR.

use actix_files::Files;
use actix_web::{web::Data, App, HttpResponse, HttpServer};
use mahjong_score_web::{api, AppState, ServerConfig};

/// Avoid 404 in browser tab: favicon not required for app logic.
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let state = match AppState::open(&config.data_dir).await {
        Ok(state) => Data::new(state),
        Err(e) => {
            log::error!("Cannot open data directory {}: {}", config.data_dir.display(), e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };
    log::info!("Data directory: {}", config.data_dir.display());

    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if serve_static {
        log::info!("Serving frontend from {}", static_dir.display());
    }

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Health check: http://{}:{}/api/health", bind.0, bind.1);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .configure(api::configure);
        if serve_static {
            app.service(Files::new("/", static_dir.clone()).index_file("index.html"))
        } else {
            app.route("/favicon.ico", actix_web::web::get().to(favicon))
        }
    })
    .bind(bind)?
    .run()
    .await
}
