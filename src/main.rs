use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};

use trading_path_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Refusing to start: {e}");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let state = web::Data::new(AppState::new(&config));
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    log::info!(
        "Starting HTTP server on {}:{} (allowed origins: {})",
        bind_addr.0,
        bind_addr.1,
        config.cors_allowed_origins.join(", ")
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(&config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
