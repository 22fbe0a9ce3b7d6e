use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use stayfinder_api::{config::Settings, routes, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let host = settings.host.clone();
    let port = settings.port;

    let state = AppState::from_settings(settings).await.map_err(|e| {
        log::error!("Failed to initialise storage: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;
    log::info!(
        "Using {} storage, comparison capacity {}",
        state.listings.backend(),
        state.settings.comparison_capacity
    );

    log::info!("Starting HTTP server on {}:{}", host, port);
    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(data.clone())
            .configure(routes::config)
    })
    .bind((host, port))?
    .run()
    .await
}
