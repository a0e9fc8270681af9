use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use finora_backend::config::AppConfig;
use finora_backend::infra::state::build_state;
use finora_backend::middleware::{
    auth_rate_limit_config, cors_middleware, rate_limited_response, RequestTrace,
    SecurityHeaders, StructuredLogger, TraceSpan,
};
use finora_backend::routes;
use tracing::{error, info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting finora backend");

    let app_state = match build_state()
        .with_security(config.security.clone())
        .with_data_dir(config.data_dir.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(data_dir = %config.data_dir.display(), "data directory ready");

    if config.trust_proxy_headers {
        warn!("rate limiter keys on X-Forwarded-For; the proxy must overwrite it");
    }

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    // One counter store shared by every worker.
    let rate_limit_backend = InMemoryBackend::builder().build();
    let auth_limit = config.auth_rate_limit_per_minute;
    let trust_proxy_headers = config.trust_proxy_headers;
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        let auth_rate_limiter = RateLimiter::builder(
            rate_limit_backend.clone(),
            auth_rate_limit_config(auth_limit, trust_proxy_headers).build(),
        )
        .add_headers()
        .request_denied_response(rate_limited_response)
        .build();

        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::health::configure_routes)
            .service(
                web::scope("/api/auth")
                    .wrap(auth_rate_limiter)
                    .configure(routes::auth::configure_routes),
            )
            .service(
                web::scope("/api/finance").configure(routes::finance::configure_routes),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
