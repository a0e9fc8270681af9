use actix_web::web;

pub mod auth;
pub mod finance;
pub mod health;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under scopes with additional
/// middleware (rate limiting, security headers). For tests we register the
/// same paths without those wrappers so that endpoint behavior can be
/// exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Finance routes: /api/finance/**
    cfg.service(web::scope("/api/finance").configure(finance::configure_routes));
}
