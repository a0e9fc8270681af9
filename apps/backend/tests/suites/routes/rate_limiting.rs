// The auth scope is limited per client IP.

use std::net::SocketAddr;

use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use finora_backend::middleware::rate_limit::{auth_rate_limit_config, rate_limited_response};
use finora_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use finora_backend::routes;
use finora_backend::state::app_state::AppState;
use finora_backend::state::security_config::SecurityConfig;
use finora_test_support::problem_details::assert_problem_details;
use serde_json::json;

fn login_from(ip: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .peer_addr(ip.parse::<SocketAddr>().unwrap())
        .set_json(json!({ "mobile": "111", "password": "guess" }))
}

async fn limited_app(
    max_requests: u64,
    trust_proxy_headers: bool,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    let backend = InMemoryBackend::builder().build();
    let input = auth_rate_limit_config(max_requests, trust_proxy_headers).build();
    let rate_limiter = RateLimiter::builder(backend, input)
        .add_headers()
        .request_denied_response(rate_limited_response)
        .build();

    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::in_memory(SecurityConfig::for_tests())))
            .service(
                web::scope("/api/auth")
                    .wrap(rate_limiter)
                    .configure(routes::auth::configure_routes),
            )
            .configure(routes::health::configure_routes),
    )
    .await
}

#[actix_web::test]
async fn auth_scope_is_limited_per_ip() {
    let app = limited_app(2, false).await;

    // Wrong credentials still count toward the limit
    for i in 0..2 {
        let resp = test::call_service(&app, login_from("10.0.0.1:5000").to_request()).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "attempt {} should reach the handler",
            i + 1
        );
        assert!(resp.headers().contains_key("x-ratelimit-remaining"));
    }

    let resp = test::call_service(&app, login_from("10.0.0.1:5000").to_request()).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    // A different client is unaffected
    let resp = test::call_service(&app, login_from("10.0.0.2:5000").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Health is outside the limited scope
    for _ in 0..5 {
        let req = test::TestRequest::get()
            .uri("/health")
            .peer_addr("10.0.0.1:5000".parse().unwrap())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn denied_request_is_problem_details() {
    let app = limited_app(1, false).await;

    let resp = test::call_service(&app, login_from("10.0.0.3:5000").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, login_from("10.0.0.3:5000").to_request()).await;
    assert!(resp.headers().contains_key("x-trace-id"));
    assert_problem_details(resp.map_into_boxed_body(), StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED").await;
}

#[actix_web::test]
async fn forwarded_for_is_ignored_by_default() {
    let app = limited_app(2, false).await;

    // One peer rotating the header must still share one counter
    for i in 0..2 {
        let req = login_from("10.0.0.4:5000")
            .insert_header(("x-forwarded-for", format!("1.2.3.{i}")))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    let req = login_from("10.0.0.4:5000")
        .insert_header(("x-forwarded-for", "1.2.3.99"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp.map_into_boxed_body(), StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED").await;
}

#[actix_web::test]
async fn forwarded_for_is_the_key_when_trusted() {
    let app = limited_app(1, true).await;

    // Behind a proxy every client arrives from the same peer
    let first = login_from("10.0.0.5:5000")
        .insert_header(("x-forwarded-for", "203.0.113.1"))
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let second = login_from("10.0.0.5:5000")
        .insert_header(("x-forwarded-for", "203.0.113.2"))
        .to_request();
    assert_eq!(
        test::call_service(&app, second).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let repeat = login_from("10.0.0.5:5000")
        .insert_header(("x-forwarded-for", "203.0.113.1"))
        .to_request();
    assert_eq!(
        test::call_service(&app, repeat).await.status(),
        StatusCode::TOO_MANY_REQUESTS
    );
}
