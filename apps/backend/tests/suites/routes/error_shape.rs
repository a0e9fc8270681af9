// Every error response is RFC 7807 problem details with a trace id that
// matches the x-trace-id header.

use actix_web::http::StatusCode;
use actix_web::test;
use finora_backend::state::app_state::AppState;
use finora_backend::state::security_config::SecurityConfig;
use finora_test_support::problem_details::assert_problem_details;

use crate::support::create_test_app;

#[actix_web::test]
async fn unauthorized_error_has_problem_shape() {
    let app = create_test_app(AppState::in_memory(SecurityConfig::for_tests()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/finance/transactions")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let problem =
        assert_problem_details(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED_MISSING_BEARER")
            .await;
    assert_eq!(problem.status, 401);
    assert_eq!(problem.title, "Unauthorized Missing Bearer");
    assert_eq!(
        problem.type_,
        "https://finora.app/errors/UNAUTHORIZED_MISSING_BEARER"
    );
    assert!(!problem.trace_id.is_empty());
    assert_ne!(problem.trace_id, "unknown");
}

#[actix_web::test]
async fn request_and_trace_ids_are_echoed() {
    let app = create_test_app(AppState::in_memory(SecurityConfig::for_tests()))
        .with_prod_routes()
        .build()
        .await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    let headers = resp.headers();
    let request_id = headers.get("x-request-id").unwrap().to_str().unwrap();
    let trace_id = headers.get("x-trace-id").unwrap().to_str().unwrap();
    assert_eq!(request_id, trace_id);
    assert!(uuid_like(trace_id), "unexpected trace id {trace_id}");
}

#[actix_web::test]
async fn each_request_gets_its_own_trace_id() {
    let app = create_test_app(AppState::in_memory(SecurityConfig::for_tests()))
        .with_prod_routes()
        .build()
        .await;

    let first =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let second =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_ne!(
        first.headers().get("x-trace-id"),
        second.headers().get("x-trace-id")
    );
}

fn uuid_like(s: &str) -> bool {
    s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
}
