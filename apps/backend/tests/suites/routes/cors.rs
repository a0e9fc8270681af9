use actix_web::http::{header, Method, StatusCode};
use actix_web::{test, web, App, HttpResponse};
use finora_backend::middleware::cors_middleware;

async fn ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

fn origins() -> Vec<String> {
    vec!["https://finora.app".to_string()]
}

#[actix_web::test]
async fn preflight_from_allowed_origin_succeeds() {
    let allowed = origins();
    let app = test::init_service(
        App::new()
            .wrap(cors_middleware(&allowed))
            .route("/api/finance/transactions", web::get().to(ok)),
    )
    .await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/finance/transactions")
        .insert_header((header::ORIGIN, "https://finora.app"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://finora.app"
    );
}

#[actix_web::test]
async fn request_from_unknown_origin_gets_no_allow_origin() {
    let allowed = origins();
    let app = test::init_service(
        App::new()
            .wrap(cors_middleware(&allowed))
            .route("/health", web::get().to(ok)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://evil.example"))
        .to_request();
    let resp = test::try_call_service(&app, req).await;

    match resp {
        Ok(resp) => assert!(!resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)),
        // actix-cors rejects disallowed origins with an error response
        Err(err) => assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST),
    }
}
