//! Drive the public endpoints to set up users and transactions.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use finora_test_support::unique_helpers::{unique_email, unique_mobile};
use serde_json::{json, Value};

pub const PASSWORD: &str = "correct horse battery staple";

/// Sign up a fresh user and return their mobile number.
pub async fn signup_user<S>(app: &S, name: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let mobile = unique_mobile();
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "name": name,
            "email": unique_email(name),
            "mobile": mobile,
            "password": PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200, "signup should succeed");
    mobile
}

/// Log in and return the full login response body.
pub async fn login<S>(app: &S, mobile: &str, password: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "mobile": mobile, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200, "login should succeed");
    test::read_body_json(resp).await
}

/// Sign up and log in a fresh user, returning `(mobile, access_token)`.
pub async fn signed_in_user<S>(app: &S, name: &str) -> (String, String)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let mobile = signup_user(app, name).await;
    let body = login(app, &mobile, PASSWORD).await;
    let token = body["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string();
    (mobile, token)
}

pub async fn add_transaction<S>(app: &S, access_token: &str, txn: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/finance/add-transaction")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .set_json(txn)
        .to_request();
    test::call_service(app, req).await
}

pub async fn list_transactions<S>(app: &S, access_token: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get()
        .uri("/api/finance/transactions")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .to_request();
    test::call_service(app, req).await
}
