//! One `request_completed` event per request.
//!
//! The level follows the status class. `outcome` names what happened in
//! terms an operator searches for (`rate_limited`, `unauthenticated`, ...),
//! so brute-force bursts on `/api/auth` stand out without parsing paths.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::trace_span::api_scope;

pub fn outcome(status: StatusCode) -> &'static str {
    match status {
        StatusCode::TOO_MANY_REQUESTS => "rate_limited",
        StatusCode::UNAUTHORIZED => "unauthenticated",
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => "rejected",
        s if s.is_server_error() => "failed",
        s if s.is_client_error() => "client_error",
        _ => "ok",
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

macro_rules! completed {
    ($level:ident, $ctx:ident, $status:expr, $duration_us:expr) => {
        $level!(
            http.method = %$ctx.method,
            url.path = %$ctx.path,
            scope = $ctx.scope,
            http.status_code = $status.as_u16(),
            outcome = outcome($status),
            duration_us = $duration_us,
            trace_id = %$ctx.trace_id,
            "request_completed"
        )
    };
}

struct RequestContext {
    method: String,
    path: String,
    scope: &'static str,
    trace_id: String,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let ctx = RequestContext {
            method: req.method().to_string(),
            path: req.path().to_string(),
            scope: api_scope(req.path()),
            trace_id: req
                .extensions()
                .get::<String>()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

            if status.is_server_error() {
                completed!(error, ctx, status, duration_us);
            } else if status.is_client_error() {
                completed!(warn, ctx, status, duration_us);
            } else {
                completed!(info, ctx, status, duration_us);
            }

            result
        })
    }
}
