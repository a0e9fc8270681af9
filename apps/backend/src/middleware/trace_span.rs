//! Per-request tracing span.
//!
//! Every log line emitted while a request is in flight inherits `trace_id`,
//! `method` and the API `scope` the path belongs to. The response status is
//! recorded on the span once the inner service completes.
//!
//! Must sit inside `RequestTrace`, which inserts the trace id.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{field, info_span, Instrument};

/// Coarse route family used as a log dimension.
pub fn api_scope(path: &str) -> &'static str {
    if path == "/health" {
        "health"
    } else if path.starts_with("/api/auth/") {
        "auth"
    } else if path.starts_with("/api/finance/") {
        "finance"
    } else {
        "other"
    }
}

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            scope = api_scope(req.path()),
            status = field::Empty
        );
        let recorder = span.clone();
        let fut = self.service.call(req);

        Box::pin(
            async move {
                let result = fut.await;
                if let Ok(res) = &result {
                    recorder.record("status", res.status().as_u16());
                }
                result
            }
            .instrument(span),
        )
    }
}
