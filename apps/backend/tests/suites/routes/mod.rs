mod cors;
mod error_shape;
mod rate_limiting;
