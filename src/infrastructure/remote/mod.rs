//! HTTP code-push client

mod http;
mod wire;

pub use http::{HttpClientFactory, HttpCodePushClient, Timeouts, API_KEY_HEADER};
