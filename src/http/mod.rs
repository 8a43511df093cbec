//! HTTP client layer: `OandaHttp` over a pluggable [`Transport`].

pub mod client;
pub mod fields;
pub mod route;
pub mod transport;

pub use client::OandaHttp;
pub use fields::Fields;
pub use route::render_route;
pub use transport::{HttpRequest, Method, RawResponse, ReqwestTransport, Transport};
