//! Response-shape negotiation.
//!
//! Handlers fetch their data once and let [`ResponseShape`] pick how it is
//! rendered, based on what the client says it accepts.

use actix_web::http::header::ACCEPT;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

/// Media types that ask for a partial page update.
const FRAGMENT_TYPES: [&str; 3] = [
    "text/javascript",
    "application/javascript",
    "application/x-fragment",
];

/// How a handler's data is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Complete HTML document.
    Document,
    /// HTML snippet to splice into an already loaded page.
    Fragment,
    /// JSON body.
    Json,
}

impl ResponseShape {
    /// Decide the shape from the `Accept` and `X-Requested-With` headers.
    pub fn negotiate(accept: Option<&str>, requested_with: Option<&str>) -> Self {
        let accept = accept.unwrap_or_default().to_ascii_lowercase();

        let wants_fragment = FRAGMENT_TYPES.iter().any(|t| accept.contains(t))
            || requested_with.is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"));
        if wants_fragment {
            return ResponseShape::Fragment;
        }

        if accept.contains("application/json") && !accept.contains("text/html") {
            return ResponseShape::Json;
        }

        ResponseShape::Document
    }
}

impl FromRequest for ResponseShape {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(ResponseShape::negotiate(
            header_str(req, ACCEPT.as_str()),
            header_str(req, "x-requested-with"),
        )))
    }
}

fn header_str<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}
