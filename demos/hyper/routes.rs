use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::{CONTENT_TYPE, HeaderValue};
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::cors::SharedAppState;
use crate::cors::middleware::CorsBody;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

const TRACE_HEADER: &str = "x-example-trace";

#[derive(Clone)]
pub struct Router {
    state: SharedAppState,
}

pub fn router(state: SharedAppState) -> Router {
    Router { state }
}

impl Service<Request<Incoming>> for Router {
    type Response = Response<CorsBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let response = match (req.method(), req.uri().path()) {
            (&Method::GET, "/greet") => text(StatusCode::OK, self.state.greeting),
            (&Method::POST, "/trace") => trace(&req),
            (_, "/greet" | "/trace") => text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
            _ => text(StatusCode::NOT_FOUND, "Not Found"),
        };

        Box::pin(async move { Ok(response) })
    }
}

/// Echoes the caller's trace id back in an exposed response header.
fn trace(req: &Request<Incoming>) -> Response<CorsBody> {
    let trace_id = req
        .headers()
        .get(TRACE_HEADER)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("none"));

    let mut response = text(StatusCode::OK, "traced");
    response.headers_mut().insert(TRACE_HEADER, trace_id);
    response
}

fn text(status: StatusCode, body: &'static str) -> Response<CorsBody> {
    let mut response = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
