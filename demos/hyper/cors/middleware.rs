use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};
use simple_cors_rs::{Cors, HttpContext};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware following the "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
///
/// Every request gets the CORS headers. Preflights are answered here with
/// `204 No Content`; everything else goes on to the wrapped service.
#[derive(Clone)]
pub struct CorsService<S> {
    inner: S,
    cors: Cors,
}

impl<S> CorsService<S> {
    pub fn new(cors: Cors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsService<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let inner = self.inner.clone();
        let (parts, body) = req.into_parts();
        let ctx = HttpContext::from_request_parts(&parts);
        let req = Request::from_parts(parts, body);

        Box::pin(self.cors.handle(ctx, move |mut ctx| async move {
            let mut response = if req.method() == Method::OPTIONS {
                ctx.stop(StatusCode::NO_CONTENT.as_u16());
                preflight_response(&ctx)
            } else {
                inner.call(req).await?
            };

            ctx.write_response_headers(response.headers_mut());
            Ok::<_, S::Error>(response)
        }))
    }
}

fn preflight_response(ctx: &HttpContext) -> Response<CorsBody> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = ctx.status_code().unwrap_or(StatusCode::NO_CONTENT);
    response
}
