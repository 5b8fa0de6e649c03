use crate::builder::CorsBuilder;
use crate::context::HttpContext;
use crate::header_writer::HeaderWriter;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;
use std::sync::Arc;
use tracing::debug;

/// Request handler produced by [`CorsBuilder::build`].
///
/// Cloning is cheap and every clone shares the same frozen [`CorsOptions`].
#[derive(Clone, Debug)]
pub struct Cors {
    options: Arc<CorsOptions>,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        debug!(
            origin = options.origin.header_value(),
            credentials = options.credentials,
            "CORS policy built"
        );
        Ok(Self {
            options: Arc::new(options),
        })
    }

    pub fn wildcard() -> CorsBuilder {
        CorsBuilder::wildcard()
    }

    pub fn with_origin(origin: Origin) -> CorsBuilder {
        CorsBuilder::new(origin)
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Writes the policy's headers into `ctx`, creating the response map if needed.
    ///
    /// Every request method is handled the same way; preflight completion is left
    /// to later pipeline stages.
    pub fn apply(&self, ctx: &mut HttpContext) {
        let HttpContext {
            request_headers,
            response_headers,
            ..
        } = ctx;
        let response = response_headers.get_or_insert_with(Default::default);
        HeaderWriter::new(&self.options).write_all(request_headers.as_ref(), response);
    }

    /// Writes the headers, then hands the context to `next` exactly once and returns
    /// whatever it produces.
    pub fn handle<N, R>(&self, mut ctx: HttpContext, next: N) -> R
    where
        N: FnOnce(HttpContext) -> R,
    {
        self.apply(&mut ctx);
        next(ctx)
    }

    /// Packages [`Cors::handle`] as a standalone function value for hosts that store
    /// middleware as closures.
    pub fn handler<N, R>(&self) -> impl Fn(HttpContext, N) -> R + Clone + Send + Sync + use<N, R>
    where
        N: FnOnce(HttpContext) -> R,
    {
        let cors = self.clone();
        move |ctx, next| cors.handle(ctx, next)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
