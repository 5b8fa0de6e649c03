use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::cors::Cors;
use crate::exposed_headers::ExposedHeaders;
use crate::max_age::MaxAge;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;
use std::time::Duration;
use tracing::warn;

/// Fluent builder for a [`Cors`] handler.
///
/// Setters can be called in any order; each one replaces the previous value of the
/// rule it configures.
///
/// ```
/// use simple_cors_rs::{CorsBuilder, HttpContext, Origin};
///
/// let cors = CorsBuilder::new(Origin::exact("https://app.example"))
///     .allow_credentials()
///     .allow_methods(["GET", "POST"])
///     .max_age(600)
///     .build()
///     .expect("valid CORS policy");
///
/// let mut ctx = HttpContext::new();
/// cors.apply(&mut ctx);
/// assert_eq!(
///     ctx.response_header("Access-Control-Allow-Methods"),
///     Some("GET, POST")
/// );
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new(origin: Origin) -> Self {
        Self {
            options: CorsOptions {
                origin,
                ..CorsOptions::default()
            },
        }
    }

    /// Shorthand for a builder answering every request with `Access-Control-Allow-Origin: *`.
    pub fn wildcard() -> Self {
        Self::new(Origin::Any)
    }

    /// Emits `Access-Control-Allow-Credentials: true`.
    ///
    /// Pairing this with a wildcard origin is accepted, although browsers refuse
    /// credentialed responses that carry `*`. A warning is logged at build time.
    pub fn allow_credentials(mut self) -> Self {
        self.options.credentials = true;
        self
    }

    /// A single `"*"` mirrors the request's `Access-Control-Request-Method(s)` header;
    /// anything else is written as a fixed list.
    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = Some(AllowedMethods::from_values(methods));
        self
    }

    /// A single `"*"` mirrors the request's `Access-Control-Request-Header(s)` header;
    /// anything else is written as a fixed list.
    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_headers = Some(AllowedHeaders::from_values(headers));
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(MaxAge::from_secs(seconds));
        self
    }

    pub fn max_age_duration(mut self, max_age: Duration) -> Self {
        self.options.max_age = Some(MaxAge::from(max_age));
        self
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Validates and freezes the current configuration.
    ///
    /// The builder stays usable; every call produces an independent handler holding
    /// its own snapshot of the options.
    pub fn build(&self) -> Result<Cors, ValidationError> {
        if self.options.credentials && self.options.origin.is_any() {
            warn!(
                "credentials are allowed together with a wildcard origin; browsers will reject credentialed responses"
            );
        }

        Cors::new(self.options.clone())
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
