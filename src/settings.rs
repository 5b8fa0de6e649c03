use crate::builder::CorsBuilder;
use crate::cors::Cors;
use crate::options::ValidationError;
use crate::origin::Origin;
use crate::util::is_lone_wildcard;
use serde::{Deserialize, Serialize};

/// Declarative CORS configuration, e.g. loaded from a JSON or TOML file.
///
/// `allowed_origins` is required. A single `"*"` entry selects the wildcard origin;
/// otherwise the first entry is the one written to responses. Empty method and header
/// lists leave the matching rule unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,

    #[serde(default)]
    pub allow_credentials: bool,

    #[serde(default)]
    pub allowed_methods: Vec<String>,

    #[serde(default)]
    pub allowed_headers: Vec<String>,

    #[serde(default)]
    pub expose_headers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<u64>,
}

impl CorsSettings {
    pub fn into_builder(self) -> Result<CorsBuilder, ValidationError> {
        let origin = if is_lone_wildcard(&self.allowed_origins) {
            Origin::Any
        } else {
            Origin::list(self.allowed_origins)?
        };

        let mut builder = CorsBuilder::new(origin);
        if self.allow_credentials {
            builder = builder.allow_credentials();
        }
        if !self.allowed_methods.is_empty() {
            builder = builder.allow_methods(self.allowed_methods);
        }
        if !self.allowed_headers.is_empty() {
            builder = builder.allow_headers(self.allowed_headers);
        }
        if !self.expose_headers.is_empty() {
            builder = builder.expose_headers(self.expose_headers);
        }
        if let Some(seconds) = self.max_age_seconds {
            builder = builder.max_age(seconds);
        }

        Ok(builder)
    }
}

impl TryFrom<CorsSettings> for Cors {
    type Error = ValidationError;

    fn try_from(settings: CorsSettings) -> Result<Self, Self::Error> {
        settings.into_builder()?.build()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
