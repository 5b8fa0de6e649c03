use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::header;
use crate::exposed_headers::ExposedHeaders;
use crate::max_age::MaxAge;
use crate::origin::Origin;
use crate::util::is_header_value_safe;
use thiserror::Error;

/// Immutable policy evaluated by [`crate::Cors`] for every request.
///
/// `None` rules produce no header at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsOptions {
    pub origin: Origin,
    pub credentials: bool,
    pub methods: Option<AllowedMethods>,
    pub allowed_headers: Option<AllowedHeaders>,
    pub exposed_headers: Option<ExposedHeaders>,
    pub max_age: Option<MaxAge>,
}

/// Errors raised while turning configuration into a policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("an explicit origin rule needs at least one origin")]
    EmptyOriginList,
    #[error("configured origins must not be blank")]
    BlankOrigin,
    #[error("value {value:?} cannot be written to the {header} header")]
    InvalidHeaderValue { header: &'static str, value: String },
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.origin.validate()?;

        if let Some(methods) = &self.methods {
            check_values(header::ACCESS_CONTROL_ALLOW_METHODS, methods.configured())?;
        }
        if let Some(allowed) = &self.allowed_headers {
            check_values(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed.configured())?;
        }
        if let Some(exposed) = &self.exposed_headers {
            check_values(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed.values())?;
        }

        Ok(())
    }
}

fn check_values(header: &'static str, values: &[String]) -> Result<(), ValidationError> {
    match values.iter().find(|value| !is_header_value_safe(value)) {
        Some(value) => Err(ValidationError::InvalidHeaderValue {
            header,
            value: value.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
