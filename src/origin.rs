use crate::constants::{header, value};
use crate::options::ValidationError;
use crate::util::{is_blank, is_header_value_safe};

/// Configuration for the `Access-Control-Allow-Origin` response header.
///
/// The exact variant writes its configured value as-is; the request's `Origin`
/// header is never compared against it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Origin {
    /// Emit the wildcard `*`.
    #[default]
    Any,
    /// Emit the first configured origin.
    Exact(OriginList),
}

/// One or more explicitly configured origins. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginList {
    first: String,
    rest: Vec<String>,
}

impl OriginList {
    /// The origin written to `Access-Control-Allow-Origin`.
    pub fn primary(&self) -> &str {
        &self.first
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.rest.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(OriginList {
            first: value.into(),
            rest: Vec::new(),
        })
    }

    /// Builds an exact rule from several origins. Only the first one is ever written.
    pub fn list<I, S>(values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter().map(Into::into);
        let first = values.next().ok_or(ValidationError::EmptyOriginList)?;
        Ok(Self::Exact(OriginList {
            first,
            rest: values.collect(),
        }))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Origin::Any)
    }

    pub fn header_value(&self) -> &str {
        match self {
            Origin::Any => value::WILDCARD,
            Origin::Exact(list) => list.primary(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let Origin::Exact(list) = self else {
            return Ok(());
        };

        for origin in list.iter() {
            if is_blank(origin) {
                return Err(ValidationError::BlankOrigin);
            }
            if !is_header_value_safe(origin) {
                return Err(ValidationError::InvalidHeaderValue {
                    header: header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    value: origin.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        if value == value::WILDCARD {
            Origin::Any
        } else {
            Origin::exact(value)
        }
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        if value == value::WILDCARD {
            Origin::Any
        } else {
            Origin::exact(value)
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
