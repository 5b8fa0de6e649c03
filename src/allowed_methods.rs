use crate::constants::header;
use crate::headers::Headers;
use crate::util::{is_lone_wildcard, join_values};

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Emit the configured methods joined by `", "`. Order and casing are kept as given.
    List(Vec<String>),
    /// Copy `Access-Control-Request-Methods` (or the singular form) from the request.
    MirrorRequest,
}

impl AllowedMethods {
    /// Interprets builder input: a lone `*` selects mirroring, anything else is a list.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if is_lone_wildcard(&values) {
            Self::MirrorRequest
        } else {
            Self::List(values)
        }
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    /// Values to write for this request, or `None` when the header is omitted.
    pub fn header_values(&self, request: Option<&Headers>) -> Option<Vec<String>> {
        match self {
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(vec![join_values(values)]),
            Self::MirrorRequest => request
                .and_then(|headers| {
                    headers.first_present(
                        header::ACCESS_CONTROL_REQUEST_METHODS,
                        header::ACCESS_CONTROL_REQUEST_METHOD,
                    )
                })
                .map(<[String]>::to_vec),
        }
    }

    pub(crate) fn configured(&self) -> &[String] {
        match self {
            Self::List(values) => values,
            Self::MirrorRequest => &[],
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
