use crate::context::HttpContext;
use crate::headers::Headers;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::request::Parts;
use http::StatusCode;
use tracing::debug;

impl HttpContext {
    /// Builds a context from the request half of an `http` request.
    pub fn from_request_parts(parts: &Parts) -> Self {
        Self::from_header_map(&parts.headers)
    }

    /// Copies every UTF-8 header value; values that are not valid text are skipped.
    pub fn from_header_map(map: &HeaderMap) -> Self {
        let mut request = Headers::with_capacity(map.keys_len());
        for (name, value) in map.iter() {
            match value.to_str() {
                Ok(text) => request.append(name.as_str(), text),
                Err(_) => debug!(header = name.as_str(), "skipping non UTF-8 request header"),
            }
        }

        Self {
            request_headers: Some(request),
            response_headers: Some(Headers::new()),
            status: None,
        }
    }

    /// Copies the response headers into `map`, replacing any values already stored
    /// under the same names.
    pub fn write_response_headers(&self, map: &mut HeaderMap) {
        let Some(response) = &self.response_headers else {
            return;
        };

        for (name, values) in response.iter() {
            let Ok(header_name) = HeaderName::try_from(name) else {
                debug!(header = name, "skipping response header with invalid name");
                continue;
            };

            map.remove(&header_name);
            for value in values {
                match HeaderValue::from_str(value) {
                    Ok(header_value) => {
                        map.append(header_name.clone(), header_value);
                    }
                    Err(_) => debug!(header = name, "skipping invalid response header value"),
                }
            }
        }
    }

    /// The recorded status as an `http` status code, when it is a valid one.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status
            .and_then(|status| StatusCode::from_u16(status).ok())
    }
}

#[cfg(test)]
#[path = "http_adapter_test.rs"]
mod http_adapter_test;
