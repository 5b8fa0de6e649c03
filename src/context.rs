use crate::headers::Headers;

/// Per-request state handed to the CORS handler by the hosting pipeline.
///
/// Either header map may be missing; the handler reads a missing request map as
/// "no such header" and creates the response map on first write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpContext {
    pub request_headers: Option<Headers>,
    pub response_headers: Option<Headers>,
    pub status: Option<u16>,
}

/// Signal returned by [`HttpContext::stop`] once a pipeline has been cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completed {
    pub status: u16,
}

impl HttpContext {
    /// A context with empty request and response header maps.
    pub fn new() -> Self {
        Self {
            request_headers: Some(Headers::new()),
            response_headers: Some(Headers::new()),
            status: None,
        }
    }

    pub fn with_request_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.request_headers_mut().append(name, value);
        self
    }

    pub fn request_header(&self, name: &str) -> Option<&str> {
        self.request_headers
            .as_ref()
            .and_then(|headers| headers.get_first(name))
    }

    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .as_ref()
            .and_then(|headers| headers.get_first(name))
    }

    pub fn request_headers_mut(&mut self) -> &mut Headers {
        self.request_headers.get_or_insert_with(Headers::new)
    }

    pub fn response_headers_mut(&mut self) -> &mut Headers {
        self.response_headers.get_or_insert_with(Headers::new)
    }

    /// Records `status` and returns a completed signal without running any later stage.
    pub fn stop(&mut self, status: u16) -> Completed {
        self.status = Some(status);
        Completed { status }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
