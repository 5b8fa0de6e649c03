use crate::constants::{header, value};
use crate::headers::Headers;
use crate::options::CorsOptions;
use tracing::trace;

/// Writes the response headers one policy rule at a time.
pub(crate) struct HeaderWriter<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderWriter<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn write_all(&self, request: Option<&Headers>, response: &mut Headers) {
        self.write_origin_header(response);
        self.write_credentials_header(response);
        self.write_methods_header(request, response);
        self.write_allowed_headers(request, response);
        self.write_exposed_headers(response);
        self.write_max_age_header(response);
    }

    pub(crate) fn write_origin_header(&self, response: &mut Headers) {
        response.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.options.origin.header_value(),
        );
    }

    pub(crate) fn write_credentials_header(&self, response: &mut Headers) {
        if self.options.credentials {
            response.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, value::TRUE);
        }
    }

    pub(crate) fn write_methods_header(&self, request: Option<&Headers>, response: &mut Headers) {
        let Some(methods) = &self.options.methods else {
            return;
        };

        match methods.header_values(request) {
            Some(values) => response.insert_values(header::ACCESS_CONTROL_ALLOW_METHODS, values),
            None => trace!(
                header = header::ACCESS_CONTROL_ALLOW_METHODS,
                "no value to write, header omitted"
            ),
        }
    }

    pub(crate) fn write_allowed_headers(&self, request: Option<&Headers>, response: &mut Headers) {
        let Some(allowed) = &self.options.allowed_headers else {
            return;
        };

        match allowed.header_values(request) {
            Some(values) => response.insert_values(header::ACCESS_CONTROL_ALLOW_HEADERS, values),
            None => trace!(
                header = header::ACCESS_CONTROL_ALLOW_HEADERS,
                "no value to write, header omitted"
            ),
        }
    }

    pub(crate) fn write_exposed_headers(&self, response: &mut Headers) {
        if let Some(value) = self
            .options
            .exposed_headers
            .as_ref()
            .and_then(|exposed| exposed.header_value())
        {
            response.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }

    pub(crate) fn write_max_age_header(&self, response: &mut Headers) {
        if let Some(max_age) = &self.options.max_age {
            response.insert(header::ACCESS_CONTROL_MAX_AGE, max_age.header_value());
        }
    }
}

#[cfg(test)]
#[path = "header_writer_test.rs"]
mod header_writer_test;
