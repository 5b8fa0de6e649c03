use simple_cors_rs::constants::header;
use simple_cors_rs::{Cors, CorsBuilder, HttpContext, Origin};

pub const HOST_VALUE: &str = "https://cors.com";

pub struct RequestBuilder {
    ctx: HttpContext,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            ctx: HttpContext::new().with_request_header(header::HOST, HOST_VALUE),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.ctx.request_headers_mut().append(name, value);
        self
    }

    pub fn origin(self, origin: &str) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_methods(self, methods: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHODS, methods)
    }

    pub fn request_method(self, method: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    pub fn request_header(self, name: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADER, name)
    }

    /// Drops both header maps, as a host that never populated them would.
    pub fn bare(mut self) -> Self {
        self.ctx.request_headers = None;
        self.ctx.response_headers = None;
        self
    }

    pub fn into_context(self) -> HttpContext {
        self.ctx
    }

    pub fn run(self, cors: &Cors) -> HttpContext {
        cors.handle(self.ctx, |ctx| ctx)
    }
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}

pub fn wildcard() -> CorsBuilder {
    CorsBuilder::wildcard()
}

pub fn exact(origin: &str) -> CorsBuilder {
    CorsBuilder::new(Origin::exact(origin))
}

pub fn build(builder: CorsBuilder) -> Cors {
    builder.build().expect("valid CORS configuration")
}
