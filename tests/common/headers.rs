use simple_cors_rs::HttpContext;

pub fn header_value<'a>(ctx: &'a HttpContext, name: &str) -> Option<&'a str> {
    ctx.response_header(name)
}

pub fn header_values(ctx: &HttpContext, name: &str) -> Vec<String> {
    ctx.response_headers
        .as_ref()
        .and_then(|headers| headers.get(name))
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}

pub fn has_header(ctx: &HttpContext, name: &str) -> bool {
    header_value(ctx, name).is_some()
}

pub fn header_names(ctx: &HttpContext) -> Vec<String> {
    ctx.response_headers
        .as_ref()
        .map(|headers| headers.iter().map(|(name, _)| name.to_string()).collect())
        .unwrap_or_default()
}
