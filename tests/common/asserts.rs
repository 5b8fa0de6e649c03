use simple_cors_rs::HttpContext;

use super::headers::{has_header, header_value};

pub fn assert_header(ctx: &HttpContext, name: &str, expected: &str) {
    assert_eq!(
        header_value(ctx, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

pub fn assert_absent(ctx: &HttpContext, name: &str) {
    assert!(!has_header(ctx, name), "expected {name} to be omitted");
}
