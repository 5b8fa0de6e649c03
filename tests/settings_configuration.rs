#![cfg(feature = "serde")]

mod common;

use common::asserts::{assert_absent, assert_header};
use common::builders::request;
use simple_cors_rs::constants::header;
use simple_cors_rs::{Cors, CorsSettings, ValidationError};

fn cors_from_json(json: &str) -> Result<Cors, ValidationError> {
    let settings: CorsSettings = serde_json::from_str(json).expect("valid settings json");
    Cors::try_from(settings)
}

#[test]
fn settings_file_drives_the_same_headers_as_the_builder() {
    let cors = cors_from_json(
        r#"{
            "allowed_origins": ["https://app.dev"],
            "allow_credentials": true,
            "allowed_methods": ["*"],
            "allowed_headers": ["X-HEADER-1", "X-HEADER-2"],
            "expose_headers": ["X-Total-Count"],
            "max_age_seconds": 86400
        }"#,
    )
    .expect("valid settings");

    let ctx = request().request_methods("DELETE").run(&cors);

    assert_header(&ctx, header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://app.dev");
    assert_header(&ctx, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    assert_header(&ctx, header::ACCESS_CONTROL_ALLOW_METHODS, "DELETE");
    assert_header(
        &ctx,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "X-HEADER-1, X-HEADER-2",
    );
    assert_header(&ctx, header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Total-Count");
    assert_header(&ctx, header::ACCESS_CONTROL_MAX_AGE, "86400");
}

#[test]
fn minimal_wildcard_settings_only_write_origin() {
    let cors = cors_from_json(r#"{ "allowed_origins": ["*"] }"#).expect("valid settings");

    let ctx = request().run(&cors);

    assert_header(&ctx, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    assert_absent(&ctx, header::ACCESS_CONTROL_ALLOW_METHODS);
    assert_absent(&ctx, header::ACCESS_CONTROL_MAX_AGE);
}

#[test]
fn empty_origin_list_is_rejected() {
    let result = cors_from_json(r#"{ "allowed_origins": [] }"#);

    assert!(matches!(result, Err(ValidationError::EmptyOriginList)));
}
