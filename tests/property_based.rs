mod common;

use common::builders::{build, exact, request, wildcard};
use common::headers::{header_value, header_values};
use proptest::prelude::*;
use simple_cors_rs::constants::header;

fn subdomain_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,16}").unwrap()
}

fn token_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9-]{0,15}").unwrap()
}

proptest! {
    #[test]
    fn exact_origin_is_written_regardless_of_request_origin(
        configured in subdomain_strategy(),
        requested in subdomain_strategy(),
    ) {
        let configured = format!("https://{}.example.com", configured);
        let requested = format!("https://{}.other.net", requested);
        let cors = build(exact(&configured));

        let ctx = request().origin(&requested).run(&cors);

        prop_assert_eq!(
            header_value(&ctx, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(configured.as_str())
        );
    }

    #[test]
    fn fixed_methods_are_joined_in_configured_order(
        methods in proptest::collection::vec(token_strategy(), 1..8)
    ) {
        let cors = build(wildcard().allow_methods(methods.clone()));

        let ctx = request().run(&cors);

        let expected = methods.join(", ");
        prop_assert_eq!(
            header_value(&ctx, header::ACCESS_CONTROL_ALLOW_METHODS),
            Some(expected.as_str())
        );
    }

    #[test]
    fn mirrored_headers_echo_any_request_value(value in "[ -~]{1,64}") {
        let cors = build(wildcard().allow_headers(["*"]));

        let ctx = request().request_headers(&value).run(&cors);

        prop_assert_eq!(
            header_values(&ctx, header::ACCESS_CONTROL_ALLOW_HEADERS),
            vec![value.clone()]
        );
    }

    #[test]
    fn max_age_seconds_render_as_plain_integers(seconds in any::<u32>()) {
        let cors = build(wildcard().max_age(u64::from(seconds)));

        let ctx = request().run(&cors);

        let expected = seconds.to_string();
        prop_assert_eq!(
            header_value(&ctx, header::ACCESS_CONTROL_MAX_AGE),
            Some(expected.as_str())
        );
    }
}
