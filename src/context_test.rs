use super::*;
use crate::constants::header;

mod new {
    use super::*;

    #[test]
    fn should_create_empty_maps_when_called() {
        // Arrange & Act
        let ctx = HttpContext::new();

        // Assert
        assert_eq!(ctx.request_headers, Some(Headers::new()));
        assert_eq!(ctx.response_headers, Some(Headers::new()));
        assert!(ctx.status.is_none());
    }

    #[test]
    fn should_leave_maps_missing_given_default() {
        // Arrange & Act
        let ctx = HttpContext::default();

        // Assert
        assert!(ctx.request_headers.is_none());
        assert!(ctx.response_headers.is_none());
    }
}

mod request_header {
    use super::*;

    #[test]
    fn should_return_first_value_given_header_repeated() {
        // Arrange
        let ctx = HttpContext::new()
            .with_request_header(header::HOST, "https://cors.com")
            .with_request_header(header::HOST, "https://other.com");

        // Act
        let value = ctx.request_header(header::HOST);

        // Assert
        assert_eq!(value, Some("https://cors.com"));
    }

    #[test]
    fn should_return_none_given_request_map_missing() {
        // Arrange
        let ctx = HttpContext::default();

        // Act & Assert
        assert!(ctx.request_header(header::HOST).is_none());
    }
}

mod response_headers_mut {
    use super::*;

    #[test]
    fn should_create_map_given_it_was_missing() {
        // Arrange
        let mut ctx = HttpContext::default();

        // Act
        ctx.response_headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

        // Assert
        assert_eq!(ctx.response_header(header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
    }

    #[test]
    fn should_reuse_existing_map_given_it_has_entries() {
        // Arrange
        let mut ctx = HttpContext::new();
        ctx.response_headers_mut().insert("X-Existing", "1");

        // Act
        ctx.response_headers_mut().insert("X-Added", "2");

        // Assert
        let headers = ctx.response_headers.as_ref().map(Headers::len);
        assert_eq!(headers, Some(2));
    }
}

mod stop {
    use super::*;

    #[test]
    fn should_set_status_and_return_completed_given_code() {
        // Arrange
        let mut ctx = HttpContext::new();

        // Act
        let completed = ctx.stop(204);

        // Assert
        assert_eq!(completed, Completed { status: 204 });
        assert_eq!(ctx.status, Some(204));
    }
}
