//! Custom assertion macros
//!
//! Clearer failure output than a bare `unwrap` in async test bodies.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a response carries `Cache-Control: no-cache`
#[macro_export]
macro_rules! assert_no_cache {
    ($response:expr) => {
        assert_eq!(
            $response
                .headers()
                .get(axum::http::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-cache"),
            "response must not be cacheable"
        );
    };
}
