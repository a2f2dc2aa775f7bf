//! Tests for log filter defaults and subscriber installation

#[cfg(test)]
mod tests {
    use puzzgen::PuzzleError;
    use puzzgen::io::logging::{init_logging, log_filter};

    // Tests a filter is always produced
    // Verified by panicking on a missing RUST_LOG
    #[test]
    fn test_log_filter_builds() {
        let filter = log_filter().to_string();
        assert!(!filter.is_empty());
    }

    // Tests a second global subscriber is refused
    // Verified by ignoring try_init failures
    #[test]
    fn test_second_init_fails() {
        let _ = init_logging(true);
        assert!(matches!(
            init_logging(true),
            Err(PuzzleError::InvalidParameter { parameter: "logging", .. })
        ));
    }
}
