//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `dino-runner 0.1.0 (2026-10-19 abc1234)`
pub fn version_line() -> String {
    format!(
        "dino-runner {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        // Short hash or the fallback
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() >= 7);
    }

    #[test]
    fn test_version_line() {
        let line = version_line();
        assert!(line.starts_with("dino-runner "));
        assert!(line.contains(BUILD_COMMIT));
    }
}
