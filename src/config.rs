//! Build-Time Configuration

/// Fallback when no backend address is compiled in.
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Base URL of the crisis-matcher REST API.
///
/// Taken from the `CRISIS_API_URL` environment variable at build time;
/// a browser client has no process environment to read at runtime.
pub fn api_base_url() -> &'static str {
    option_env!("CRISIS_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        // Facade paths all start with '/', so the base must not end with one.
        assert!(!api_base_url().ends_with('/'));
    }
}
