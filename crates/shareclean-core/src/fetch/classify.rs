//! Classify curl errors into fetch error kinds.

use std::time::Duration;

use super::FetchError;

/// Maps a failed `perform()` into a [`FetchError`].
///
/// `timeout` and `max_redirects` are the limits the handle was configured with,
/// so the error can report them.
pub fn classify_curl_error(e: curl::Error, timeout: Duration, max_redirects: u32) -> FetchError {
    if e.is_operation_timedout() {
        return FetchError::Timeout(timeout);
    }
    if e.is_too_many_redirects() {
        return FetchError::TooManyRedirects(max_redirects);
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_ssl_connect_error()
    {
        return FetchError::Connection(e);
    }
    FetchError::Curl(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    // curl_sys codes: 7 = COULDNT_CONNECT, 28 = OPERATION_TIMEDOUT, 47 = TOO_MANY_REDIRECTS.

    #[test]
    fn timeout_reports_configured_limit() {
        let err = classify_curl_error(curl::Error::new(28), Duration::from_secs(10), 10);
        assert!(matches!(err, FetchError::Timeout(d) if d == Duration::from_secs(10)));
    }

    #[test]
    fn too_many_redirects() {
        let err = classify_curl_error(curl::Error::new(47), Duration::from_secs(10), 3);
        assert!(matches!(err, FetchError::TooManyRedirects(3)));
    }

    #[test]
    fn connection_failures() {
        let err = classify_curl_error(curl::Error::new(7), Duration::from_secs(10), 10);
        assert!(matches!(err, FetchError::Connection(_)));
    }

    #[test]
    fn other_errors_pass_through() {
        // 3 = URL_MALFORMAT
        let err = classify_curl_error(curl::Error::new(3), Duration::from_secs(10), 10);
        assert!(matches!(err, FetchError::Curl(_)));
    }
}
