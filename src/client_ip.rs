use axum::http::HeaderMap;

/// Identifier used when no proxy header names the client.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Headers consulted after `x-forwarded-for`, in priority order.
const SINGLE_ADDRESS_HEADERS: &[&str] = &["x-real-ip", "cf-connecting-ip"];

/// Resolve the rate-limit key for a request from proxy headers.
///
/// Order: first entry of `x-forwarded-for`, then `x-real-ip`, then
/// `cf-connecting-ip`, then [`UNKNOWN_CLIENT`]. These headers are set by
/// whatever sits in front of the service and are not authenticated.
pub fn resolve_client_identifier(headers: &HeaderMap) -> String {
    if let Some(forwarded) = header_value(headers, "x-forwarded-for") {
        let first = forwarded.split(',').next().unwrap_or_default();
        return first.trim().to_string();
    }

    SINGLE_ADDRESS_HEADERS
        .iter()
        .find_map(|name| header_value(headers, name))
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Non-empty, valid-UTF-8 header value.
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_forwarded_for_first_entry_wins() {
        let map = headers(&[
            ("x-forwarded-for", " 203.0.113.7 , 10.0.0.1, 10.0.0.2"),
            ("x-real-ip", "198.51.100.1"),
        ]);
        assert_eq!(resolve_client_identifier(&map), "203.0.113.7");
    }

    #[test]
    fn test_real_ip_used_without_forwarded_for() {
        let map = headers(&[
            ("x-real-ip", "198.51.100.1"),
            ("cf-connecting-ip", "192.0.2.9"),
        ]);
        assert_eq!(resolve_client_identifier(&map), "198.51.100.1");
    }

    #[test]
    fn test_cloudflare_header_is_last_resort() {
        let map = headers(&[("cf-connecting-ip", "192.0.2.9")]);
        assert_eq!(resolve_client_identifier(&map), "192.0.2.9");
    }

    #[test]
    fn test_unknown_without_headers() {
        assert_eq!(resolve_client_identifier(&HeaderMap::new()), UNKNOWN_CLIENT);
    }

    #[test]
    fn test_empty_header_is_skipped() {
        let map = headers(&[("x-forwarded-for", ""), ("x-real-ip", "198.51.100.1")]);
        assert_eq!(resolve_client_identifier(&map), "198.51.100.1");
    }

    #[test]
    fn test_non_utf8_header_is_skipped() {
        let mut map = HeaderMap::new();
        map.insert(
            "x-forwarded-for",
            HeaderValue::from_bytes(b"\xFF\xFE").expect("opaque header value"),
        );
        map.insert("cf-connecting-ip", HeaderValue::from_static("192.0.2.9"));
        assert_eq!(resolve_client_identifier(&map), "192.0.2.9");
    }
}
