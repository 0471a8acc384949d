//! Shared networking constants and helpers used by client and server.

/// TCP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Path of the quote endpoint.
pub const QUOTE_PATH: &str = "/cotacao";

/// Helper to format an address with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Full URL of the quote endpoint on `host:port`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_PATH)
}
