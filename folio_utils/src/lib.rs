mod macros;

/// Version string reported by the CLI and sent in the client user agent.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
