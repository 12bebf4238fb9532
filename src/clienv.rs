//! Environment-provided host application configuration.

/// Locales the host application makes available ($RODAUTH_LOCALES).
pub const ENV_LOCALES: &str = "RODAUTH_LOCALES";

/// Locale codes configured by the host application, comma-separated in
/// $RODAUTH_LOCALES. `None` when the variable is unset, which is distinct
/// from an empty list.
pub fn available_locales() -> Option<Vec<String>> {
    let raw = std::env::var(ENV_LOCALES).ok()?;
    let locales: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect();
    tracing::trace!(locales = ?locales, "RODAUTH_LOCALES env var");
    Some(locales)
}
