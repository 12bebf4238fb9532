use crate::error::{Result, TranslationsError};

/// Locales to process: the explicit request when given (order preserved,
/// duplicates kept), otherwise everything the host application has
/// configured.
pub fn resolve(requested: Vec<String>, available: Option<Vec<String>>) -> Result<Vec<String>> {
    if !requested.is_empty() {
        tracing::trace!(locales = ?requested, "Locales from arguments");
        return Ok(requested);
    }
    match available {
        Some(locales) if !locales.is_empty() => {
            tracing::trace!(locales = ?locales, "Locales from host configuration");
            Ok(locales)
        }
        _ => Err(TranslationsError::NoLocalesAvailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_explicit_locales_returned_verbatim() {
        let resolved = resolve(strings(&["pt", "en", "pt"]), Some(strings(&["en"]))).unwrap();
        assert_eq!(resolved, strings(&["pt", "en", "pt"]));
    }

    #[test]
    fn test_falls_back_to_available_locales() {
        let resolved = resolve(vec![], Some(strings(&["en", "hr"]))).unwrap();
        assert_eq!(resolved, strings(&["en", "hr"]));
    }

    #[test]
    fn test_no_available_locales_is_an_error() {
        let err = resolve(vec![], None).unwrap_err();
        assert!(matches!(err, TranslationsError::NoLocalesAvailable));
        assert_eq!(err.to_string(), "No locales specified!");
    }

    #[test]
    fn test_empty_available_list_is_an_error() {
        let err = resolve(vec![], Some(vec![])).unwrap_err();
        assert!(matches!(err, TranslationsError::NoLocalesAvailable));
    }
}
