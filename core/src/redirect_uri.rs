use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RedirectUriError {
    #[error("Stored redirect uri is not a valid url")]
    Stored(#[source] url::ParseError),
    #[error("Presented redirect uri is not a valid url")]
    Presented(#[source] url::ParseError),
    #[error("Redirect uri scheme mismatch")]
    SchemeMismatch,
    #[error("Redirect uri host mismatch")]
    HostMismatch,
    #[error("Redirect uri path mismatch")]
    PathMismatch,
}

/// Checks a redirect uri presented at redemption against the one the code was
/// issued for.
///
/// Only scheme, host (with explicit port) and path have to agree, query and
/// fragment are ignored. Components are compared after WHATWG normalisation,
/// so dot segments are resolved and scheme and host are lowercased.
pub fn validate_redirect_uri(stored: &str, presented: &str) -> Result<(), RedirectUriError> {
    let presented = Url::parse(presented).map_err(RedirectUriError::Presented)?;
    let stored = Url::parse(stored).map_err(RedirectUriError::Stored)?;

    if presented.scheme() != stored.scheme() {
        return Err(RedirectUriError::SchemeMismatch);
    }
    if presented.host_str() != stored.host_str() || presented.port() != stored.port() {
        return Err(RedirectUriError::HostMismatch);
    }
    if presented.path() != stored.path() {
        return Err(RedirectUriError::PathMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORED: &str = "https://app.example.com/cb";

    #[test]
    fn test_accepts_identical_uri() {
        assert_eq!(Ok(()), validate_redirect_uri(STORED, STORED));
    }

    #[test]
    fn test_ignores_query_and_fragment() {
        assert_eq!(
            Ok(()),
            validate_redirect_uri(STORED, "https://app.example.com/cb?state=xyz")
        );
        assert_eq!(
            Ok(()),
            validate_redirect_uri(STORED, "https://app.example.com/cb#section")
        );
        assert_eq!(
            Ok(()),
            validate_redirect_uri("https://app.example.com/cb?a=1", STORED)
        );
    }

    #[test]
    fn test_rejects_scheme_mismatch() {
        assert_eq!(
            Err(RedirectUriError::SchemeMismatch),
            validate_redirect_uri(STORED, "http://app.example.com/cb")
        );
    }

    #[test]
    fn test_rejects_host_mismatch() {
        assert_eq!(
            Err(RedirectUriError::HostMismatch),
            validate_redirect_uri(STORED, "https://other.example.com/cb")
        );
        assert_eq!(
            Err(RedirectUriError::HostMismatch),
            validate_redirect_uri(STORED, "https://app.example.com:8443/cb")
        );
    }

    #[test]
    fn test_rejects_path_mismatch() {
        assert_eq!(
            Err(RedirectUriError::PathMismatch),
            validate_redirect_uri(STORED, "https://app.example.com/cb2")
        );
    }

    #[test]
    fn test_compares_normalised_components() {
        assert_eq!(
            Ok(()),
            validate_redirect_uri(STORED, "https://app.example.com/x/../cb")
        );
        assert_eq!(
            Ok(()),
            validate_redirect_uri(STORED, "HTTPS://APP.EXAMPLE.COM/cb")
        );
        assert_eq!(
            Ok(()),
            validate_redirect_uri(STORED, "https://app.example.com:443/cb")
        );
        assert_eq!(
            Err(RedirectUriError::PathMismatch),
            validate_redirect_uri(STORED, "https://app.example.com/CB")
        );
    }

    #[test]
    fn test_rejects_unparseable_uris() {
        assert!(matches!(
            validate_redirect_uri(STORED, "not a url"),
            Err(RedirectUriError::Presented(_))
        ));
        assert!(matches!(
            validate_redirect_uri(STORED, ""),
            Err(RedirectUriError::Presented(_))
        ));
        assert!(matches!(
            validate_redirect_uri("/relative/cb", STORED),
            Err(RedirectUriError::Stored(_))
        ));
    }
}
