//! Endpoint target extraction.
//!
//! Classifies a target reference as either a mail recipient (mailto scheme)
//! or a generic URI host, and extracts the part that drives address
//! resolution. The extracted string doubles as the user-facing label for
//! the lookup result.

use url::Url;

use crate::error_handling::LookupError;

/// What a target reference resolves through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EndpointTarget {
    /// A mail domain, resolved via its mail-exchange record.
    MailDomain(String),
    /// A URI host, resolved via standard address resolution.
    Host(String),
}

/// Extracts the resolvable target from a URI-like reference.
///
/// Mailto references yield the recipient's domain (the substring after the
/// first `@` of the recipient field); anything else yields the URI host.
pub(crate) fn extract_target(reference: &str) -> Result<EndpointTarget, LookupError> {
    if is_mailto(reference) {
        let uri = Url::parse(reference)
            .map_err(|_| LookupError::AddressFormat(reference.to_string()))?;
        let recipient = uri.path();
        let domain = match recipient.split_once('@') {
            Some((_, domain)) if !domain.is_empty() => domain,
            _ => return Err(LookupError::HostResolution(reference.to_string())),
        };
        Ok(EndpointTarget::MailDomain(domain.to_string()))
    } else {
        let host = Url::parse(reference)
            .ok()
            .and_then(|uri| uri.host_str().map(str::to_string))
            .ok_or_else(|| LookupError::HostResolution(reference.to_string()))?;
        Ok(EndpointTarget::Host(host))
    }
}

fn is_mailto(reference: &str) -> bool {
    reference
        .trim_start()
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("mailto:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_extracts_recipient_domain() {
        let target = extract_target("mailto:user@example.com").unwrap();
        assert_eq!(target, EndpointTarget::MailDomain("example.com".to_string()));
    }

    #[test]
    fn test_mailto_scheme_is_case_insensitive() {
        let target = extract_target("MAILTO:user@example.com").unwrap();
        assert_eq!(target, EndpointTarget::MailDomain("example.com".to_string()));
    }

    #[test]
    fn test_mailto_query_is_not_part_of_the_domain() {
        let target = extract_target("mailto:user@example.com?subject=hello").unwrap();
        assert_eq!(target, EndpointTarget::MailDomain("example.com".to_string()));
    }

    #[test]
    fn test_mailto_domain_starts_after_first_at() {
        // Odd but faithful: everything after the first '@' of the recipient field
        let target = extract_target("mailto:a@b@c").unwrap();
        assert_eq!(target, EndpointTarget::MailDomain("b@c".to_string()));
    }

    #[test]
    fn test_mailto_without_at_is_a_host_resolution_error() {
        let result = extract_target("mailto:not-an-address");
        assert!(matches!(result, Err(LookupError::HostResolution(_))));
    }

    #[test]
    fn test_empty_mailto_is_a_host_resolution_error() {
        let result = extract_target("mailto:");
        assert!(matches!(result, Err(LookupError::HostResolution(_))));
    }

    #[test]
    fn test_generic_uri_extracts_host() {
        let target = extract_target("https://example.com/page?x=1").unwrap();
        assert_eq!(target, EndpointTarget::Host("example.com".to_string()));
    }

    #[test]
    fn test_generic_uri_with_ip_literal_host() {
        let target = extract_target("http://192.0.2.10:8080/").unwrap();
        assert_eq!(target, EndpointTarget::Host("192.0.2.10".to_string()));
    }

    #[test]
    fn test_uri_without_host_is_a_host_resolution_error() {
        let result = extract_target("data:text/plain,hello");
        assert!(matches!(result, Err(LookupError::HostResolution(_))));
    }

    #[test]
    fn test_unparseable_reference_is_a_host_resolution_error() {
        let result = extract_target("not a uri at all");
        assert!(matches!(result, Err(LookupError::HostResolution(_))));
    }
}
