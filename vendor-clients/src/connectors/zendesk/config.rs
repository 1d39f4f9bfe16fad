use saaswire::credentials::{CredentialSet, SUBDOMAIN};
use saaswire::Result;

pub const NAME: &str = "zendesk";

pub const TICKETS_PATH: &str = "/tickets.json";
pub const SEARCH_PATH: &str = "/search.json";
pub const CURRENT_USER_PATH: &str = "/users/me.json";

/// `https://<subdomain>.zendesk.com/api/v2`
pub fn base_url(subdomain: &str) -> String {
    format!("https://{}.zendesk.com/api/v2", subdomain)
}

/// Base URL derived from the `subdomain` credential.
pub fn base_url_from(credentials: &CredentialSet) -> Result<String> {
    Ok(base_url(credentials.require(SUBDOMAIN)?))
}

/// `/tickets/<id>.json`
pub fn ticket_path(id: u64) -> String {
    format!("/tickets/{}.json", id)
}

/// Search expression for tickets in one status.
pub fn status_query(status: &str) -> String {
    format!("type:ticket status:{}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("acme"), "https://acme.zendesk.com/api/v2");
    }

    #[test]
    fn test_base_url_requires_subdomain() {
        assert!(base_url_from(&CredentialSet::new()).is_err());
        assert_eq!(
            base_url_from(&CredentialSet::new().with(SUBDOMAIN, "acme")).unwrap(),
            "https://acme.zendesk.com/api/v2"
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(ticket_path(42), "/tickets/42.json");
        assert_eq!(status_query("open"), "type:ticket status:open");
    }
}
