pub const NAME: &str = "hubspot";
pub const BASE_URL: &str = "https://api.hubapi.com";

pub const CONTACTS_PATH: &str = "/crm/v3/objects/contacts";
pub const CONTACTS_SEARCH_PATH: &str = "/crm/v3/objects/contacts/search";
pub const DEALS_PATH: &str = "/crm/v3/objects/deals";

pub const CONTACT_PROPERTIES: &[&str] = &["email", "firstname", "lastname", "company"];
pub const DEAL_PROPERTIES: &[&str] = &["dealname", "amount", "dealstage", "closedate"];

/// Filter operator used for every `key:value` search token.
pub const SEARCH_OPERATOR: &str = "CONTAINS_TOKEN";

/// Pipeline stage for deals created without one.
pub const DEFAULT_DEAL_STAGE: &str = "appointmentscheduled";

/// Amount reported for deals that have none.
pub const DEFAULT_DEAL_AMOUNT: &str = "0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(BASE_URL, "https://api.hubapi.com");
        assert_eq!(CONTACT_PROPERTIES.join(","), "email,firstname,lastname,company");
        assert_eq!(DEAL_PROPERTIES.join(","), "dealname,amount,dealstage,closedate");
        assert_eq!(DEFAULT_DEAL_STAGE, "appointmentscheduled");
    }
}
