use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::config::{CONTACT_PROPERTIES, DEFAULT_DEAL_AMOUNT, SEARCH_OPERATOR};

/// Contact properties as returned by the CRM API. Any of them may be null.
#[derive(Debug, Default, Deserialize)]
pub struct ContactProperties {
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub company: Option<String>,
}

/// CRM contact object.
#[derive(Debug, Deserialize)]
pub struct ContactObject {
    pub id: String,
    #[serde(default)]
    pub properties: ContactProperties,
}

/// Deal properties as returned by the CRM API.
#[derive(Debug, Default, Deserialize)]
pub struct DealProperties {
    pub dealname: Option<String>,
    pub amount: Option<String>,
    pub dealstage: Option<String>,
    pub closedate: Option<String>,
}

/// CRM deal object.
#[derive(Debug, Deserialize)]
pub struct DealObject {
    pub id: String,
    #[serde(default)]
    pub properties: DealProperties,
}

/// One page of a list or search response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub total: Option<u64>,
}

/// Normalized contact. Missing properties are empty strings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contact {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
}

impl From<ContactObject> for Contact {
    fn from(object: ContactObject) -> Self {
        let props = object.properties;
        Self {
            id: object.id,
            email: props.email.unwrap_or_default(),
            first_name: props.firstname.unwrap_or_default(),
            last_name: props.lastname.unwrap_or_default(),
            company: props.company.unwrap_or_default(),
        }
    }
}

/// Normalized deal. A missing amount is `"0"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Deal {
    pub id: String,
    pub name: Option<String>,
    pub amount: String,
    pub stage: Option<String>,
    pub close_date: Option<String>,
}

impl From<DealObject> for Deal {
    fn from(object: DealObject) -> Self {
        let props = object.properties;
        Self {
            id: object.id,
            name: props.dealname,
            amount: props
                .amount
                .unwrap_or_else(|| DEFAULT_DEAL_AMOUNT.to_string()),
            stage: props.dealstage,
            close_date: props.closedate,
        }
    }
}

/// One entry of a search filter group.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub property_name: String,
    pub operator: String,
    pub value: String,
}

/// Parse `key:value` tokens separated by whitespace.
///
/// Splits on the first colon, so `website:https://x` keeps its value intact.
/// Tokens without a colon are dropped; values cannot contain spaces.
pub fn parse_search_query(query: &str) -> Vec<SearchFilter> {
    query
        .split_whitespace()
        .filter_map(|token| token.split_once(':'))
        .map(|(key, value)| SearchFilter {
            property_name: key.to_string(),
            operator: SEARCH_OPERATOR.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Search body: all filters ANDed in one group, or no groups at all.
pub fn search_body(query: &str) -> Value {
    let filters = parse_search_query(query);
    let filter_groups = if filters.is_empty() {
        json!([])
    } else {
        json!([{ "filters": filters }])
    };
    json!({
        "filterGroups": filter_groups,
        "properties": CONTACT_PROPERTIES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_tokens() {
        let filters = parse_search_query("email:john@example.com company:Acme");
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].property_name, "email");
        assert_eq!(filters[0].value, "john@example.com");
        assert_eq!(filters[1].property_name, "company");
        assert_eq!(filters[1].value, "Acme");
        assert!(filters.iter().all(|f| f.operator == "CONTAINS_TOKEN"));
    }

    #[test]
    fn test_tokens_without_colon_are_dropped() {
        let filters = parse_search_query("john email:john@example.com Acme");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].property_name, "email");
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let filters = parse_search_query("website:https://acme.com");
        assert_eq!(filters[0].property_name, "website");
        assert_eq!(filters[0].value, "https://acme.com");
    }

    #[test]
    fn test_search_body_shape() {
        let body = search_body("email:john@example.com company:Acme");
        assert_eq!(
            body,
            json!({
                "filterGroups": [{
                    "filters": [
                        {"propertyName": "email", "operator": "CONTAINS_TOKEN", "value": "john@example.com"},
                        {"propertyName": "company", "operator": "CONTAINS_TOKEN", "value": "Acme"}
                    ]
                }],
                "properties": ["email", "firstname", "lastname", "company"]
            })
        );
    }

    #[test]
    fn test_search_body_without_filters_has_no_groups() {
        let body = search_body("nothing here");
        assert_eq!(body["filterGroups"], json!([]));
    }

    #[test]
    fn test_contact_defaults() {
        let object: ContactObject =
            serde_json::from_value(json!({"id": "51", "properties": {"email": "a@b.c", "firstname": null}}))
                .unwrap();
        let contact = Contact::from(object);
        assert_eq!(contact.email, "a@b.c");
        assert_eq!(contact.first_name, "");
        assert_eq!(contact.company, "");
    }

    #[test]
    fn test_deal_amount_defaults_to_zero() {
        let object: DealObject =
            serde_json::from_value(json!({"id": "9", "properties": {"dealname": "Renewal"}})).unwrap();
        let deal = Deal::from(object);
        assert_eq!(deal.amount, "0");
        assert_eq!(deal.name.as_deref(), Some("Renewal"));
        assert_eq!(deal.stage, None);
    }
}
