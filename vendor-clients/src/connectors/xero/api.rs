use serde::{Deserialize, Serialize};

/// Accounting API invoice. Xero uses PascalCase field names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceObject {
    pub invoice_number: Option<String>,
    pub contact: Option<ContactRef>,
    pub total: Option<f64>,
    pub status: Option<String>,
}

/// Contact as embedded in an invoice.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactRef {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceList {
    #[serde(rename = "Invoices", default)]
    pub invoices: Vec<InvoiceObject>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactObject {
    #[serde(rename = "ContactID")]
    pub contact_id: Option<String>,
    pub name: Option<String>,
    pub email_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactList {
    #[serde(rename = "Contacts", default)]
    pub contacts: Vec<ContactObject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganisationObject {
    pub name: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrganisationList {
    #[serde(rename = "Organisations", default)]
    pub organisations: Vec<OrganisationObject>,
}

/// Normalized invoice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Invoice {
    pub number: Option<String>,
    pub contact_name: Option<String>,
    /// 0.0 when the API omits it.
    pub total: f64,
    pub status: Option<String>,
}

impl From<InvoiceObject> for Invoice {
    fn from(object: InvoiceObject) -> Self {
        Self {
            number: object.invoice_number,
            contact_name: object.contact.and_then(|c| c.name),
            total: object.total.unwrap_or(0.0),
            status: object.status,
        }
    }
}

/// Normalized accounting contact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountingContact {
    /// Empty when the API omits it.
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<ContactObject> for AccountingContact {
    fn from(object: ContactObject) -> Self {
        Self {
            id: object.contact_id.unwrap_or_default(),
            name: object.name,
            email: object.email_address,
        }
    }
}
