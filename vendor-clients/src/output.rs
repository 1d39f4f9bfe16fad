//! Text rendering for records printed by the CLI.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use vendor_clients::connectors::gdrive::api::{FileEntry, FileInfo};
use vendor_clients::connectors::hubspot::api::{Contact, Deal};
use vendor_clients::connectors::shopify::api::Product;
use vendor_clients::connectors::shopify::inventory::{InventoryLevel, StockSeverity};
use vendor_clients::connectors::xero::api::{AccountingContact, Invoice};
use vendor_clients::connectors::zendesk::api::{Ticket, TicketStatus};
use vendor_clients::{ConnectionInfo, Provider};

pub const SUBJECT_WIDTH: usize = 50;
pub const DESCRIPTION_WIDTH: usize = 500;
pub const SHORT_ID_WIDTH: usize = 8;
/// Xero text lists show at most this many rows. JSON output is not capped.
pub const XERO_ROWS: usize = 10;

/// Prints records either as text lines or as pretty JSON.
#[derive(Clone, Copy, Debug)]
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// One record: JSON, or the given text.
    pub fn record<T: Serialize>(&self, record: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(record)?);
        } else {
            println!("{}", text(record));
        }
        Ok(())
    }

    /// A list: JSON array, or an optional header then one line per record.
    pub fn list<T: Serialize>(
        &self,
        records: &[T],
        header: Option<String>,
        line: impl Fn(&T) -> String,
    ) -> Result<()> {
        print!("{}", self.render_list(records, header, records.len(), line)?);
        Ok(())
    }

    /// Like [`Printer::list`], but text output stops after `max_rows` lines.
    /// JSON output always carries every record.
    pub fn list_capped<T: Serialize>(
        &self,
        records: &[T],
        header: Option<String>,
        max_rows: usize,
        line: impl Fn(&T) -> String,
    ) -> Result<()> {
        print!("{}", self.render_list(records, header, max_rows, line)?);
        Ok(())
    }

    fn render_list<T: Serialize>(
        &self,
        records: &[T],
        header: Option<String>,
        max_rows: usize,
        line: impl Fn(&T) -> String,
    ) -> Result<String> {
        if self.json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(records)?));
        }
        let mut out = String::new();
        if let Some(header) = header {
            out.push_str(&header);
            out.push_str("\n\n");
        }
        for record in records.iter().take(max_rows) {
            out.push_str(&line(record));
            out.push('\n');
        }
        Ok(out)
    }
}

/// First `max` characters of `s`.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn date(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn date_time(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_default()
}

pub fn connection(provider: Provider, info: &ConnectionInfo) -> String {
    let mut out = format!("✅ {} API connection successful", provider.display_name());
    for (label, value) in &info.details {
        out.push_str(&format!("\n   {}: {}", label, value));
    }
    out
}

pub fn contact_row(contact: &Contact) -> String {
    format!(
        "[{}] {} {} <{}> - {}",
        contact.id,
        contact.first_name,
        contact.last_name,
        non_empty(&contact.email, "no email"),
        non_empty(&contact.company, "N/A")
    )
}

pub fn contact_search_row(contact: &Contact) -> String {
    format!(
        "[{}] {} {} <{}>",
        contact.id, contact.first_name, contact.last_name, contact.email
    )
}

pub fn deal_row(deal: &Deal) -> String {
    format!(
        "[{}] {} - ${} - {}",
        deal.id,
        or(&deal.name, "Untitled"),
        deal.amount,
        or(&deal.stage, "unknown")
    )
}

pub fn status_icon(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "🔴",
        TicketStatus::Pending => "🟡",
        TicketStatus::Solved => "🟢",
        _ => "⚪",
    }
}

pub fn ticket_row(ticket: &Ticket) -> String {
    format!(
        "[{}] {} {}",
        ticket.id,
        status_icon(ticket.status),
        truncate(or(&ticket.subject, "No subject"), SUBJECT_WIDTH)
    )
}

pub fn ticket_detail(ticket: &Ticket) -> String {
    format!(
        "Ticket #{}: {}\nStatus: {} | Priority: {}\nCreated: {}\n\nDescription:\n{}",
        ticket.id,
        or(&ticket.subject, "No subject"),
        ticket.status,
        or(&ticket.priority, "normal"),
        date(ticket.created_at.as_ref()),
        truncate(or(&ticket.description, "No description"), DESCRIPTION_WIDTH)
    )
}

fn file_icon(entry: &FileEntry) -> &'static str {
    if entry.is_folder() {
        "📁"
    } else {
        "📄"
    }
}

pub fn file_row(entry: &FileEntry) -> String {
    let size = entry
        .size_bytes
        .map(|bytes| format!(" ({}KB)", bytes / 1024))
        .unwrap_or_default();
    format!(
        "{} [{}] {}{} - {}",
        file_icon(entry),
        truncate(&entry.id, SHORT_ID_WIDTH),
        or(&entry.name, "Untitled"),
        size,
        date(entry.modified_time.as_ref())
    )
}

pub fn file_search_row(entry: &FileEntry) -> String {
    format!(
        "{} [{}] {}",
        file_icon(entry),
        truncate(&entry.id, SHORT_ID_WIDTH),
        or(&entry.name, "Untitled")
    )
}

pub fn file_info(info: &FileInfo) -> String {
    let entry = &info.entry;
    let mut out = format!(
        "File: {}\nID: {}\nType: {}\nModified: {}",
        or(&entry.name, "Unknown"),
        entry.id,
        entry.mime_type,
        date_time(entry.modified_time.as_ref())
    );
    if let Some(bytes) = entry.size_bytes {
        out.push_str(&format!("\nSize: {} KB", bytes / 1024));
    }
    if let Some(owner) = &info.owner_name {
        out.push_str(&format!("\nOwner: {}", owner));
    }
    if let Some(link) = &info.web_view_link {
        out.push_str(&format!("\nLink: {}", link));
    }
    out
}

pub fn product_row(product: &Product) -> String {
    format!(
        "[{}] {} ({} variants) - {}",
        product.id,
        or(&product.title, "Untitled"),
        product.variant_count,
        product.status
    )
}

pub fn stock_label(severity: StockSeverity) -> &'static str {
    match severity {
        StockSeverity::Critical => "🔴 LOW",
        StockSeverity::Warning => "🟡",
        StockSeverity::Normal => "🟢",
    }
}

pub fn inventory_row(level: &InventoryLevel) -> String {
    format!(
        "{} [{}] {}: {} available",
        stock_label(level.severity),
        or(&level.sku, "N/A"),
        or(&level.product_title, "Unknown"),
        level.available
    )
}

pub fn invoice_row(invoice: &Invoice) -> String {
    format!(
        "[{}] {} - ${:.2} ({})",
        or(&invoice.number, "N/A"),
        or(&invoice.contact_name, "Unknown"),
        invoice.total,
        or(&invoice.status, "Unknown")
    )
}

pub fn accounting_contact_row(contact: &AccountingContact) -> String {
    format!(
        "[{}] {} <{}>",
        truncate(&contact.id, SHORT_ID_WIDTH),
        or(&contact.name, "Unknown"),
        or(&contact.email, "no email")
    )
}
