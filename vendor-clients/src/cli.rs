use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vendor_clients::Provider;

#[derive(Parser)]
#[command(name = "saaswire")]
#[command(about = "Command-line access to HubSpot, Zendesk, Google Drive, Shopify and Xero")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Print records as JSON instead of text
    #[arg(long, global = true, help = "Print records as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// HubSpot CRM contacts and deals
    Hubspot {
        #[command(subcommand)]
        command: HubSpotCommand,
    },
    /// Zendesk Support tickets
    Zendesk {
        #[command(subcommand)]
        command: ZendeskCommand,
    },
    /// Google Drive files
    Gdrive {
        #[command(subcommand)]
        command: DriveCommand,
    },
    /// Shopify products and inventory
    Shopify {
        #[command(subcommand)]
        command: ShopifyCommand,
    },
    /// Xero invoices and contacts
    Xero {
        #[command(subcommand)]
        command: XeroCommand,
    },
}

impl Commands {
    pub fn provider(&self) -> Provider {
        match self {
            Commands::Hubspot { .. } => Provider::HubSpot,
            Commands::Zendesk { .. } => Provider::Zendesk,
            Commands::Gdrive { .. } => Provider::GoogleDrive,
            Commands::Shopify { .. } => Provider::Shopify,
            Commands::Xero { .. } => Provider::Xero,
        }
    }
}

#[derive(Subcommand)]
pub enum HubSpotCommand {
    /// Contact operations
    Contacts {
        #[command(subcommand)]
        command: ContactsCommand,
    },
    /// Deal operations
    Deals {
        #[command(subcommand)]
        command: DealsCommand,
    },
    /// Test API connection
    Test,
}

#[derive(Subcommand)]
pub enum ContactsCommand {
    /// List contacts
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Search contacts with `key:value` tokens, e.g. `email:acme company:Acme`
    Search {
        #[arg(long)]
        query: String,
    },
    /// Create a contact
    Create {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        firstname: String,
        #[arg(long, default_value = "")]
        company: String,
    },
}

#[derive(Subcommand)]
pub enum DealsCommand {
    /// List deals
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Create a deal
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: String,
        #[arg(long, help = "Pipeline stage (default: appointmentscheduled)")]
        stage: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ZendeskCommand {
    /// List tickets
    Tickets {
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show one ticket
    Ticket { id: u64 },
    /// Add a public reply to a ticket
    Reply {
        id: u64,
        #[arg(long)]
        message: String,
    },
    /// Test API connection
    Test,
}

/// Ticket states accepted by `zendesk tickets --status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Open,
    Pending,
    Solved,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Open => "open",
            StatusFilter::Pending => "pending",
            StatusFilter::Solved => "solved",
        }
    }
}

#[derive(Subcommand)]
pub enum DriveCommand {
    /// List recently modified files
    List {
        #[arg(long, help = "Folder ID")]
        folder: Option<String>,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Search with a Drive query, e.g. "name contains 'report'"
    Search {
        #[arg(long)]
        query: String,
    },
    /// Show file metadata
    Info { file_id: String },
    /// Test API connection
    Test,
}

#[derive(Subcommand)]
pub enum ShopifyCommand {
    /// List products
    Products {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show inventory levels
    Inventory {
        #[arg(long, help = "Only levels at or below 10 units")]
        low_stock: bool,
    },
    /// Set a variant's available quantity
    Update {
        variant_id: u64,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Test API connection
    Test,
}

#[derive(Subcommand)]
pub enum XeroCommand {
    /// List invoices (first page)
    Invoices,
    /// List contacts (first page)
    Contacts,
    /// Test API connection
    Test,
}
