mod cli;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use saaswire::{EngineError, HttpTransport, Transport};
use tracing::debug;
use vendor_clients::{
    env, Connector, DriveClient, HubSpotClient, Provider, ShopifyClient, XeroClient,
    ZendeskClient,
};

use crate::cli::{
    Cli, Commands, ContactsCommand, DealsCommand, DriveCommand, HubSpotCommand, ShopifyCommand,
    XeroCommand, ZendeskCommand,
};
use crate::output::Printer;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for records
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saaswire=warn,vendor_clients=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    if let Err(err) = run(cli).await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = env::load_config(cli.config.as_deref())?;
    debug!(user_agent = %config.http.user_agent, "Configuration loaded");

    let transport: Arc<dyn Transport> = Arc::new(
        HttpTransport::new(&config.http.user_agent).context("Failed to build HTTP client")?,
    );

    let provider = cli.command.provider();
    let credentials = env::credentials_from_env(provider, &config)?;
    let printer = Printer::new(cli.json);

    match cli.command {
        Commands::Hubspot { command } => {
            let client = HubSpotClient::from_config(credentials, &config, transport)
                .map_err(|e| with_env_hint(provider, e))?;
            run_hubspot(&client, command, printer).await
        }
        Commands::Zendesk { command } => {
            let client = ZendeskClient::from_config(credentials, &config, transport)
                .map_err(|e| with_env_hint(provider, e))?;
            run_zendesk(&client, command, printer).await
        }
        Commands::Gdrive { command } => {
            let client = DriveClient::from_config(credentials, &config, transport)
                .map_err(|e| with_env_hint(provider, e))?;
            run_gdrive(&client, command, printer).await
        }
        Commands::Shopify { command } => {
            let client = ShopifyClient::from_config(credentials, &config, transport)
                .map_err(|e| with_env_hint(provider, e))?;
            run_shopify(&client, command, printer).await
        }
        Commands::Xero { command } => {
            let client = XeroClient::from_config(credentials, &config, transport)
                .map_err(|e| with_env_hint(provider, e))?;
            run_xero(&client, command, printer).await
        }
    }
}

/// Point configuration errors at the environment variables to set.
fn with_env_hint(provider: Provider, err: EngineError) -> anyhow::Error {
    match err {
        EngineError::Configuration(_) => anyhow::Error::new(err)
            .context(format!("Check {}", env::variable_names(provider))),
        other => other.into(),
    }
}

/// `test` command: report what the vendor says about the credentials.
async fn test_connection(client: &dyn Connector, printer: Printer) -> Result<()> {
    let provider: Provider = client.name().parse()?;
    let info = client
        .check_connection()
        .await
        .map_err(|e| anyhow::anyhow!("❌ Connection failed: {}", e))?;
    printer.record(&info, |info| output::connection(provider, info))
}

async fn run_hubspot(client: &HubSpotClient, command: HubSpotCommand, printer: Printer) -> Result<()> {
    match command {
        HubSpotCommand::Contacts { command } => match command {
            ContactsCommand::List { limit } => {
                let contacts = client.list_contacts(limit).await?;
                printer.list(&contacts, None, output::contact_row)
            }
            ContactsCommand::Search { query } => {
                let contacts = client.search_contacts(&query).await?;
                printer.list(&contacts, None, output::contact_search_row)
            }
            ContactsCommand::Create {
                email,
                firstname,
                company,
            } => {
                let contact = client.create_contact(&email, &firstname, &company).await?;
                printer.record(&contact, |c| format!("✅ Created contact: {}", c.id))
            }
        },
        HubSpotCommand::Deals { command } => match command {
            DealsCommand::List { limit } => {
                let deals = client.list_deals(limit).await?;
                printer.list(&deals, None, output::deal_row)
            }
            DealsCommand::Create {
                name,
                amount,
                stage,
            } => {
                let deal = client.create_deal(&name, &amount, stage.as_deref()).await?;
                printer.record(&deal, |d| format!("✅ Created deal: {}", d.id))
            }
        },
        HubSpotCommand::Test => test_connection(client, printer).await,
    }
}

async fn run_zendesk(client: &ZendeskClient, command: ZendeskCommand, printer: Printer) -> Result<()> {
    match command {
        ZendeskCommand::Tickets { status, limit } => {
            let tickets = client
                .list_tickets(status.map(|s| s.as_str()), limit)
                .await?;
            printer.list(&tickets, None, output::ticket_row)
        }
        ZendeskCommand::Ticket { id } => {
            let ticket = client.get_ticket(id).await?;
            printer.record(&ticket, output::ticket_detail)
        }
        ZendeskCommand::Reply { id, message } => {
            client.reply_to_ticket(id, &message).await?;
            println!("✅ Reply added to ticket #{}", id);
            Ok(())
        }
        ZendeskCommand::Test => test_connection(client, printer).await,
    }
}

async fn run_gdrive(client: &DriveClient, command: DriveCommand, printer: Printer) -> Result<()> {
    match command {
        DriveCommand::List { folder, limit } => {
            let files = client.list_files(folder.as_deref(), limit).await?;
            let header = format!("Found {} files:", files.len());
            printer.list(&files, Some(header), output::file_row)
        }
        DriveCommand::Search { query } => {
            let files = client.search_files(&query).await?;
            let header = format!("Search results for: {}", query);
            printer.list(&files, Some(header), output::file_search_row)
        }
        DriveCommand::Info { file_id } => {
            let info = client.get_file_info(&file_id).await?;
            printer.record(&info, output::file_info)
        }
        DriveCommand::Test => test_connection(client, printer).await,
    }
}

async fn run_shopify(client: &ShopifyClient, command: ShopifyCommand, printer: Printer) -> Result<()> {
    match command {
        ShopifyCommand::Products { limit } => {
            let products = client.list_products(limit).await?;
            let header = format!("Found {} products:", products.len());
            printer.list(&products, Some(header), output::product_row)
        }
        ShopifyCommand::Inventory { low_stock } => {
            let levels = client.check_inventory(low_stock).await?;
            printer.list(&levels, Some("Inventory Levels:".to_string()), output::inventory_row)
        }
        ShopifyCommand::Update {
            variant_id,
            quantity,
        } => {
            let update = client.update_inventory(variant_id, quantity).await?;
            printer.record(&update, |u| {
                format!("✅ Updated variant {} to {} units", u.variant_id, u.available)
            })
        }
        ShopifyCommand::Test => test_connection(client, printer).await,
    }
}

async fn run_xero(client: &XeroClient, command: XeroCommand, printer: Printer) -> Result<()> {
    match command {
        XeroCommand::Invoices => {
            let invoices = client.list_invoices().await?;
            let header = format!("Found {} invoices:", invoices.len());
            printer.list_capped(&invoices, Some(header), output::XERO_ROWS, output::invoice_row)
        }
        XeroCommand::Contacts => {
            let contacts = client.list_contacts().await?;
            let header = format!("Found {} contacts:", contacts.len());
            printer.list_capped(
                &contacts,
                Some(header),
                output::XERO_ROWS,
                output::accounting_contact_row,
            )
        }
        XeroCommand::Test => test_connection(client, printer).await,
    }
}
