mod catalog;
mod cli;
mod clipboard;
mod config;
mod db;
mod error;
mod image;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aidex", version, about = "Local catalog for AI tools — categories, tags, and API keys")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize the database and seed default categories/tags
    Init {
        /// Also insert the bundled sample websites (development data)
        #[arg(long)]
        with_samples: bool,
    },
    /// Add a website to the catalog
    Add {
        /// Display name
        name: String,
        /// Website URL (http or https)
        url: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Category id (repeatable)
        #[arg(long = "category", value_name = "ID")]
        categories: Vec<i64>,
        /// Tag id (repeatable)
        #[arg(long = "tag", value_name = "ID")]
        tags: Vec<i64>,
        /// Icon image file
        #[arg(long, value_name = "FILE")]
        icon: Option<PathBuf>,
        /// API key for this service (repeatable)
        #[arg(long = "api-key", value_name = "KEY")]
        api_keys: Vec<String>,
    },
    /// List websites, optionally filtered
    List {
        /// Only websites in this category
        #[arg(long, value_name = "ID")]
        category: Option<i64>,
        /// Only websites carrying this tag (repeatable; all must match)
        #[arg(long = "tag", value_name = "ID")]
        tags: Vec<i64>,
        /// Substring match over name, description, and URL
        #[arg(long)]
        search: Option<String>,
    },
    /// Show full details for one website
    Show {
        id: i64,
        /// Materialize the stored icon as a viewable file
        #[arg(long)]
        icon: bool,
    },
    /// Update fields of an existing website
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Replacement category ids (repeatable; replaces the whole list)
        #[arg(long = "category", value_name = "ID")]
        categories: Option<Vec<i64>>,
        /// Replacement tag ids (repeatable; replaces the whole list)
        #[arg(long = "tag", value_name = "ID")]
        tags: Option<Vec<i64>>,
        /// Replacement icon image file
        #[arg(long, value_name = "FILE")]
        icon: Option<PathBuf>,
        /// Replacement API keys (repeatable; replaces the whole list)
        #[arg(long = "api-key", value_name = "KEY")]
        api_keys: Option<Vec<String>>,
    },
    /// Remove a website
    Remove { id: i64 },
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage tags
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },
    /// Copy one of a website's API keys to the clipboard
    CopyKey {
        id: i64,
        /// Which key, by position
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Delete all catalog data (asks for confirmation)
    Reset,
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List all categories
    List,
    /// Add a category
    Add {
        name: String,
        #[arg(long, default_value = "")]
        icon_name: String,
    },
    /// Rename a category
    Rename { id: i64, name: String },
    /// Remove a category (websites keep their existing references)
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum TagAction {
    /// List all tags with usage counts
    List,
    /// Add a tag
    Add { name: String },
    /// Rename a tag
    Rename { id: i64, name: String },
    /// Remove a tag (websites keep their existing references)
    Remove { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Load config (for db path and log level)
    let config = config::AidexConfig::load()?;

    // Initialize tracing with the configured log level, writing to stderr so
    // stdout stays clean for command output.
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Init { with_samples } => cli::init::init(&config, with_samples)?,
        Command::Add {
            name,
            url,
            description,
            categories,
            tags,
            icon,
            api_keys,
        } => {
            cli::add::add(
                &config,
                &name,
                &url,
                &description,
                &categories,
                &tags,
                icon.as_deref(),
                &api_keys,
            )
            .await?
        }
        Command::List {
            category,
            tags,
            search,
        } => cli::list::list(&config, category, &tags, search.as_deref())?,
        Command::Show { id, icon } => cli::show::show(&config, id, icon)?,
        Command::Update {
            id,
            name,
            url,
            description,
            categories,
            tags,
            icon,
            api_keys,
        } => {
            cli::update::update(
                &config,
                id,
                name,
                url,
                description,
                categories,
                tags,
                icon.as_deref(),
                api_keys,
            )
            .await?
        }
        Command::Remove { id } => cli::remove::remove(&config, id)?,
        Command::Category { action } => match action {
            CategoryAction::List => cli::category::list(&config)?,
            CategoryAction::Add { name, icon_name } => {
                cli::category::add(&config, &name, &icon_name)?
            }
            CategoryAction::Rename { id, name } => cli::category::rename(&config, id, &name)?,
            CategoryAction::Remove { id } => cli::category::remove(&config, id)?,
        },
        Command::Tag { action } => match action {
            TagAction::List => cli::tag::list(&config)?,
            TagAction::Add { name } => cli::tag::add(&config, &name)?,
            TagAction::Rename { id, name } => cli::tag::rename(&config, id, &name)?,
            TagAction::Remove { id } => cli::tag::remove(&config, id)?,
        },
        Command::CopyKey { id, index } => cli::copy_key::copy_key(&config, id, index)?,
        Command::Reset => cli::reset::reset(&config)?,
    }

    Ok(())
}
