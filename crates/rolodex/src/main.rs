use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rolodex_config::Config;
use rolodex_ingest::{ingest_avatar, is_image_file};
use rolodex_output::{format_cards, format_table};
use rolodex_pipeline::{run_query, DirectoryQuery};
use rolodex_store::UserStore;
use rolodex_types::{SortKey, ViewMode, MAX_AGE};
use tracing_subscriber::EnvFilter;

const MAIN_HELP: &str = r#"Rolodex is a local user directory. It keeps a list of users in a
size-bounded store on disk, and can filter them by minimum age, sort them by
name or age, and page through the results as cards or as a table.

`rolodex list` renders one page of the directory. `rolodex avatar` attaches
an image from disk to a user; the image is stored inline, so oversized
photos are rejected up front and may be dropped again if the store runs out
of space.

See `rolodex COMMAND --help` for command-specific options."#;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Show one page of the user directory.")]
    List {
        #[arg(
            long,
            default_value = "0",
            help = "Hide users younger than this (0 disables the filter)"
        )]
        min_age: u32,
        #[arg(short = 's', long, help = "Sort by 'name' or 'age'")]
        sort: Option<String>,
        #[arg(short = 'v', long, default_value = "cards", help = "Layout: 'cards' or 'table'")]
        view: String,
        #[arg(short = 'p', long, default_value = "1", help = "Page number")]
        page: usize,
    },

    #[command(about = "Attach an avatar image to a user.")]
    Avatar {
        #[arg(help = "User id")]
        user_id: u64,
        #[arg(help = "Path to an image file (at most 800KB)")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("Failed to load config")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let store = UserStore::open(&data_dir.join("users.lmdb"), config.store.quota_bytes)
        .context("Failed to open user store")?;

    match cli.command {
        Commands::List {
            min_age,
            sort,
            view,
            page,
        } => handle_list(&store, cli.json, min_age, sort.as_deref(), &view, page),
        Commands::Avatar { user_id, file } => handle_avatar(&store, user_id, &file).await,
    }
}

fn handle_list(
    store: &UserStore,
    json: bool,
    min_age: u32,
    sort: Option<&str>,
    view: &str,
    page: usize,
) -> Result<()> {
    let Some(view) = ViewMode::parse(view) else {
        bail!("Unknown view mode: {} (expected 'cards' or 'table')", view);
    };

    let query = DirectoryQuery {
        min_age: min_age.min(MAX_AGE),
        sort: sort.and_then(SortKey::parse),
        view,
        page,
    };

    let result = run_query(store.load(), &query);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        match view {
            ViewMode::Cards => println!("{}", format_cards(&result)),
            ViewMode::Table => println!("{}", format_table(&result)),
        }
    }

    Ok(())
}

async fn handle_avatar(store: &UserStore, user_id: u64, file: &Path) -> Result<()> {
    if !is_image_file(file) {
        bail!("{} does not look like an image file", file.display());
    }
    if !store.load().iter().any(|user| user.id == user_id) {
        bail!("No user with id {}", user_id);
    }

    let avatar = ingest_avatar(file).await?;
    store.update_avatar(user_id, &avatar);
    println!("Updated avatar for user {}", user_id);

    Ok(())
}
