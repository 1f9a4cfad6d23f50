use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gallery::gallery::GalleryFeed;
use gallery::logging::{self, LogTarget};
use gallery::model::{GalleryConfig, ImageRecord};
use gallery::remote::{HostingClient, RemoteClient};
use gallery::tui::TuiRunOptions;
use gallery::upload::{FieldErrors, FileSelection, UploadForm, submit};

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Browse and upload images on a gallery API", long_about = None)]
struct Cli {
    #[command(flatten)]
    remote: RemoteArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct RemoteArgs {
    /// JSON config file (api_url, upload_url, upload_key)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the image API
    #[arg(long, global = true, env = "GALLERY_API_URL")]
    api_url: Option<String>,

    /// Image hosting endpoint that accepts a multipart `image` field
    #[arg(long, global = true, env = "GALLERY_UPLOAD_URL")]
    upload_url: Option<String>,

    /// API key sent to the hosting endpoint
    #[arg(long, global = true, env = "GALLERY_UPLOAD_KEY", hide_env_values = true)]
    upload_key: Option<String>,
}

impl RemoteArgs {
    fn resolve(&self) -> Result<GalleryConfig> {
        let base = match &self.config {
            Some(path) => GalleryConfig::load(path)?,
            None => GalleryConfig::default(),
        };
        Ok(base.with_overrides(
            self.api_url.clone(),
            self.upload_url.clone(),
            self.upload_key.clone(),
        ))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive gallery (default)
    Tui {
        /// Write logs to this file (RUST_LOG controls the level)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// List images, following the page cursor
    List {
        /// Number of pages to fetch
        #[arg(long, default_value_t = 1, conflicts_with = "all")]
        pages: usize,
        /// Fetch every page
        #[arg(long)]
        all: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Host a file and register it as a new image
    Upload {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        file: PathBuf,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an upload against the form rules without sending anything
    Validate {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration
    Show {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.remote.resolve()?;

    let command = cli.command.unwrap_or(Commands::Tui { log_file: None });
    if !matches!(command, Commands::Tui { .. }) {
        logging::init(LogTarget::Stderr)?;
    }

    match command {
        Commands::Tui { log_file } => {
            gallery::tui::run_with_options(TuiRunOptions { config, log_file })?;
        }
        Commands::List { pages, all, json } => {
            let client = RemoteClient::new(&config)?;
            let mut feed = GalleryFeed::new();
            let mut fetched = 0;
            while (all || fetched < pages) && feed.fetch_next(&client)? {
                fetched += 1;
            }

            let items: Vec<&ImageRecord> = feed.items().collect();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&items).context("serialize images json")?
                );
            } else {
                for rec in &items {
                    println!("{}  {}  {}", rec.id, rec.title, rec.url);
                }
                if feed.has_more() {
                    println!("(more available; use --pages N or --all)");
                }
            }
        }
        Commands::Upload {
            title,
            description,
            file,
            json,
        } => {
            let client = RemoteClient::new(&config)?;
            let selection = FileSelection::from_path(&file)?;

            // Rejected files are never sent to the host.
            if let Err(errs) =
                gallery::upload::validate(&title, &description, Some(&selection))
            {
                return bail_fields(&errs);
            }

            let mut form = UploadForm::new();
            form.title = title;
            form.description = description;
            let host = HostingClient::new(&config)?;
            form.select_and_host(selection, &host)?;

            let outcome = match submit(&mut form, &client) {
                Ok(o) => o,
                Err(errs) => return bail_fields(&errs),
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&outcome.created)
                        .context("serialize created image json")?
                );
            } else {
                println!("{}", outcome.notice);
                if let Some(rec) = &outcome.created {
                    println!("{}  {}", rec.id, rec.url);
                }
            }
            if outcome.notice.is_error() {
                anyhow::bail!("upload failed");
            }
        }
        Commands::Validate {
            title,
            description,
            file,
        } => {
            let selection = file.as_deref().map(FileSelection::from_path).transpose()?;
            match gallery::upload::validate(&title, &description, selection.as_ref()) {
                Ok(_) => println!("ok"),
                Err(errs) => bail_fields(&errs)?,
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show { json } => {
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&config).context("serialize config json")?
                    );
                } else {
                    println!("api_url: {}", config.api_url);
                    println!(
                        "upload_url: {}",
                        config.upload_url.as_deref().unwrap_or("(not set)")
                    );
                    println!(
                        "upload_key: {}",
                        if config.upload_key.is_some() {
                            "(set)"
                        } else {
                            "(not set)"
                        }
                    );
                }
            }
        },
    }

    Ok(())
}

fn bail_fields(errs: &FieldErrors) -> Result<()> {
    for e in errs.iter() {
        eprintln!("{:?}: {}", e.field(), e);
    }
    anyhow::bail!("validation failed")
}
