//! `certdeck`: command-line client for a certdeck server.
//!
//! # Usage
//!
//! ```
//! certdeck --url http://localhost:8080 list microsoft_learn --sort date-desc
//! certdeck add custom --title "CKA" --description "Kubernetes admin" \
//!   --url https://example.com/cka --date 2024-05-01
//! certdeck export --output backup.json
//! certdeck generate aws_skillbuilder --html aws.html --css aws.css
//! ```

mod client;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use certdeck_core::{
  catalog::Catalog,
  platform::Platform,
  query::{SortKey, StatusFilter},
  record::{NewRecord, RecordPatch, Status},
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:8080";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "certdeck", about = "Manage certification cards on a certdeck server")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the certdeck server (default: http://localhost:8080).
  #[arg(long, env = "CERTDECK_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List platforms with their record counts.
  Platforms,

  /// List a platform's records.
  List {
    platform: Platform,
    /// Case-insensitive text matched against title and description.
    #[arg(short = 'q', long)]
    search:   Option<String>,
    /// `all`, `Active`, `In Progress` or `Expired`.
    #[arg(long, default_value = "all")]
    status:   StatusFilter,
    /// `manual`, `date-desc`, `date-asc`, `title-asc` or `title-desc`.
    #[arg(long, default_value = "manual")]
    sort:     SortKey,
  },

  /// Show every field of one record.
  Show { platform: Platform, id: String },

  /// Add a record to a platform.
  Add {
    platform: Platform,
    #[command(flatten)]
    fields:   RecordFields,
  },

  /// Change fields of an existing record.
  Edit {
    platform: Platform,
    id:       String,
    #[command(flatten)]
    fields:   RecordFields,
  },

  /// Delete a record.
  Remove { platform: Platform, id: String },

  /// Move a record to sit immediately before another.
  Move {
    platform: Platform,
    id:       String,
    #[arg(long)]
    before:   String,
  },

  /// Download the whole catalog as JSON.
  Export {
    /// Defaults to `certifications-<today>.json`.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Replace the whole catalog from an exported JSON file.
  Import { file: PathBuf },

  /// Produce embeddable HTML and CSS for a platform.
  Generate {
    platform: Platform,
    /// Write the HTML here instead of stdout.
    #[arg(long)]
    html:     Option<PathBuf>,
    /// Write the CSS here instead of stdout.
    #[arg(long)]
    css:      Option<PathBuf>,
  },
}

#[derive(clap::Args, Debug, Default)]
struct RecordFields {
  #[arg(long)]
  title:         Option<String>,
  #[arg(long)]
  description:   Option<String>,
  #[arg(long)]
  url:           Option<String>,
  /// `YYYY-MM-DD`.
  #[arg(long)]
  date:          Option<NaiveDate>,
  /// `Active`, `In Progress` or `Expired`.
  #[arg(long)]
  status:        Option<Status>,
  /// Pass an empty string to clear.
  #[arg(long)]
  badge_url:     Option<String>,
  /// roadmap.sh only.
  #[arg(long)]
  card_html:     Option<String>,
  /// roadmap.sh only.
  #[arg(long)]
  card_markdown: Option<String>,
}

impl RecordFields {
  /// A new record; `status` defaults to `Active`.
  fn into_new(self) -> Result<NewRecord> {
    let (Some(title), Some(description), Some(url), Some(date)) =
      (self.title, self.description, self.url, self.date)
    else {
      bail!("add requires --title, --description, --url and --date");
    };
    let mut record = NewRecord::new(title, description, url, date, self.status.unwrap_or(Status::Active));
    record.badge_url = self.badge_url;
    record.card_html = self.card_html;
    record.card_markdown = self.card_markdown;
    record.validate()?;
    Ok(record)
  }

  fn into_patch(self) -> Result<RecordPatch> {
    let patch = RecordPatch {
      title:         self.title,
      description:   self.description,
      url:           self.url,
      date:          self.date,
      status:        self.status,
      badge_url:     self.badge_url,
      card_html:     self.card_html,
      card_markdown: self.card_markdown,
    };
    if patch.is_empty() {
      bail!("nothing to change; pass at least one field flag");
    }
    patch.validate()?;
    Ok(patch)
  }
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| DEFAULT_URL.to_string()),
  };
  tracing::debug!(base_url = %api_config.base_url, "using server");

  let client = ApiClient::new(api_config)?;
  run(&client, args.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
  match command {
    Command::Platforms => {
      print!("{}", output::platforms(&client.platforms().await?));
    }
    Command::List { platform, search, status, sort } => {
      let records = client.list(platform, search.as_deref(), status, sort).await?;
      print!("{}", output::records(&records));
    }
    Command::Show { platform, id } => {
      print!("{}", output::detail(&client.get(platform, &id).await?));
    }
    Command::Add { platform, fields } => {
      let record = client.add(platform, &fields.into_new()?).await?;
      println!("added {}", record.id);
    }
    Command::Edit { platform, id, fields } => {
      let record = client.update(platform, &id, &fields.into_patch()?).await?;
      print!("{}", output::detail(&record));
    }
    Command::Remove { platform, id } => {
      client.remove(platform, &id).await?;
      println!("removed {id}");
    }
    Command::Move { platform, id, before } => {
      client.reorder(platform, &id, &before).await?;
      println!("moved {id} before {before}");
    }
    Command::Export { output } => {
      let document = client.export().await?;
      let path = output
        .unwrap_or_else(|| PathBuf::from(Catalog::export_filename(chrono::Local::now().date_naive())));
      std::fs::write(&path, document).with_context(|| format!("writing {}", path.display()))?;
      println!("exported to {}", path.display());
    }
    Command::Import { file } => {
      let document = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
      let catalog = Catalog::from_json(&document)
        .with_context(|| format!("{} is not a certdeck export", file.display()))?;
      client.import(document).await?;
      println!("imported {} certifications", catalog.len());
    }
    Command::Generate { platform, html, css } => {
      let code = client.generate(platform).await?;
      write_or_print(html.as_ref(), &code.html)?;
      write_or_print(css.as_ref(), &code.css)?;
    }
  }
  Ok(())
}

fn write_or_print(path: Option<&PathBuf>, contents: &str) -> Result<()> {
  match path {
    Some(path) => {
      std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
      println!("wrote {}", path.display());
    }
    None => println!("{contents}"),
  }
  Ok(())
}
