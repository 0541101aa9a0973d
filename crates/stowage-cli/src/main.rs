//! Stowage CLI
//!
//! Command-line front end for the Stowage object storage port. The backend
//! is selected from the environment (a `.env` file is read when present).
//!
//! ## Usage
//!
//! ```bash
//! STORAGE_BACKEND=s3 S3_BUCKET=my-bucket stowage put report.pdf ./report.pdf
//! stowage get report.pdf --output ./copy.pdf
//! stowage url report.pdf
//! stowage rm report.pdf
//! stowage workflow demo.txt ./demo.txt
//! ```

mod commands;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use stowage_storages::{ObjectStorage, StorageConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stowage")]
#[command(about = "Read, write, delete and share objects in a storage backend", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,

	/// Create the S3 bucket if it does not exist
	#[arg(long, global = true)]
	create_bucket: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Upload a file under a key
	Put {
		/// Object key
		#[arg(value_name = "KEY")]
		key: String,

		/// File to upload
		#[arg(value_name = "FILE")]
		file: PathBuf,

		/// Content type (guessed from the file name when omitted)
		#[arg(long, value_name = "MIME")]
		content_type: Option<String>,
	},

	/// Download an object
	Get {
		/// Object key
		#[arg(value_name = "KEY")]
		key: String,

		/// Write to this file instead of stdout
		#[arg(short, long, value_name = "FILE")]
		output: Option<PathBuf>,
	},

	/// Delete an object
	Rm {
		/// Object key
		#[arg(value_name = "KEY")]
		key: String,
	},

	/// Print a temporary download URL
	Url {
		/// Object key
		#[arg(value_name = "KEY")]
		key: String,
	},

	/// Upload, share, download and delete a file in one run
	Workflow {
		/// Object key
		#[arg(value_name = "KEY")]
		key: String,

		/// File to upload
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();

	dotenvy::dotenv().ok();
	init_tracing(cli.verbosity);

	if let Err(e) = run(cli).await {
		eprintln!("{} {:#}", "Error:".red(), e);
		process::exit(1);
	}
}

fn init_tracing(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(commands::log_level(verbosity)));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
	let config = StorageConfig::from_env().context("Failed to load storage configuration")?;
	tracing::debug!(backend = %config.backend_type(), "Loaded storage configuration");

	let storage = open_storage(config, cli.create_bucket).await?;

	match cli.command {
		Commands::Put {
			key,
			file,
			content_type,
		} => {
			let size = commands::put(&*storage, &key, &file, content_type).await?;
			println!("{} {} ({} bytes)", "Uploaded:".green(), key, size);
		}
		Commands::Get { key, output } => match output {
			Some(path) => {
				let size = commands::get_to_file(&*storage, &key, &path).await?;
				println!("{} {} ({} bytes)", "Downloaded:".green(), path.display(), size);
			}
			None => commands::get_to_stdout(&*storage, &key).await?,
		},
		Commands::Rm { key } => {
			commands::remove(&*storage, &key).await?;
			println!("{} {}", "Deleted:".green(), key);
		}
		Commands::Url { key } => {
			println!("{}", commands::temp_url(&*storage, &key).await?);
		}
		Commands::Workflow { key, file } => {
			let report = commands::workflow(storage, &key, &file).await?;
			println!("{} {}", "Download URL:".green(), report.download_url);
			println!("{} {} bytes", "Downloaded:".green(), report.downloaded_size);
		}
	}

	Ok(())
}

async fn open_storage(
	config: StorageConfig,
	create_bucket: bool,
) -> anyhow::Result<Arc<dyn ObjectStorage>> {
	#[cfg(feature = "s3")]
	if let StorageConfig::S3(s3_config) = &config {
		if create_bucket {
			let storage = stowage_storages::S3Storage::new(s3_config.clone()).await?;
			storage
				.ensure_bucket()
				.await
				.context("Failed to prepare bucket")?;
			return Ok(Arc::new(storage));
		}
	}

	if create_bucket {
		tracing::warn!(backend = %config.backend_type(), "--create-bucket only applies to S3");
	}

	Ok(stowage_storages::create_storage(config).await?)
}
