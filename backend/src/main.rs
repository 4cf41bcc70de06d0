//! Portal CLI - host the problem portal and submit from the terminal
//!
//! # Commands
//!
//! ```bash
//! portal serve                      # Host frontend/dist (port 8080)
//! portal submit --file form.json    # Submit a problem statement
//! portal check form.json            # Validate a form file, no network
//! portal options                    # List affiliations and categories
//! ```
//!
//! Form files use the same keys as the web form:
//!
//! ```json
//! {
//!   "name": "Jane Doe",
//!   "affiliation": "DUK",
//!   "contactEmail": "jane@duk.ac.in",
//!   "problemTitle": "Crop disease detection",
//!   "problemDescription": "...",
//!   "category": "Other",
//!   "customCategory": "Edge AI",
//!   "additionalFilesLinks": ""
//! }
//! ```

use clap::{Parser, Subcommand};
use portal::{check_form, resolve_form, supabase_from_env, FormArgs, FormError, ServeConfig, SupabaseStore};
use portal_core::{Affiliation, Category, Outcome, SubmissionWorkflow};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "TCS AI Club x DUK problem statement portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Host the built frontend with single-page fallback
    Serve {
        /// Port to listen on (default: PORTAL_PORT or 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Trunk output directory (default: PORTAL_DIST_DIR or frontend/dist)
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Submit a problem statement to the submissions table
    Submit {
        /// Form JSON file (flags below override its values)
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        fields: FormArgs,
    },

    /// Validate a form JSON file and print the record that would be stored
    Check {
        /// Input JSON file
        input: PathBuf,
    },

    /// Show the affiliation and category options
    Options,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, dist } => cmd_serve(port, dist).await,
        Commands::Submit { file, fields } => cmd_submit(file.as_deref(), fields).await,
        Commands::Check { input } => cmd_check(&input),
        Commands::Options => cmd_options(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: Option<u16>, dist: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServeConfig::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(dist) = dist {
        config.dist_dir = dist;
    }

    portal::server::start_server(&config).await?;
    Ok(())
}

async fn cmd_submit(file: Option<&Path>, fields: FormArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = resolve_form(file, fields)?;

    let store = SupabaseStore::new(supabase_from_env()?);
    eprintln!("📤 Submitting to: {}", store.config().insert_url());

    let workflow = SubmissionWorkflow::new(store);
    let outcome = workflow.submit(&mut form).await;
    report(&outcome);

    match outcome {
        Outcome::Submitted(_) => Ok(()),
        _ => Err("problem statement was not stored".into()),
    }
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Checking: {}", input.display());

    match check_form(input) {
        Ok(record) => {
            eprintln!("✅ Valid, would store:");
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Err(FormError::Invalid(err)) => {
            for (field, msg) in err.field_errors().iter() {
                eprintln!("   - {}: {}", field.label(), msg);
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_options() -> Result<(), Box<dyn std::error::Error>> {
    println!("Affiliations:");
    for affiliation in Affiliation::ALL {
        println!("  {}", affiliation);
    }
    println!();
    println!("Categories:");
    for category in Category::ALL {
        if category.is_other() {
            println!("  {}  (requires --custom-category)", category);
        } else {
            println!("  {}", category);
        }
    }
    Ok(())
}

fn report(outcome: &Outcome) {
    if let Some(notification) = outcome.notification() {
        eprintln!("{} {}", notification.severity.emoji(), notification.title);
        eprintln!("   {}", notification.description);
    }

    if let Some(errors) = outcome.field_errors() {
        for (field, msg) in errors.iter() {
            eprintln!("   - {}: {}", field.label(), msg);
        }
    }

    if let Outcome::Failed(err) = outcome {
        eprintln!("   Cause: {}", err);
    }
}
