//! CoverGen CLI - Demo Front-End
//!
//! Commands: posts, url, options
//! Outputs JSON to stdout
//! Returns non-zero on lookup failure

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use covergen_core::{
    posts::demo_posts, CloudConfig, CoverCatalog, CoverPipeline, CoverStrategy, LayoutScale,
    PostImageInputs,
};

#[derive(Parser)]
#[command(name = "covergen-cli")]
#[command(about = "CoverGen CLI - Deterministic blog cover recipes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a catalog JSON file (demo tables when omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// CDN account namespace (overrides CLOUDINARY_CLOUD_NAME)
    #[arg(long)]
    cloud_name: Option<String>,

    /// Layout scale for generated covers
    #[arg(long, value_enum, default_value = "card")]
    scale: ScaleArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleArg {
    Card,
    Compact,
}

impl From<ScaleArg> for LayoutScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Card => LayoutScale::Card,
            ScaleArg::Compact => LayoutScale::Compact,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo posts with their resolved cover references
    Posts,

    /// Build the transformation URL for one post
    Url {
        /// JSON payload (PostImageInputs)
        #[arg(short, long)]
        payload: String,
    },

    /// Build the structured SDK options for one post
    Options {
        /// JSON payload (PostImageInputs)
        #[arg(short, long)]
        payload: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => match CoverCatalog::load_from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!(r#"{{"error": "Failed to load catalog: {}"}}"#, e);
                return ExitCode::FAILURE;
            }
        },
        None => CoverCatalog::demo(),
    };

    let cloud = match cli.cloud_name.clone() {
        Some(name) => CloudConfig::new(name),
        None => CloudConfig::from_env(),
    };

    let pipeline = CoverPipeline::new(catalog, cloud).with_scale(cli.scale.into());

    match cli.command {
        Commands::Posts => {
            let mut entries = vec![];
            for post in demo_posts() {
                let cover = match pipeline.resolve(&post.image_inputs(), CoverStrategy::default())
                {
                    Ok(cover) => cover,
                    Err(e) => {
                        eprintln!(r#"{{"error": "{}"}}"#, e);
                        return ExitCode::from(2);
                    }
                };
                entries.push(serde_json::json!({
                    "title": post.title,
                    "url": post.url,
                    "date": post.display_date(),
                    "cover": cover,
                }));
            }

            println!("{}", serde_json::to_string_pretty(&entries).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Url { payload } => {
            let inputs: PostImageInputs = match serde_json::from_str(&payload) {
                Ok(i) => i,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match pipeline.cover_url(&inputs) {
                Ok(url) => {
                    println!("{}", serde_json::json!({ "url": url }));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("{}", serde_json::json!({ "error": e.to_string() }));
                    ExitCode::from(2) // Lookup failure
                }
            }
        }

        Commands::Options { payload } => {
            let inputs: PostImageInputs = match serde_json::from_str(&payload) {
                Ok(i) => i,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match pipeline.cover_options(&inputs) {
                Ok(options) => {
                    println!("{}", serde_json::to_string_pretty(&options).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("{}", serde_json::json!({ "error": e.to_string() }));
                    ExitCode::from(2) // Lookup failure
                }
            }
        }
    }
}
