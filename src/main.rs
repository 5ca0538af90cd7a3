//! LBN Data - dataset access for the physics-inspired feature engineering tutorial
//!
//! Resolves dataset files against the EOS mount when available, otherwise
//! downloads them from CERNBox into the local data directory.

use clap::{Parser, Subcommand};
use lbn_data::{DatasetLoader, DatasetStore, Environment};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "lbn-data")]
#[command(about = "Dataset access for the physics-inspired feature engineering tutorial")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a dataset file, downloading it when necessary
    Fetch {
        /// Dataset identifier relative to the storage root
        /// (e.g. lbn/data/low_gen_train.npz)
        identifier: String,
    },

    /// Load an LBN dataset and print its array shapes
    Load {
        /// Feature level (low, high, mixed)
        #[arg(short, long, default_value = "low")]
        level: String,

        /// Particle sorting (gen, pt)
        #[arg(short, long, default_value = "gen")]
        sorting: String,

        /// Dataset split (train, test)
        #[arg(short, long, default_value = "train")]
        kind: String,
    },
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let store = DatasetStore::new(Environment::detect());

    match cli.command {
        Commands::Fetch { identifier } => {
            let path = store.resolve(&identifier)?;
            info!("resolved {} to {}", identifier, path.display());
            println!("{}", path.display());
        }

        Commands::Load {
            level,
            sorting,
            kind,
        } => {
            let loader = DatasetLoader::new(store);
            let dataset = loader.load_str(&level, &sorting, &kind)?;

            println!("\n{}_{}_{} Dataset", level, sorting, kind);
            println!("================");
            println!("labels:   {:?}", dataset.labels.shape());
            println!("features: {:?}", dataset.features.shape());
        }
    }

    Ok(())
}
