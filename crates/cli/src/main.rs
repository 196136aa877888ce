//! Composition root for the project board.
//!
//! Wires the REST gateway and the file snapshot store into a
//! [`BoardStore`] and exposes the store's operations as subcommands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_core::{ColumnKey, ProjectStatus, UpdateProject};
use atelier_gateway::{GatewayConfig, RestGateway};
use atelier_store::{BoardStore, FileSnapshotStore};

#[derive(Parser)]
#[command(name = "atelier", about = "Project board over the hosted projects API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the board (served from cache within the TTL).
    Board,
    /// Force a refresh from the gateway and show the board.
    Refresh,
    /// Create a project in a column.
    Add {
        /// Target column: ideas, in-progress, or completed.
        column: String,
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Move a project to a new status.
    Move { id: String, status: String },
    /// Archive a project (soft delete).
    Archive { id: String },
    /// Restore an archived project into the ideas column.
    Restore { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // --- Wiring ---
    let config = GatewayConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Loaded gateway configuration");

    let gateway = Arc::new(RestGateway::new(config));
    let dir = data_dir();
    let snapshots = Arc::new(FileSnapshotStore::new(&dir)?);
    tracing::info!(data_dir = %dir.display(), "Snapshot store ready");

    let mut store = BoardStore::new(gateway, snapshots);

    match cli.command {
        Command::Board => {
            store.load_projects(false).await?;
            print_board(&store);
        }
        Command::Refresh => {
            store.load_projects(true).await?;
            print_board(&store);
        }
        Command::Add {
            column,
            title,
            description,
        } => {
            let column = ColumnKey::from_str_value(&column)?;
            let record = store.add_project(column, title, description).await?;
            println!("Created '{}' ({})", record.title, record.id);
        }
        Command::Move { id, status } => {
            let status = ProjectStatus::from_str_value(&status)?;
            let record = store.update_project(&id, UpdateProject::status(status)).await?;
            println!("Moved '{}' to {}", record.title, record.status.as_str());
        }
        Command::Archive { id } => {
            store.delete_project(&id).await?;
            println!("Archived {id}");
        }
        Command::Restore { id } => {
            let record = store.restore_project(&id).await?;
            println!("Restored '{}' into ideas", record.title);
        }
    }

    Ok(())
}

/// Snapshot directory: `ATELIER_DATA_DIR` if set, the OS-local data
/// dir otherwise.
fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ATELIER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    directories::ProjectDirs::from("", "", "atelier")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".atelier"))
}

fn print_board(store: &BoardStore) {
    for (key, projects) in store.columns() {
        println!("{} ({})", key.as_str(), projects.len());
        for project in projects {
            println!("  [{}] {}  {}", project.status.as_str(), project.title, project.id);
        }
    }
}
