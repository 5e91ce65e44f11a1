//! Dependency link commands.

use clap::Subcommand;
use planroom_core::{Dependency, DependencyKind};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum DependencyAction {
    /// Link two tasks
    Add {
        /// Prerequisite task ID
        from: String,
        /// Dependent task ID
        to: String,
        /// Link kind (default: finish-to-start)
        #[arg(long, default_value = "finish-to-start")]
        kind: String,
    },
    /// List links, optionally those touching one task
    List {
        /// Only links touching this task ID
        #[arg(long)]
        of: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a link
    Remove {
        /// Dependency ID
        id: String,
    },
}

pub fn run(action: DependencyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DependencyAction::Add { from, to, kind } => {
            let mut board = super::load_board(None)?;
            let dependency = Dependency::new(
                Uuid::new_v4().to_string(),
                from,
                to,
                kind.parse::<DependencyKind>()?,
            );
            let id = dependency.id.clone();
            board.add_dependency(dependency)?;
            super::save_board(&board)?;
            println!("Dependency created: {id}");
        }
        DependencyAction::List { of, json } => {
            let board = super::load_board(None)?;
            let links: Vec<&Dependency> = board
                .dependencies()
                .iter()
                .filter(|d| of.as_deref().map_or(true, |id| d.touches(id)))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&links)?);
            } else {
                for link in links {
                    println!(
                        "{}  {} -> {}  ({})",
                        link.id, link.from_task, link.to_task, link.kind
                    );
                }
            }
        }
        DependencyAction::Remove { id } => {
            let mut board = super::load_board(None)?;
            board.remove_dependency(&id)?;
            super::save_board(&board)?;
            println!("Dependency removed: {id}");
        }
    }

    Ok(())
}
