//! Board statistics commands.

use clap::Subcommand;
use planroom_core::summarize;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show status counts for the board
    Show {
        /// Board snapshot to summarize (defaults to the saved board)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Show { file, json } => {
            let board = super::load_board(file.as_deref())?;
            let summary = summarize(board.items());

            if json {
                let mut value = serde_json::to_value(summary)?;
                value["dependencies"] = board.dependencies().len().into();
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Total tasks:   {}", summary.total);
                println!("Completed:     {}", summary.completed);
                println!("In progress:   {}", summary.in_progress);
                println!("Pending:       {}", summary.pending);
                println!("Scheduled:     {}", summary.scheduled);
                println!("Dependencies:  {}", board.dependencies().len());
                println!("Completion:    {}%", summary.completion_percent());
            }
        }
    }

    Ok(())
}
