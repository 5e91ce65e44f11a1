//! Task management commands.

use clap::Subcommand;
use planroom_core::entity::parse_date;
use planroom_core::{Priority, Status, TimelineItem};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Assignee display name
        #[arg(long)]
        assigned_to: Option<String>,
        /// Priority: high, medium, or low
        #[arg(long)]
        priority: Option<String>,
        /// Status (default: pending)
        #[arg(long, default_value = "pending")]
        status: String,
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,
        /// End date, YYYY-MM-DD
        #[arg(long)]
        end: Option<String>,
        /// Completion percentage 0-100
        #[arg(long, default_value = "0")]
        progress: u8,
        /// Display color, e.g. "#3B82F6"
        #[arg(long)]
        color: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        assigned_to: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        progress: Option<u8>,
    },
    /// Delete a task (removes its dependency links too)
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Create {
            title,
            description,
            assigned_to,
            priority,
            status,
            start,
            end,
            progress,
            color,
        } => {
            let mut board = super::load_board(None)?;

            let mut task =
                TimelineItem::new(Uuid::new_v4().to_string(), title, status.parse::<Status>()?);
            task.description = description;
            task.assigned_to = assigned_to;
            task.priority = priority.map(|p| parse_priority(&p)).transpose()?;
            task.start_date = start.as_deref().and_then(parse_date);
            task.end_date = end.as_deref().and_then(parse_date);
            task.progress = progress.min(100);
            task.color = color;

            let id = task.id.clone();
            board.add_item(task)?;
            super::save_board(&board)?;
            println!("Task created: {id}");
        }
        TaskAction::List { status, json } => {
            let board = super::load_board(None)?;
            let filter: Option<Status> = status.map(|s| s.parse()).transpose()?;
            let tasks: Vec<&TimelineItem> = board
                .items()
                .iter()
                .filter(|t| filter.map_or(true, |f| t.status == f))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for task in tasks {
                    let span = match task.date_span() {
                        Some((start, end)) => format!("{start} .. {end}"),
                        None => "unscheduled".to_string(),
                    };
                    println!("{}  [{}] {}  ({span})", task.id, task.status, task.title);
                }
            }
        }
        TaskAction::Get { id } => {
            let board = super::load_board(None)?;
            let task = board
                .get(&id)
                .ok_or(planroom_core::StoreError::TaskNotFound(id))?;
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        TaskAction::Update {
            id,
            title,
            description,
            assigned_to,
            status,
            start,
            end,
            progress,
        } => {
            let mut board = super::load_board(None)?;
            let mut task = board
                .get(&id)
                .ok_or_else(|| planroom_core::StoreError::TaskNotFound(id.clone()))?
                .clone();

            if let Some(title) = title {
                task.title = title;
            }
            if let Some(description) = description {
                task.description = Some(description);
            }
            if let Some(assigned_to) = assigned_to {
                task.assigned_to = Some(assigned_to);
            }
            if let Some(status) = status {
                task.status = status.parse()?;
            }
            if let Some(start) = start {
                task.start_date = parse_date(&start);
            }
            if let Some(end) = end {
                task.end_date = parse_date(&end);
            }
            if let Some(progress) = progress {
                task.progress = progress.min(100);
            }

            board.update_item(task)?;
            super::save_board(&board)?;
            println!("Task updated: {id}");
        }
        TaskAction::Delete { id } => {
            let mut board = super::load_board(None)?;
            board.remove_item(&id)?;
            super::save_board(&board)?;
            println!("Task deleted: {id}");
        }
    }

    Ok(())
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    match s {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        other => Err(format!("unknown priority: {other}")),
    }
}
