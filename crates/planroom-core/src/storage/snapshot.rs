//! JSON board snapshots.
//!
//! The board persists as a single JSON document (items + dependencies)
//! in the same camelCase record shape the upstream API serves, so a
//! snapshot file and an API response are interchangeable inputs.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::data_dir;
use crate::dependency::{Dependency, DependencyKind};
use crate::entity::{Priority, Status, TimelineItem};
use crate::error::{CoreError, Result};
use crate::store::Board;

/// Default snapshot location: `~/.config/planroom/board.json`.
pub fn default_path() -> std::io::Result<PathBuf> {
    Ok(data_dir()?.join("board.json"))
}

/// Read a board snapshot from disk.
pub fn load_board(path: &Path) -> Result<Board> {
    let content = std::fs::read_to_string(path)?;
    let board = serde_json::from_str(&content)?;
    Ok(board)
}

/// Write a board snapshot to disk.
///
/// Writes to a sibling temp file first and renames into place, so a
/// concurrent reader never sees a half-written snapshot.
pub fn save_board(path: &Path, board: &Board) -> Result<()> {
    let content = serde_json::to_string_pretty(board)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Load the default snapshot, falling back to the sample board when no
/// snapshot exists yet.
pub fn load_board_or_sample() -> Result<Board> {
    let path = default_path().map_err(CoreError::Io)?;
    if path.exists() {
        load_board(&path)
    } else {
        Ok(sample_board())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn sample_item(
    id: &str,
    title: &str,
    assigned_to: &str,
    priority: Priority,
    status: Status,
    start: NaiveDate,
    end: NaiveDate,
    progress: u8,
    color: &str,
) -> TimelineItem {
    let mut item = TimelineItem::new(id, title, status)
        .with_dates(start, end)
        .with_progress(progress);
    item.assigned_to = Some(assigned_to.to_string());
    item.priority = Some(priority);
    item.color = Some(color.to_string());
    item
}

/// The demo project plan used before any snapshot is saved.
pub fn sample_board() -> Board {
    let items = vec![
        sample_item(
            "1",
            "Project Planning",
            "Ahmed Ali",
            Priority::High,
            Status::Completed,
            date(2025, 7, 1),
            date(2025, 7, 10),
            100,
            "#3B82F6",
        ),
        sample_item(
            "2",
            "UI/UX Design",
            "Fatima Khan",
            Priority::High,
            Status::InProgress,
            date(2025, 7, 8),
            date(2025, 7, 25),
            75,
            "#10B981",
        ),
        sample_item(
            "3",
            "Database Setup",
            "Mohammad Rahim",
            Priority::Medium,
            Status::Pending,
            date(2025, 7, 15),
            date(2025, 7, 28),
            0,
            "#F59E0B",
        ),
        sample_item(
            "4",
            "Frontend Development",
            "Ayesha Siddika",
            Priority::High,
            Status::Pending,
            date(2025, 7, 20),
            date(2025, 8, 15),
            0,
            "#EF4444",
        ),
        sample_item(
            "5",
            "Backend Development",
            "Karim Uddin",
            Priority::High,
            Status::Pending,
            date(2025, 7, 25),
            date(2025, 8, 20),
            0,
            "#8B5CF6",
        ),
        sample_item(
            "6",
            "Integration Testing",
            "Ahmed Ali",
            Priority::Medium,
            Status::Pending,
            date(2025, 8, 18),
            date(2025, 8, 30),
            0,
            "#06B6D4",
        ),
        sample_item(
            "7",
            "Deployment",
            "Mohammad Rahim",
            Priority::High,
            Status::Pending,
            date(2025, 8, 28),
            date(2025, 9, 5),
            0,
            "#84CC16",
        ),
    ];

    let dependencies = vec![
        Dependency::new("1", "1", "2", DependencyKind::FinishToStart),
        Dependency::new("2", "1", "3", DependencyKind::FinishToStart),
        Dependency::new("3", "2", "4", DependencyKind::FinishToStart),
        Dependency::new("4", "3", "5", DependencyKind::FinishToStart),
        Dependency::new("5", "4", "6", DependencyKind::FinishToStart),
        Dependency::new("6", "5", "6", DependencyKind::FinishToStart),
        Dependency::new("7", "6", "7", DependencyKind::FinishToStart),
    ];

    Board::from_parts(items, dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_board_is_consistent() {
        let board = sample_board();
        assert_eq!(board.items().len(), 7);
        assert_eq!(board.dependencies().len(), 7);
        assert!(board.items().iter().all(|i| i.is_scheduled()));
        // every link endpoint exists
        for dep in board.dependencies() {
            assert!(board.contains(&dep.from_task), "missing {}", dep.from_task);
            assert!(board.contains(&dep.to_task), "missing {}", dep.to_task);
        }
    }

    #[test]
    fn snapshot_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");

        let board = sample_board();
        save_board(&path, &board).unwrap();
        let loaded = load_board(&path).unwrap();

        assert_eq!(loaded.items().len(), board.items().len());
        assert_eq!(loaded.get("4").unwrap().title, "Frontend Development");
        assert_eq!(
            loaded.get("1").unwrap().start_date,
            Some(date(2025, 7, 1))
        );
    }

    #[test]
    fn snapshot_uses_rest_record_shape() {
        let json = serde_json::to_value(sample_board()).unwrap();
        let first = &json["items"][0];
        assert_eq!(first["startDate"], "2025-07-01");
        assert_eq!(first["assignedTo"], "Ahmed Ali");
        let dep = &json["dependencies"][0];
        assert_eq!(dep["fromTask"], "1");
        assert_eq!(dep["type"], "finish-to-start");
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let err = load_board(Path::new("/nonexistent/board.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
