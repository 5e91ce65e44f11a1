//! In-memory board state: items plus dependency links.
//!
//! Mirrors the upstream store's reducer semantics: adds reject duplicate
//! ids, updates and removes reject unknown ids, and removing an item
//! cascades to every link touching it from either side.

use serde::{Deserialize, Serialize};

use crate::dependency::{dependents_of, prerequisites_of, Dependency};
use crate::entity::TimelineItem;
use crate::error::StoreError;

/// The board: the full set of items and the links between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    items: Vec<TimelineItem>,
    #[serde(default)]
    dependencies: Vec<Dependency>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from already-validated parts (e.g. a snapshot).
    pub fn from_parts(items: Vec<TimelineItem>, dependencies: Vec<Dependency>) -> Self {
        Self {
            items,
            dependencies,
        }
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn get(&self, item_id: &str) -> Option<&TimelineItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.get(item_id).is_some()
    }

    /// Add a new item. Ids are unique across the board.
    pub fn add_item(&mut self, item: TimelineItem) -> Result<(), StoreError> {
        if self.contains(&item.id) {
            return Err(StoreError::DuplicateTask(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace an existing item, matched by id.
    pub fn update_item(&mut self, item: TimelineItem) -> Result<(), StoreError> {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(StoreError::TaskNotFound(item.id)),
        }
    }

    /// Remove an item and every link touching it.
    pub fn remove_item(&mut self, item_id: &str) -> Result<TimelineItem, StoreError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| StoreError::TaskNotFound(item_id.to_string()))?;

        let removed = self.items.remove(index);
        self.dependencies.retain(|d| !d.touches(item_id));
        Ok(removed)
    }

    /// Add a link after validating both endpoints exist and differ.
    pub fn add_dependency(&mut self, dependency: Dependency) -> Result<(), StoreError> {
        if self.dependencies.iter().any(|d| d.id == dependency.id) {
            return Err(StoreError::DuplicateDependency(dependency.id));
        }
        if dependency.from_task == dependency.to_task {
            return Err(StoreError::SelfDependency(dependency.from_task));
        }
        for endpoint in [&dependency.from_task, &dependency.to_task] {
            if !self.contains(endpoint) {
                return Err(StoreError::UnknownEndpoint(endpoint.clone()));
            }
        }
        self.dependencies.push(dependency);
        Ok(())
    }

    pub fn remove_dependency(&mut self, dependency_id: &str) -> Result<Dependency, StoreError> {
        let index = self
            .dependencies
            .iter()
            .position(|d| d.id == dependency_id)
            .ok_or_else(|| StoreError::DependencyNotFound(dependency_id.to_string()))?;
        Ok(self.dependencies.remove(index))
    }

    /// Links pointing at the item (its prerequisites).
    pub fn prerequisites_of(&self, item_id: &str) -> Vec<&Dependency> {
        prerequisites_of(&self.dependencies, item_id)
    }

    /// Links leaving the item (what depends on it).
    pub fn dependents_of(&self, item_id: &str) -> Vec<&Dependency> {
        dependents_of(&self.dependencies, item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::DependencyKind;
    use crate::entity::Status;

    fn board() -> Board {
        let mut board = Board::new();
        board
            .add_item(TimelineItem::new("1", "Planning", Status::Completed))
            .unwrap();
        board
            .add_item(TimelineItem::new("2", "Design", Status::InProgress))
            .unwrap();
        board
            .add_item(TimelineItem::new("3", "Build", Status::Pending))
            .unwrap();
        board
            .add_dependency(Dependency::new("d1", "1", "2", DependencyKind::FinishToStart))
            .unwrap();
        board
            .add_dependency(Dependency::new("d2", "2", "3", DependencyKind::FinishToStart))
            .unwrap();
        board
    }

    #[test]
    fn duplicate_item_id_rejected() {
        let mut board = board();
        let err = board
            .add_item(TimelineItem::new("1", "Again", Status::Pending))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateTask(id) if id == "1"));
    }

    #[test]
    fn update_replaces_matching_item() {
        let mut board = board();
        let mut item = board.get("2").unwrap().clone();
        item.progress = 80;
        board.update_item(item).unwrap();
        assert_eq!(board.get("2").unwrap().progress, 80);

        let err = board
            .update_item(TimelineItem::new("99", "ghost", Status::Pending))
            .unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(_)));
    }

    #[test]
    fn remove_cascades_links_on_both_sides() {
        let mut board = board();
        board.remove_item("2").unwrap();
        assert!(board.dependencies().is_empty());
        assert_eq!(board.items().len(), 2);
    }

    #[test]
    fn dependency_endpoints_validated() {
        let mut board = board();
        let err = board
            .add_dependency(Dependency::new("d3", "1", "99", DependencyKind::FinishToStart))
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownEndpoint(id) if id == "99"));

        let err = board
            .add_dependency(Dependency::new("d4", "1", "1", DependencyKind::FinishToStart))
            .unwrap_err();
        assert!(matches!(err, StoreError::SelfDependency(_)));
    }

    #[test]
    fn prerequisite_and_dependent_lookups() {
        let board = board();
        assert_eq!(board.prerequisites_of("2").len(), 1);
        assert_eq!(board.dependents_of("2").len(), 1);
        assert!(board.prerequisites_of("1").is_empty());
    }

    #[test]
    fn remove_dependency_by_id() {
        let mut board = board();
        let removed = board.remove_dependency("d1").unwrap();
        assert_eq!(removed.from_task, "1");
        assert!(matches!(
            board.remove_dependency("d1"),
            Err(StoreError::DependencyNotFound(_))
        ));
    }

    #[test]
    fn board_round_trips_as_json() {
        let board = board();
        let json = serde_json::to_string(&board).unwrap();
        let decoded: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.items().len(), 3);
        assert_eq!(decoded.dependencies().len(), 2);
    }
}
