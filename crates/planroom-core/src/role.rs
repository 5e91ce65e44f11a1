//! Role-based capability lookup.
//!
//! Permissions are a pure function of the role, consulted at render
//! time. There is no mutable permission state and nothing here enforces
//! anything -- the UI uses the lookup to decide which controls to show.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's role on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Member, Role::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Member => "Member",
            Self::Viewer => "Viewer",
        }
    }

    /// The capability set granted to this role.
    pub fn capabilities(&self) -> &'static [Capability] {
        use Capability::*;
        match self {
            Self::Admin => &[
                ViewAllTasks,
                EditAllTasks,
                DeleteAllTasks,
                ManageUsers,
                ManageDependencies,
                ChangeSettings,
                ExportData,
                ViewReports,
            ],
            Self::Manager => &[
                ViewAllTasks,
                EditAllTasks,
                CreateTasks,
                AssignTasks,
                ManageDependencies,
                ViewReports,
                ExportData,
            ],
            Self::Member => &[
                ViewAssignedTasks,
                EditOwnTasks,
                UpdateProgress,
                ViewTimeline,
                AddComments,
            ],
            Self::Viewer => &[ViewTimeline, ViewAssignedTasks],
        }
    }

    /// Whether this role grants the capability.
    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "member" => Ok(Self::Member),
            "viewer" => Ok(Self::Viewer),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// An individual capability a role may grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewAllTasks,
    EditAllTasks,
    DeleteAllTasks,
    ManageUsers,
    ManageDependencies,
    ChangeSettings,
    ExportData,
    ViewReports,
    CreateTasks,
    AssignTasks,
    ViewAssignedTasks,
    EditOwnTasks,
    UpdateProgress,
    ViewTimeline,
    AddComments,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewAllTasks => "view_all_tasks",
            Self::EditAllTasks => "edit_all_tasks",
            Self::DeleteAllTasks => "delete_all_tasks",
            Self::ManageUsers => "manage_users",
            Self::ManageDependencies => "manage_dependencies",
            Self::ChangeSettings => "change_settings",
            Self::ExportData => "export_data",
            Self::ViewReports => "view_reports",
            Self::CreateTasks => "create_tasks",
            Self::AssignTasks => "assign_tasks",
            Self::ViewAssignedTasks => "view_assigned_tasks",
            Self::EditOwnTasks => "edit_own_tasks",
            Self::UpdateProgress => "update_progress",
            Self::ViewTimeline => "view_timeline",
            Self::AddComments => "add_comments",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view_all_tasks" => Ok(Self::ViewAllTasks),
            "edit_all_tasks" => Ok(Self::EditAllTasks),
            "delete_all_tasks" => Ok(Self::DeleteAllTasks),
            "manage_users" => Ok(Self::ManageUsers),
            "manage_dependencies" => Ok(Self::ManageDependencies),
            "change_settings" => Ok(Self::ChangeSettings),
            "export_data" => Ok(Self::ExportData),
            "view_reports" => Ok(Self::ViewReports),
            "create_tasks" => Ok(Self::CreateTasks),
            "assign_tasks" => Ok(Self::AssignTasks),
            "view_assigned_tasks" => Ok(Self::ViewAssignedTasks),
            "edit_own_tasks" => Ok(Self::EditOwnTasks),
            "update_progress" => Ok(Self::UpdateProgress),
            "view_timeline" => Ok(Self::ViewTimeline),
            "add_comments" => Ok(Self::AddComments),
            other => Err(format!("unknown capability: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_set_sizes() {
        assert_eq!(Role::Admin.capabilities().len(), 8);
        assert_eq!(Role::Manager.capabilities().len(), 7);
        assert_eq!(Role::Member.capabilities().len(), 5);
        assert_eq!(Role::Viewer.capabilities().len(), 2);
    }

    #[test]
    fn viewer_cannot_edit() {
        assert!(!Role::Viewer.allows(Capability::EditAllTasks));
        assert!(!Role::Viewer.allows(Capability::EditOwnTasks));
        assert!(Role::Viewer.allows(Capability::ViewTimeline));
    }

    #[test]
    fn only_admin_manages_users() {
        for role in Role::ALL {
            assert_eq!(
                role.allows(Capability::ManageUsers),
                role == Role::Admin,
                "{role}"
            );
        }
    }

    #[test]
    fn managers_create_but_do_not_delete() {
        assert!(Role::Manager.allows(Capability::CreateTasks));
        assert!(!Role::Manager.allows(Capability::DeleteAllTasks));
    }

    #[test]
    fn wire_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            for cap in role.capabilities() {
                assert_eq!(cap.as_str().parse::<Capability>().unwrap(), *cap);
            }
        }
        let json = serde_json::to_string(&Capability::ManageDependencies).unwrap();
        assert_eq!(json, r#""manage_dependencies""#);
    }
}
