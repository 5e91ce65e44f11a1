//! Role and capability inspection commands.

use clap::Subcommand;
use planroom_core::{Capability, Role};

#[derive(Subcommand)]
pub enum RoleAction {
    /// List all roles
    List,
    /// Show the capabilities a role grants
    Show {
        /// Role name: admin, manager, member, or viewer
        role: String,
    },
    /// Check whether a role grants a capability
    Check {
        /// Role name
        role: String,
        /// Capability name, e.g. edit_all_tasks
        capability: String,
    },
}

pub fn run(action: RoleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RoleAction::List => {
            for role in Role::ALL {
                println!(
                    "{}  ({} capabilities)",
                    role.as_str(),
                    role.capabilities().len()
                );
            }
        }
        RoleAction::Show { role } => {
            let role: Role = role.parse()?;
            println!("{}:", role.display_name());
            for capability in role.capabilities() {
                println!("  {capability}");
            }
        }
        RoleAction::Check { role, capability } => {
            let role: Role = role.parse()?;
            let capability: Capability = capability.parse()?;
            println!("{}", role.allows(capability));
        }
    }

    Ok(())
}
