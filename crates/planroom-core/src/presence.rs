//! Presence as an explicit event stream.
//!
//! Who is online and who is looking at which item is delivered by an
//! upstream collaborator as a stream of events; the roster folds them
//! into queryable state. There are no interior timers and no randomness
//! here -- replaying the same events always yields the same roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a user is doing with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceAction {
    Viewing,
    Editing,
}

impl PresenceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing => "editing",
        }
    }
}

/// One presence change, stamped by the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresenceEvent {
    UserOnline {
        user_id: String,
        at: DateTime<Utc>,
    },
    UserOffline {
        user_id: String,
        at: DateTime<Utc>,
    },
    /// A user opened an item for viewing or editing. Replaces any
    /// previous focus of the same user.
    ItemFocused {
        user_id: String,
        item_id: String,
        action: PresenceAction,
        at: DateTime<Utc>,
    },
    ItemBlurred {
        user_id: String,
        item_id: String,
        at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
struct UserPresence {
    online: bool,
    last_seen: DateTime<Utc>,
    focus: Option<(String, PresenceAction)>,
}

/// Folded presence state.
#[derive(Debug, Clone, Default)]
pub struct PresenceRoster {
    users: BTreeMap<String, UserPresence>,
}

impl PresenceRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the roster.
    pub fn apply(&mut self, event: &PresenceEvent) {
        match event {
            PresenceEvent::UserOnline { user_id, at } => {
                let entry = self.users.entry(user_id.clone()).or_insert(UserPresence {
                    online: true,
                    last_seen: *at,
                    focus: None,
                });
                entry.online = true;
                entry.last_seen = *at;
            }
            PresenceEvent::UserOffline { user_id, at } => {
                if let Some(entry) = self.users.get_mut(user_id) {
                    entry.online = false;
                    entry.last_seen = *at;
                    entry.focus = None;
                }
            }
            PresenceEvent::ItemFocused {
                user_id,
                item_id,
                action,
                at,
            } => {
                let entry = self.users.entry(user_id.clone()).or_insert(UserPresence {
                    online: true,
                    last_seen: *at,
                    focus: None,
                });
                entry.online = true;
                entry.last_seen = *at;
                entry.focus = Some((item_id.clone(), *action));
            }
            PresenceEvent::ItemBlurred { user_id, item_id, at } => {
                if let Some(entry) = self.users.get_mut(user_id) {
                    entry.last_seen = *at;
                    if entry.focus.as_ref().map(|(id, _)| id.as_str()) == Some(item_id.as_str()) {
                        entry.focus = None;
                    }
                }
            }
        }
    }

    /// Fold a whole event batch, in order.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a PresenceEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn is_online(&self, user_id: &str) -> bool {
        self.users.get(user_id).map(|u| u.online).unwrap_or(false)
    }

    pub fn last_seen(&self, user_id: &str) -> Option<DateTime<Utc>> {
        self.users.get(user_id).map(|u| u.last_seen)
    }

    /// Online users, sorted by id.
    pub fn online_users(&self) -> Vec<&str> {
        self.users
            .iter()
            .filter(|(_, u)| u.online)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Users currently focused on the given item.
    pub fn focused_on(&self, item_id: &str) -> Vec<(&str, PresenceAction)> {
        self.users
            .iter()
            .filter_map(|(id, u)| match &u.focus {
                Some((focused, action)) if focused == item_id => Some((id.as_str(), *action)),
                _ => None,
            })
            .collect()
    }
}
