//! # Project Data Structures
//!
//! A `Project` groups the rooms of one job. Each room holds its own input
//! record; the project runs them all and merges the results into a single
//! shopping list.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, client, site, author, timestamps)
//! ├── settings: EngineSettings (default waste, tile material, separator)
//! └── rooms: HashMap<Uuid, Room> (label + input record)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::inputs::{CoveringType, Environment, Inputs};
//! use takeoff_core::project::{Project, Room};
//!
//! let mut project = Project::new("Ana Souza", "Casa Lima", "Rua das Flores 12");
//!
//! let mut inputs = Inputs::new(CoveringType::Stone, Environment::Dry);
//! inputs.area_override_m2 = Some(20.0);
//! project.add_room(Room::new("Patio", inputs));
//!
//! let takeoffs = project.calculate_rooms();
//! let list = Project::shopping_list(&takeoffs);
//! assert!(list.iter().any(|item| item.name == "Natural stone"));
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::calculations::calculate_with;
use crate::config::EngineSettings;
use crate::errors::{CalcError, CalcResult};
use crate::inputs::Inputs;
use crate::result::{MaterialItem, TakeoffResult, Unit};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, client, site)
    pub meta: ProjectMetadata,

    /// Defaults applied to every room
    #[serde(default)]
    pub settings: EngineSettings,

    /// Rooms, keyed by UUID
    #[serde(default)]
    pub rooms: HashMap<Uuid, Room>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// ```rust
    /// use takeoff_core::project::Project;
    ///
    /// let project = Project::new("Ana Souza", "Casa Lima", "Rua das Flores 12");
    /// assert_eq!(project.meta.client, "Casa Lima");
    /// assert_eq!(project.room_count(), 0);
    /// ```
    pub fn new(author: impl Into<String>, client: impl Into<String>, site: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                author: author.into(),
                client: client.into(),
                site: site.into(),
                created: now,
                modified: now,
            },
            settings: EngineSettings::default(),
            rooms: HashMap::new(),
        }
    }

    /// Parse a project from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a room. Returns the UUID assigned to it.
    pub fn add_room(&mut self, room: Room) -> Uuid {
        let id = Uuid::new_v4();
        self.rooms.insert(id, room);
        self.touch();
        id
    }

    /// Remove a room by UUID.
    pub fn remove_room(&mut self, id: &Uuid) -> Option<Room> {
        let room = self.rooms.remove(id);
        if room.is_some() {
            self.touch();
        }
        room
    }

    pub fn get_room(&self, id: &Uuid) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Run every room, ordered by label.
    ///
    /// A room that fails validation keeps its error; the others still run.
    pub fn calculate_rooms(&self) -> Vec<RoomTakeoff> {
        let mut rooms: Vec<_> = self.rooms.iter().collect();
        rooms.sort_by(|(id_a, a), (id_b, b)| a.label.cmp(&b.label).then(id_a.cmp(id_b)));
        rooms
            .into_iter()
            .map(|(id, room)| {
                let outcome = calculate_with(&room.inputs, &self.settings);
                if let Err(err) = &outcome {
                    warn!(room = %room.label, %err, correctable = err.is_user_correctable(), "room skipped");
                }
                RoomTakeoff::new(*id, room.label.clone(), outcome)
            })
            .collect()
    }

    /// Items of every successful room in `takeoffs` merged by name and unit,
    /// sorted by name.
    pub fn shopping_list(takeoffs: &[RoomTakeoff]) -> Vec<MaterialItem> {
        let mut merged: BTreeMap<(String, Unit), (f64, Vec<String>)> = BTreeMap::new();
        for takeoff in takeoffs {
            let Some(result) = &takeoff.result else {
                continue;
            };
            for item in &result.items {
                let entry = merged.entry((item.name.clone(), item.unit)).or_insert((0.0, Vec::new()));
                entry.0 += item.quantity;
                entry.1.push(takeoff.label.clone());
            }
        }
        merged
            .into_iter()
            .map(|((name, unit), (quantity, labels))| {
                MaterialItem::new(name, unit, quantity).with_note(labels.join(", "))
            })
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Who prepared the take-off
    pub author: String,

    /// Client name
    pub client: String,

    /// Job site address
    pub site: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// One area of the job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// User-facing name, e.g. "Kitchen"
    pub label: String,
    pub inputs: Inputs,
}

impl Room {
    pub fn new(label: impl Into<String>, inputs: Inputs) -> Self {
        Room {
            label: label.into(),
            inputs,
        }
    }
}

/// Outcome of one room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTakeoff {
    pub id: Uuid,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TakeoffResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CalcError>,
}

impl RoomTakeoff {
    fn new(id: Uuid, label: String, outcome: CalcResult<TakeoffResult>) -> Self {
        let (result, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(err) => (None, Some(err)),
        };
        RoomTakeoff { id, label, result, error }
    }
}
