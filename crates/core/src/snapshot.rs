use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use marquee_catalog::Movie;
use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};

use crate::ids::IdAllocator;
use crate::retail::Product;
use crate::schedule::screening::{Maintenance, Screening};
use crate::staff::{Role, RoleAssignment, StaffMember};
use crate::store::BackOffice;
use crate::theater::Theater;

/// A saved copy of the whole back-office state.
#[derive(Serialize, Deserialize, Clone)]
pub struct Snapshot {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub theaters: Vec<Theater>,
    pub movies: Vec<Movie>,
    pub screenings: Vec<Screening>,
    pub maintenances: Vec<Maintenance>,
    pub staff: Vec<StaffMember>,
    pub roles: Vec<Role>,
    pub assignments: Vec<RoleAssignment>,
    pub products: Vec<Product>,
    pub next_id: u64,
    pub version: String, // Schema version for future compatibility
}

impl Snapshot {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            created_at: now,
            modified_at: now,
            theaters: Vec::new(),
            movies: Vec::new(),
            screenings: Vec::new(),
            maintenances: Vec::new(),
            staff: Vec::new(),
            roles: Vec::new(),
            assignments: Vec::new(),
            products: Vec::new(),
            next_id: 1,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn from_store(store: &BackOffice, name: String) -> Self {
        let mut snapshot = Self::new(name);
        snapshot.capture(store);
        snapshot
    }

    fn capture(&mut self, store: &BackOffice) {
        self.theaters = store.theaters.values().cloned().collect();
        self.movies = store.movies.values().cloned().collect();
        self.screenings = store.screenings.values().cloned().collect();
        self.maintenances = store.maintenances.values().cloned().collect();
        self.staff = store.staff.values().cloned().collect();
        self.roles = store.roles.values().cloned().collect();
        self.assignments = store.assignments.values().cloned().collect();
        self.products = store.products.values().cloned().collect();
        self.next_id = store.ids.next_id();

        // Stable file diffs
        self.theaters.sort_by_key(|t| t.id);
        self.movies.sort_by_key(|m| m.id);
        self.screenings.sort_by_key(|s| s.id);
        self.maintenances.sort_by_key(|m| m.id);
        self.staff.sort_by_key(|s| s.id);
        self.roles.sort_by_key(|r| r.id);
        self.assignments.sort_by_key(|a| a.id);
        self.products.sort_by_key(|p| p.id);
    }

    /// Rebuild a store from this snapshot. The allocator resumes past both
    /// the saved high-water mark and every id actually present.
    pub fn apply_to(&self, store: &mut BackOffice) {
        let mut ids = IdAllocator::starting_at(self.next_id);

        store.theaters = self.theaters.iter().cloned().map(|t| (t.id, t)).collect();
        store.movies = self.movies.iter().cloned().map(|m| (m.id, m)).collect();
        store.screenings = self.screenings.iter().cloned().map(|s| (s.id, s)).collect();
        store.maintenances = self
            .maintenances
            .iter()
            .cloned()
            .map(|m| (m.id, m))
            .collect();
        store.staff = self.staff.iter().cloned().map(|s| (s.id, s)).collect();
        store.roles = self.roles.iter().cloned().map(|r| (r.id, r)).collect();
        store.assignments = self
            .assignments
            .iter()
            .cloned()
            .map(|a| (a.id, a))
            .collect();
        store.products = self.products.iter().cloned().map(|p| (p.id, p)).collect();

        for id in store.theaters.keys().chain(store.movies.keys()) {
            ids.reserve_through(*id);
        }
        for id in store
            .screenings
            .keys()
            .chain(store.maintenances.keys())
            .chain(store.staff.keys())
            .chain(store.roles.keys())
            .chain(store.assignments.keys())
            .chain(store.products.keys())
        {
            ids.reserve_through(*id);
        }
        store.ids = ids;
    }
}

pub struct SnapshotManager {
    snapshots_directory: PathBuf,
    current_snapshot: Option<Snapshot>,
    current_path: Option<PathBuf>,
}

impl SnapshotManager {
    pub fn new(snapshots_directory: PathBuf) -> Self {
        Self {
            snapshots_directory,
            current_snapshot: None,
            current_path: None,
        }
    }

    /// Save the store under the current snapshot's name and path, or as a
    /// new file named after the snapshot.
    pub fn save_snapshot(&mut self, store: &BackOffice) -> Result<PathBuf> {
        let snapshot = if let Some(snapshot) = &mut self.current_snapshot {
            // Update with latest store state
            snapshot.capture(store);
            snapshot.modified_at = Utc::now();
            snapshot.clone()
        } else {
            Snapshot::from_store(store, "Untitled Venue".to_string())
        };

        let path = if let Some(path) = &self.current_path {
            path.clone()
        } else {
            let sanitized_name = snapshot.name.replace(" ", "_").to_lowercase();
            self.snapshots_directory
                .join(format!("{}.marquee", sanitized_name))
        };

        let file = File::create(&path)?;
        to_writer_pretty(file, &snapshot)?;

        self.current_snapshot = Some(snapshot);
        self.current_path = Some(path.clone());

        Ok(path)
    }

    pub fn save_snapshot_as(
        &mut self,
        store: &BackOffice,
        name: String,
        path: PathBuf,
    ) -> Result<PathBuf> {
        let mut snapshot = Snapshot::from_store(store, name);
        snapshot.modified_at = Utc::now();

        let file = File::create(&path)?;
        to_writer_pretty(file, &snapshot)?;

        self.current_snapshot = Some(snapshot);
        self.current_path = Some(path.clone());

        Ok(path)
    }

    pub fn load_snapshot(&mut self, path: &Path) -> Result<Snapshot> {
        let file = File::open(path)?;
        let snapshot: Snapshot = from_reader(file)?;

        self.current_snapshot = Some(snapshot.clone());
        self.current_path = Some(path.to_path_buf());

        Ok(snapshot)
    }

    pub fn apply_snapshot_to_store(&self, store: &mut BackOffice) -> Result<()> {
        if let Some(snapshot) = &self.current_snapshot {
            snapshot.apply_to(store);
            Ok(())
        } else {
            Err(anyhow::anyhow!("No snapshot is currently loaded"))
        }
    }

    pub fn list_snapshots(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.snapshots_directory)?;

        let mut snapshots = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && path.extension().map_or(false, |ext| ext == "marquee") {
                snapshots.push(path);
            }
        }

        Ok(snapshots)
    }

    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.current_snapshot.as_ref()
    }
}
