pub use config::{ConfigError, ConfigManager, ConfigSchema, Settings};
pub use ids::IdAllocator;
pub use retail::{Product, ProductCategory};
pub use schedule::conflict::has_conflict;
pub use schedule::screening::{Maintenance, Screening, MAINTENANCE_WINDOW_MINUTES};
pub use schedule::status::{resolve_status, resolve_status_with_window, TheaterActivity};
pub use snapshot::{Snapshot, SnapshotManager};
pub use staff::{Role, RoleAssignment, StaffMember};
pub use store::{BackOffice, ScheduleError, StoreError};
pub use theater::{Theater, TheaterStatus, TheaterType, MAINTENANCE_CADENCE_DAYS};

mod config;
mod ids;
mod retail;
pub mod schedule;
mod snapshot;
mod staff;
mod store;
mod theater;
