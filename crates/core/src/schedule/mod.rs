pub mod conflict;
pub mod screening;
pub mod status;

// Re-export for convenience
pub use conflict::has_conflict;
pub use screening::{Maintenance, Screening, MAINTENANCE_WINDOW_MINUTES};
pub use status::{resolve_status, resolve_status_with_window, TheaterActivity};
