use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default days between routine maintenance visits; the store overrides
/// this from Settings.
pub const MAINTENANCE_CADENCE_DAYS: i64 = 30;

/// A physical screening room.
///
/// `status` is the label last written by the UI; it is display bookkeeping
/// only. The authoritative state at any instant comes from
/// [`resolve_status`](crate::schedule::status::resolve_status).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theater {
    pub id: u64,
    pub name: String,
    pub capacity: u32,
    pub theater_type: TheaterType,
    pub amenities: Vec<String>,
    pub status: TheaterStatus,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TheaterType {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
    #[serde(rename = "IMAX")]
    Imax,
}

impl std::fmt::Display for TheaterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TheaterType::TwoD => write!(f, "2D"),
            TheaterType::ThreeD => write!(f, "3D"),
            TheaterType::Imax => write!(f, "IMAX"),
        }
    }
}

/// The stored display label. Never trusted at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TheaterStatus {
    Available,
    Occupied,
    Maintenance,
}

impl Theater {
    /// New theaters open as available with a maintenance visit penciled in
    /// one cadence from `today`.
    pub fn new(
        id: u64,
        name: &str,
        capacity: u32,
        theater_type: TheaterType,
        amenities: Vec<String>,
        today: NaiveDate,
        cadence: chrono::Duration,
    ) -> Self {
        Theater {
            id,
            name: name.to_string(),
            capacity,
            theater_type,
            amenities,
            status: TheaterStatus::Available,
            last_maintenance: today,
            next_maintenance: today + cadence,
        }
    }
}
