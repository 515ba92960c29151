use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// A shift: one staff member working one role between two times of day.
/// Staff and role are referenced by id and resolved at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub id: u64,
    pub staff_id: u64,
    pub role_id: u64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
