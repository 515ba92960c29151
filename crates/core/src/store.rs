use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use marquee_catalog::{Movie, MovieIndex, MovieProfile};
use thiserror::Error;

use crate::config::Settings;
use crate::ids::IdAllocator;
use crate::retail::Product;
use crate::schedule::conflict::has_conflict;
use crate::schedule::screening::{Maintenance, Screening, MAINTENANCE_WINDOW_MINUTES};
use crate::schedule::status::{resolve_status_with_window, TheaterActivity};
use crate::staff::{Role, RoleAssignment, StaffMember};
use crate::theater::{Theater, TheaterType, MAINTENANCE_CADENCE_DAYS};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Unknown theater id {0}")]
    UnknownTheater(u64),
    #[error("Unknown movie id {0}")]
    UnknownMovie(u64),
    #[error("Unknown screening id {0}")]
    UnknownScreening(u64),
    #[error("Unknown maintenance id {0}")]
    UnknownMaintenance(u64),
    #[error("Unknown staff id {0}")]
    UnknownStaff(u64),
    #[error("Unknown role id {0}")]
    UnknownRole(u64),
    #[error("Unknown assignment id {0}")]
    UnknownAssignment(u64),
    #[error("Unknown product id {0}")]
    UnknownProduct(u64),
    #[error("Theater capacity must be greater than zero")]
    InvalidCapacity,
    #[error("Shift must end after it starts")]
    EmptyShift,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Unknown theater id {0}")]
    UnknownTheater(u64),
    #[error("Unknown movie id {0}")]
    UnknownMovie(u64),
    #[error("Movie has zero duration, screening would be empty")]
    EmptyInterval,
    #[error("Screening overlaps an existing screening in theater {theater_id}")]
    Conflict { theater_id: u64 },
}

/// The back-office store: every entity the admin screens work with, keyed by
/// id, mutated through well-defined operations. Single-threaded by design;
/// one mutation is fully applied before the next is accepted.
pub struct BackOffice {
    pub(crate) theaters: HashMap<u64, Theater>,
    pub(crate) movies: MovieIndex,
    pub(crate) screenings: HashMap<u64, Screening>,
    pub(crate) maintenances: HashMap<u64, Maintenance>,
    pub(crate) staff: HashMap<u64, StaffMember>,
    pub(crate) roles: HashMap<u64, Role>,
    pub(crate) assignments: HashMap<u64, RoleAssignment>,
    pub(crate) products: HashMap<u64, Product>,
    pub(crate) ids: IdAllocator,
    maintenance_window: Duration,
    maintenance_cadence: Duration,
}

impl Default for BackOffice {
    fn default() -> Self {
        BackOffice {
            theaters: HashMap::new(),
            movies: MovieIndex::new(),
            screenings: HashMap::new(),
            maintenances: HashMap::new(),
            staff: HashMap::new(),
            roles: HashMap::new(),
            assignments: HashMap::new(),
            products: HashMap::new(),
            ids: IdAllocator::new(),
            maintenance_window: Duration::minutes(MAINTENANCE_WINDOW_MINUTES),
            maintenance_cadence: Duration::days(MAINTENANCE_CADENCE_DAYS),
        }
    }
}

impl BackOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store tuned by the venue's settings: maintenance window length and
    /// cadence come from configuration instead of the defaults.
    pub fn with_settings(settings: &Settings) -> Self {
        let mut store = Self::default();
        store.apply_settings(settings);
        store
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.maintenance_window = Duration::minutes(settings.maintenance_window_minutes as i64);
        self.maintenance_cadence = Duration::days(settings.maintenance_cadence_days as i64);
    }

    /// A store whose allocator starts at a known value, for deterministic
    /// ids in tests.
    pub fn with_ids(ids: IdAllocator) -> Self {
        BackOffice {
            ids,
            ..Self::default()
        }
    }

    // Theaters

    pub fn add_theater(
        &mut self,
        name: &str,
        capacity: u32,
        theater_type: TheaterType,
        amenities: Vec<String>,
        today: NaiveDate,
    ) -> Result<u64, StoreError> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity);
        }

        let id = self.ids.issue();
        let theater = Theater::new(
            id,
            name,
            capacity,
            theater_type,
            amenities,
            today,
            self.maintenance_cadence,
        );
        log::info!("Adding theater {} ({})", theater.name, id);
        self.theaters.insert(id, theater);
        Ok(id)
    }

    pub fn update_theater(&mut self, theater: Theater) -> Result<(), StoreError> {
        if theater.capacity == 0 {
            return Err(StoreError::InvalidCapacity);
        }
        if !self.theaters.contains_key(&theater.id) {
            return Err(StoreError::UnknownTheater(theater.id));
        }

        self.theaters.insert(theater.id, theater);
        Ok(())
    }

    /// Removes a theater and cascade-deletes its screenings and
    /// maintenance windows.
    pub fn remove_theater(&mut self, id: u64) -> Result<Theater, StoreError> {
        let theater = self
            .theaters
            .remove(&id)
            .ok_or(StoreError::UnknownTheater(id))?;

        let screenings_before = self.screenings.len();
        let maintenances_before = self.maintenances.len();
        self.screenings.retain(|_, s| s.theater_id != id);
        self.maintenances.retain(|_, m| m.theater_id != id);

        log::info!(
            "Removed theater {} with {} screenings and {} maintenances",
            id,
            screenings_before - self.screenings.len(),
            maintenances_before - self.maintenances.len()
        );
        Ok(theater)
    }

    pub fn theater(&self, id: u64) -> Option<&Theater> {
        self.theaters.get(&id)
    }

    pub fn theaters(&self) -> impl Iterator<Item = &Theater> {
        self.theaters.values()
    }

    // Movies

    /// Book a title from the distributor catalog into the program.
    pub fn add_movie(&mut self, profile: &MovieProfile) -> u64 {
        let id = self.ids.issue();
        self.movies.insert(id, Movie::new(id, profile));
        id
    }

    pub fn update_movie(&mut self, movie: Movie) -> Result<(), StoreError> {
        if !self.movies.contains_key(&movie.id) {
            return Err(StoreError::UnknownMovie(movie.id));
        }
        self.movies.insert(movie.id, movie);
        Ok(())
    }

    /// Removing a movie leaves its screenings in place; they resolve with
    /// no title, matching the status resolver's degradation policy.
    pub fn remove_movie(&mut self, id: u64) -> Result<Movie, StoreError> {
        self.movies.remove(&id).ok_or(StoreError::UnknownMovie(id))
    }

    pub fn movie(&self, id: u64) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    // Scheduling

    /// Schedule a screening. The end time comes from the movie's running
    /// time; the add is rejected if the theater or movie is unknown, the
    /// movie has no running time, or the slot overlaps an existing
    /// screening in the same theater.
    pub fn schedule_screening(
        &mut self,
        theater_id: u64,
        movie_id: u64,
        start_time: NaiveDateTime,
    ) -> Result<u64, ScheduleError> {
        if !self.theaters.contains_key(&theater_id) {
            return Err(ScheduleError::UnknownTheater(theater_id));
        }
        let movie = self
            .movies
            .get(&movie_id)
            .ok_or(ScheduleError::UnknownMovie(movie_id))?;
        if movie.duration_minutes == 0 {
            return Err(ScheduleError::EmptyInterval);
        }

        let end_time = start_time + Duration::minutes(movie.duration_minutes as i64);
        if has_conflict(self.screenings.values(), theater_id, start_time, end_time) {
            log::warn!(
                "Rejecting screening of movie {} in theater {}: slot {} - {} is taken",
                movie_id,
                theater_id,
                start_time,
                end_time
            );
            return Err(ScheduleError::Conflict { theater_id });
        }

        let id = self.ids.issue();
        self.screenings.insert(
            id,
            Screening {
                id,
                movie_id,
                theater_id,
                start_time,
                end_time,
                tickets_sold: 0,
            },
        );
        Ok(id)
    }

    /// Dry-run the conflict check for a candidate slot.
    pub fn slot_is_free(
        &self,
        theater_id: u64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> bool {
        !has_conflict(self.screenings.values(), theater_id, start_time, end_time)
    }

    pub fn remove_screening(&mut self, id: u64) -> Result<Screening, StoreError> {
        self.screenings
            .remove(&id)
            .ok_or(StoreError::UnknownScreening(id))
    }

    pub fn record_ticket_sales(&mut self, id: u64, count: u32) -> Result<u32, StoreError> {
        let screening = self
            .screenings
            .get_mut(&id)
            .ok_or(StoreError::UnknownScreening(id))?;
        screening.tickets_sold += count;
        Ok(screening.tickets_sold)
    }

    pub fn screening(&self, id: u64) -> Option<&Screening> {
        self.screenings.get(&id)
    }

    pub fn screenings(&self) -> impl Iterator<Item = &Screening> {
        self.screenings.values()
    }

    /// The scheduling screen's list: optionally narrowed to one day and one
    /// theater, sorted by start time.
    pub fn screenings_filtered(
        &self,
        date: Option<NaiveDate>,
        theater_id: Option<u64>,
    ) -> Vec<&Screening> {
        let mut screenings: Vec<&Screening> = self
            .screenings
            .values()
            .filter(|s| date.map_or(true, |d| s.start_time.date() == d))
            .filter(|s| theater_id.map_or(true, |t| s.theater_id == t))
            .collect();
        screenings.sort_by_key(|s| (s.start_time, s.id));
        screenings
    }

    // Maintenance

    /// No overlap check against screenings here: the status resolver defines
    /// the outcome when the two collide (the screening wins).
    pub fn add_maintenance(
        &mut self,
        theater_id: u64,
        scheduled_date: NaiveDateTime,
        description: &str,
    ) -> Result<u64, StoreError> {
        if !self.theaters.contains_key(&theater_id) {
            return Err(StoreError::UnknownTheater(theater_id));
        }

        let id = self.ids.issue();
        self.maintenances.insert(
            id,
            Maintenance {
                id,
                theater_id,
                scheduled_date,
                description: description.to_string(),
            },
        );
        Ok(id)
    }

    pub fn remove_maintenance(&mut self, id: u64) -> Result<Maintenance, StoreError> {
        self.maintenances
            .remove(&id)
            .ok_or(StoreError::UnknownMaintenance(id))
    }

    pub fn maintenances(&self) -> impl Iterator<Item = &Maintenance> {
        self.maintenances.values()
    }

    // Status derivation

    /// What the theater is doing at `now`, using the configured maintenance
    /// window. Total: unknown theater ids simply resolve as available.
    pub fn status_of(&self, theater_id: u64, now: NaiveDateTime) -> TheaterActivity {
        resolve_status_with_window(
            theater_id,
            self.screenings.values(),
            self.maintenances.values(),
            &self.movies,
            now,
            self.maintenance_window,
        )
    }

    // Staff and shifts

    pub fn add_staff(&mut self, name: &str, email: &str, phone: &str) -> u64 {
        let id = self.ids.issue();
        self.staff.insert(
            id,
            StaffMember {
                id,
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                is_active: true,
            },
        );
        id
    }

    pub fn update_staff(&mut self, member: StaffMember) -> Result<(), StoreError> {
        if !self.staff.contains_key(&member.id) {
            return Err(StoreError::UnknownStaff(member.id));
        }
        self.staff.insert(member.id, member);
        Ok(())
    }

    /// Removes a staff member and cascade-deletes their shift assignments.
    pub fn remove_staff(&mut self, id: u64) -> Result<StaffMember, StoreError> {
        let member = self.staff.remove(&id).ok_or(StoreError::UnknownStaff(id))?;
        self.assignments.retain(|_, a| a.staff_id != id);
        Ok(member)
    }

    pub fn staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.staff.values()
    }

    pub fn staff_member(&self, id: u64) -> Option<&StaffMember> {
        self.staff.get(&id)
    }

    pub fn add_role(&mut self, name: &str, description: &str) -> u64 {
        let id = self.ids.issue();
        self.roles.insert(
            id,
            Role {
                id,
                name: name.to_string(),
                description: description.to_string(),
            },
        );
        id
    }

    /// Removes a role and cascade-deletes assignments that reference it.
    pub fn remove_role(&mut self, id: u64) -> Result<Role, StoreError> {
        let role = self.roles.remove(&id).ok_or(StoreError::UnknownRole(id))?;
        self.assignments.retain(|_, a| a.role_id != id);
        Ok(role)
    }

    pub fn role(&self, id: u64) -> Option<&Role> {
        self.roles.get(&id)
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    pub fn assign_role(
        &mut self,
        staff_id: u64,
        role_id: u64,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<u64, StoreError> {
        if !self.staff.contains_key(&staff_id) {
            return Err(StoreError::UnknownStaff(staff_id));
        }
        if !self.roles.contains_key(&role_id) {
            return Err(StoreError::UnknownRole(role_id));
        }
        if end_time <= start_time {
            return Err(StoreError::EmptyShift);
        }

        let id = self.ids.issue();
        self.assignments.insert(
            id,
            RoleAssignment {
                id,
                staff_id,
                role_id,
                start_time,
                end_time,
            },
        );
        Ok(id)
    }

    pub fn remove_assignment(&mut self, id: u64) -> Result<RoleAssignment, StoreError> {
        self.assignments
            .remove(&id)
            .ok_or(StoreError::UnknownAssignment(id))
    }

    pub fn assignments(&self) -> impl Iterator<Item = &RoleAssignment> {
        self.assignments.values()
    }

    // Products

    pub fn add_product(&mut self, product: Product) -> u64 {
        let id = self.ids.issue();
        self.products.insert(id, Product { id, ..product });
        id
    }

    pub fn update_product(&mut self, product: Product) -> Result<(), StoreError> {
        if !self.products.contains_key(&product.id) {
            return Err(StoreError::UnknownProduct(product.id));
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    pub fn remove_product(&mut self, id: u64) -> Result<Product, StoreError> {
        self.products
            .remove(&id)
            .ok_or(StoreError::UnknownProduct(id))
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

#[cfg(test)]
mod tests {
    use marquee_catalog::MovieLibrary;

    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
    }

    fn store_with_theater_and_movie() -> (BackOffice, u64, u64) {
        let mut store = BackOffice::new();
        let theater_id = store
            .add_theater("Sala 1", 100, TheaterType::TwoD, vec![], today())
            .unwrap();
        let library = MovieLibrary::new();
        let movie_id = store.add_movie(library.get("spider-man-no-way-home").unwrap());
        (store, theater_id, movie_id)
    }

    #[test]
    fn test_zero_capacity_theater_is_rejected() {
        let mut store = BackOffice::new();
        assert_eq!(
            store.add_theater("Broken", 0, TheaterType::TwoD, vec![], today()),
            Err(StoreError::InvalidCapacity)
        );
    }

    #[test]
    fn test_schedule_screening_computes_end_from_running_time() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();

        let id = store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();
        let screening = store.screening(id).unwrap();

        // 148 minutes after 10:00
        assert_eq!(screening.end_time, at(12, 28));
        assert_eq!(screening.tickets_sold, 0);
    }

    #[test]
    fn test_schedule_rejects_overlap_in_same_theater() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();

        assert_eq!(
            store.schedule_screening(theater_id, movie_id, at(11, 0)),
            Err(ScheduleError::Conflict { theater_id })
        );
    }

    #[test]
    fn test_schedule_allows_back_to_back() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();

        // Previous screening ends exactly at 12:28
        assert!(store
            .schedule_screening(theater_id, movie_id, at(12, 28))
            .is_ok());
    }

    #[test]
    fn test_schedule_allows_overlap_in_other_theater() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        let other = store
            .add_theater("Sala 2", 150, TheaterType::ThreeD, vec![], today())
            .unwrap();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();

        assert!(store.schedule_screening(other, movie_id, at(11, 0)).is_ok());
    }

    #[test]
    fn test_schedule_rejects_unknown_movie() {
        let (mut store, theater_id, _) = store_with_theater_and_movie();
        assert_eq!(
            store.schedule_screening(theater_id, 999, at(10, 0)),
            Err(ScheduleError::UnknownMovie(999))
        );
    }

    #[test]
    fn test_schedule_rejects_unknown_theater() {
        let (mut store, _, movie_id) = store_with_theater_and_movie();
        assert_eq!(
            store.schedule_screening(999, movie_id, at(10, 0)),
            Err(ScheduleError::UnknownTheater(999))
        );
    }

    #[test]
    fn test_remove_theater_cascades() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();
        store
            .add_maintenance(theater_id, at(20, 0), "Projector check")
            .unwrap();

        store.remove_theater(theater_id).unwrap();

        assert_eq!(store.screenings().count(), 0);
        assert_eq!(store.maintenances().count(), 0);
    }

    #[test]
    fn test_remove_movie_leaves_screenings_untitled() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();
        store.remove_movie(movie_id).unwrap();

        assert_eq!(store.screenings().count(), 1);
        assert_eq!(
            store.status_of(theater_id, at(11, 0)),
            TheaterActivity::Showing { movie_title: None }
        );
    }

    #[test]
    fn test_status_of_full_priority_order() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();
        store
            .add_maintenance(theater_id, at(13, 0), "Cleaning")
            .unwrap();

        assert_eq!(
            store.status_of(theater_id, at(11, 0)),
            TheaterActivity::Showing {
                movie_title: Some("Spider-Man: No Way Home".to_string())
            }
        );
        assert_eq!(
            store.status_of(theater_id, at(13, 30)),
            TheaterActivity::Cleaning
        );
        assert_eq!(
            store.status_of(theater_id, at(15, 0)),
            TheaterActivity::Available
        );
    }

    #[test]
    fn test_configured_maintenance_window_drives_status() {
        let settings = Settings {
            maintenance_window_minutes: 90,
            ..Settings::default()
        };
        let mut store = BackOffice::with_settings(&settings);
        let theater_id = store
            .add_theater("Sala 1", 100, TheaterType::TwoD, vec![], today())
            .unwrap();
        store
            .add_maintenance(theater_id, at(13, 0), "Deep cleaning")
            .unwrap();

        // 14:15 is past the default 60-minute window but inside the
        // configured 90-minute one.
        assert_eq!(
            store.status_of(theater_id, at(14, 15)),
            TheaterActivity::Cleaning
        );
        assert_eq!(
            store.status_of(theater_id, at(14, 30)),
            TheaterActivity::Available
        );

        // A default store treats the same maintenance as already over.
        let mut default_store = BackOffice::new();
        let default_theater = default_store
            .add_theater("Sala 1", 100, TheaterType::TwoD, vec![], today())
            .unwrap();
        default_store
            .add_maintenance(default_theater, at(13, 0), "Deep cleaning")
            .unwrap();
        assert_eq!(
            default_store.status_of(default_theater, at(14, 15)),
            TheaterActivity::Available
        );
    }

    #[test]
    fn test_configured_cadence_drives_next_maintenance() {
        let settings = Settings {
            maintenance_cadence_days: 7,
            ..Settings::default()
        };
        let mut store = BackOffice::with_settings(&settings);
        let theater_id = store
            .add_theater("Sala 1", 100, TheaterType::TwoD, vec![], today())
            .unwrap();

        assert_eq!(
            store.theater(theater_id).unwrap().next_maintenance,
            today() + Duration::days(7)
        );
    }

    #[test]
    fn test_slot_is_free_dry_run() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();

        assert!(!store.slot_is_free(theater_id, at(11, 0), at(13, 0)));
        assert!(store.slot_is_free(theater_id, at(12, 28), at(14, 0)));
        assert!(store.slot_is_free(999, at(11, 0), at(13, 0)));
    }

    #[test]
    fn test_ticket_sales_accumulate() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        let id = store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();

        assert_eq!(store.record_ticket_sales(id, 30).unwrap(), 30);
        assert_eq!(store.record_ticket_sales(id, 45).unwrap(), 75);
    }

    #[test]
    fn test_screenings_filtered_by_date_and_theater() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        let other = store
            .add_theater("Sala 2", 150, TheaterType::ThreeD, vec![], today())
            .unwrap();
        store
            .schedule_screening(theater_id, movie_id, at(14, 0))
            .unwrap();
        store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();
        store.schedule_screening(other, movie_id, at(10, 0)).unwrap();

        let all_today = store.screenings_filtered(Some(today()), None);
        assert_eq!(all_today.len(), 3);
        // Sorted by start time
        assert!(all_today[0].start_time <= all_today[1].start_time);

        let sala_1 = store.screenings_filtered(Some(today()), Some(theater_id));
        assert_eq!(sala_1.len(), 2);

        let tomorrow = today() + Duration::days(1);
        assert!(store.screenings_filtered(Some(tomorrow), None).is_empty());
    }

    #[test]
    fn test_remove_staff_cascades_assignments() {
        let mut store = BackOffice::new();
        let staff_id = store.add_staff("Ana", "ana@example.com", "555-0100");
        let role_id = store.add_role("Projectionist", "Runs the booth");
        store
            .assign_role(
                staff_id,
                role_id,
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            )
            .unwrap();

        store.remove_staff(staff_id).unwrap();
        assert_eq!(store.assignments().count(), 0);

        // Role itself survives
        assert!(store.role(role_id).is_some());
    }

    #[test]
    fn test_remove_role_cascades_assignments() {
        let mut store = BackOffice::new();
        let staff_id = store.add_staff("Ana", "ana@example.com", "555-0100");
        let role_id = store.add_role("Projectionist", "Runs the booth");
        store
            .assign_role(
                staff_id,
                role_id,
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            )
            .unwrap();

        store.remove_role(role_id).unwrap();
        assert_eq!(store.assignments().count(), 0);
        assert!(store.staff_member(staff_id).is_some());
    }

    #[test]
    fn test_assign_role_rejects_empty_shift() {
        let mut store = BackOffice::new();
        let staff_id = store.add_staff("Ana", "ana@example.com", "555-0100");
        let role_id = store.add_role("Usher", "Seats guests");
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        assert_eq!(
            store.assign_role(staff_id, role_id, nine, nine),
            Err(StoreError::EmptyShift)
        );
    }

    #[test]
    fn test_ids_are_unique_across_entity_kinds() {
        let (mut store, theater_id, movie_id) = store_with_theater_and_movie();
        let staff_id = store.add_staff("Ana", "ana@example.com", "555-0100");
        let screening_id = store
            .schedule_screening(theater_id, movie_id, at(10, 0))
            .unwrap();

        let mut ids = vec![theater_id, movie_id, staff_id, screening_id];
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
