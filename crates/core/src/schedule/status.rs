use chrono::{Duration, NaiveDateTime};
use marquee_catalog::MovieIndex;
use serde::{Deserialize, Serialize};

use crate::schedule::screening::{Maintenance, Screening, MAINTENANCE_WINDOW_MINUTES};

/// What a theater is doing right now, derived from the schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TheaterActivity {
    Showing { movie_title: Option<String> },
    Cleaning,
    Available,
}

impl std::fmt::Display for TheaterActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TheaterActivity::Showing {
                movie_title: Some(title),
            } => write!(f, "Showing {}", title),
            TheaterActivity::Showing { movie_title: None } => write!(f, "Showing"),
            TheaterActivity::Cleaning => write!(f, "Cleaning"),
            TheaterActivity::Available => write!(f, "Available"),
        }
    }
}

/// Derive a theater's activity at `now` with the standard 60-minute
/// maintenance window.
pub fn resolve_status<'a, S, M>(
    theater_id: u64,
    screenings: S,
    maintenances: M,
    movies: &MovieIndex,
    now: NaiveDateTime,
) -> TheaterActivity
where
    S: IntoIterator<Item = &'a Screening>,
    M: IntoIterator<Item = &'a Maintenance>,
{
    resolve_status_with_window(
        theater_id,
        screenings,
        maintenances,
        movies,
        now,
        Duration::minutes(MAINTENANCE_WINDOW_MINUTES),
    )
}

/// Same derivation with a caller-supplied maintenance window length.
///
/// Priority, first match wins: an in-progress screening, then an active
/// maintenance window, then available. A screening and a maintenance
/// overlapping on the same theater resolves to `Showing`. A screening whose
/// movie is no longer in the program still shows, with no title.
pub fn resolve_status_with_window<'a, S, M>(
    theater_id: u64,
    screenings: S,
    maintenances: M,
    movies: &MovieIndex,
    now: NaiveDateTime,
    window: Duration,
) -> TheaterActivity
where
    S: IntoIterator<Item = &'a Screening>,
    M: IntoIterator<Item = &'a Maintenance>,
{
    let running = screenings
        .into_iter()
        .find(|s| s.theater_id == theater_id && s.is_running_at(now));

    if let Some(screening) = running {
        let movie_title = movies.get(&screening.movie_id).map(|m| m.title.clone());
        return TheaterActivity::Showing { movie_title };
    }

    let cleaning = maintenances
        .into_iter()
        .any(|m| m.theater_id == theater_id && m.is_active_at(now, window));

    if cleaning {
        TheaterActivity::Cleaning
    } else {
        TheaterActivity::Available
    }
}
