use chrono::NaiveDateTime;

use crate::schedule::screening::Screening;

/// True iff the candidate interval overlaps an existing screening in the
/// same theater.
///
/// Open-interval test: two screenings conflict when each starts before the
/// other ends, so back-to-back showings that touch at an endpoint are fine.
/// Linear scan; a theater's slate is short enough that nothing fancier pays
/// for itself.
pub fn has_conflict<'a, I>(
    existing: I,
    theater_id: u64,
    candidate_start: NaiveDateTime,
    candidate_end: NaiveDateTime,
) -> bool
where
    I: IntoIterator<Item = &'a Screening>,
{
    existing.into_iter().any(|screening| {
        screening.theater_id == theater_id
            && screening.start_time < candidate_end
            && screening.end_time > candidate_start
    })
}
