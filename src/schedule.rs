//! Past/upcoming classification of shows.
//!
//! Nothing about a show's timing is stored; it is derived from `start_time`
//! against a reference time every time it is read. Every call site goes
//! through [`classify`] so the boundary at `now` is the same everywhere.

use std::cmp::Ordering;

use chrono::{NaiveDateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

/// A show starting exactly at `now` is neither past nor upcoming.
pub fn classify(start_time: NaiveDateTime, now: NaiveDateTime) -> Option<ShowTiming> {
    match start_time.cmp(&now) {
        Ordering::Less => Some(ShowTiming::Past),
        Ordering::Greater => Some(ShowTiming::Upcoming),
        Ordering::Equal => None,
    }
}

pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    classify(start_time, now) == Some(ShowTiming::Upcoming)
}

pub fn count_upcoming<I>(start_times: I, now: NaiveDateTime) -> usize
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    start_times
        .into_iter()
        .filter(|start_time| is_upcoming(*start_time, now))
        .count()
}

/// Current reference time. Shows are stored in naive UTC.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[derive(Debug)]
pub struct Partition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Split `items` into past and upcoming, dropping anything exactly at `now`.
pub fn partition<T, I, F>(items: I, start_time: F, now: NaiveDateTime) -> Partition<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> NaiveDateTime,
{
    let mut partition = Partition {
        past: vec![],
        upcoming: vec![],
    };
    for item in items {
        match classify(start_time(&item), now) {
            Some(ShowTiming::Past) => partition.past.push(item),
            Some(ShowTiming::Upcoming) => partition.upcoming.push(item),
            None => {}
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn strictly_before_is_past() {
        assert_eq!(classify(at(9), at(10)), Some(ShowTiming::Past));
    }

    #[test]
    fn strictly_after_is_upcoming() {
        assert_eq!(classify(at(11), at(10)), Some(ShowTiming::Upcoming));
    }

    #[test]
    fn exactly_now_is_neither() {
        assert_eq!(classify(at(10), at(10)), None);
        assert!(!is_upcoming(at(10), at(10)));
    }

    #[test]
    fn one_second_matters() {
        let now = at(10);
        assert_eq!(
            classify(now + Duration::seconds(1), now),
            Some(ShowTiming::Upcoming)
        );
        assert_eq!(
            classify(now - Duration::seconds(1), now),
            Some(ShowTiming::Past)
        );
    }

    #[test]
    fn partition_drops_the_boundary() {
        let split = partition(vec![at(8), at(10), at(12), at(14)], |t| *t, at(10));
        assert_eq!(split.past, vec![at(8)]);
        assert_eq!(split.upcoming, vec![at(12), at(14)]);
    }

    #[test]
    fn count_upcoming_ignores_past_and_now() {
        assert_eq!(count_upcoming(vec![at(8), at(10), at(12)], at(10)), 1);
        assert_eq!(count_upcoming(Vec::new(), at(10)), 0);
    }
}
