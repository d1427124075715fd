use chrono::NaiveDateTime;
use serde::Serialize;

/// Shows split around an evaluation instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSchedule<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for ShowSchedule<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

impl<T> ShowSchedule<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// A show is upcoming only when it starts strictly after `now`.
/// A show starting exactly at `now` is past.
pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time > now
}

/// Partitions `shows` into past and upcoming, preserving input order.
pub fn partition_shows<T, F>(shows: impl IntoIterator<Item = T>, now: NaiveDateTime, start_time: F) -> ShowSchedule<T>
where
    F: Fn(&T) -> NaiveDateTime,
{
    let mut schedule = ShowSchedule::default();
    for show in shows {
        if is_upcoming(start_time(&show), now) {
            schedule.upcoming.push(show);
        } else {
            schedule.past.push(show);
        }
    }
    schedule
}

/// Renders a stored digit string as `XXX-XXX-XXXX`.
///
/// Digits past the tenth stay attached to the last group. Anything shorter
/// than ten digits is returned unchanged.
pub fn format_phone(digits: &str) -> String {
    if digits.len() < 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }
    format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(hour, min, sec).unwrap()
    }

    #[test]
    fn test_boundary_instant_is_past() {
        let now = at(12, 0, 0);
        let shows = vec![now - Duration::seconds(1), now, now + Duration::seconds(1)];

        let schedule = partition_shows(shows, now, |t| *t);

        assert_eq!(schedule.past, vec![now - Duration::seconds(1), now]);
        assert_eq!(schedule.upcoming, vec![now + Duration::seconds(1)]);
        assert_eq!(schedule.past_count(), 2);
        assert_eq!(schedule.upcoming_count(), 1);
    }

    #[test]
    fn test_partition_keeps_order() {
        let now = at(12, 0, 0);
        let shows = vec![(1, at(15, 0, 0)), (2, at(9, 0, 0)), (3, at(13, 0, 0))];

        let schedule = partition_shows(shows, now, |(_, t)| *t);

        let upcoming: Vec<i32> = schedule.upcoming.iter().map(|(id, _)| *id).collect();
        assert_eq!(upcoming, vec![1, 3]);
        assert_eq!(schedule.past.len(), 1);
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("1231231234"), "123-123-1234");
        assert_eq!(format_phone("13261235000"), "132-612-35000");
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_phone(""), "");
    }
}
