//! Timestamp sampling.

use super::ConditionalSampler;
use accident_core::{RegionProfile, Season};
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Timelike};
use rand::Rng;

const SECONDS_PER_DAY: u32 = 86_400;

/// A sampled point in time, with the fields later samplers condition on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub season: Season,
    /// Hour of day, 0-23
    pub hour: u32,
}

impl Moment {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            season: Season::from_month(date.month()),
            hour: time.hour(),
        }
    }
}

/// Picks a day uniformly from the profile's window and a second uniformly
/// from that day.
#[derive(Debug, Clone)]
pub struct TemporalSampler {
    start: NaiveDate,
    window_days: u64,
}

impl TemporalSampler {
    /// The profile must already be validated, so that every offset in the
    /// window is a representable date.
    pub fn new(profile: &RegionProfile) -> Self {
        Self {
            start: profile.start_date,
            window_days: profile.window_days,
        }
    }
}

impl ConditionalSampler for TemporalSampler {
    type Input = ();
    type Output = Moment;

    fn sample<R: Rng + ?Sized>(&self, _input: (), rng: &mut R) -> Moment {
        let offset = rng.gen_range(0..=self.window_days);
        let date = self
            .start
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.start);

        let second = rng.gen_range(0..SECONDS_PER_DAY);
        let time = NaiveTime::from_num_seconds_from_midnight_opt(second, 0).unwrap_or_default();

        Moment::new(date, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_moments_stay_in_window() {
        let profile = RegionProfile::default();
        let sampler = TemporalSampler::new(&profile);
        let end = profile.end_date().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let moment = sampler.sample((), &mut rng);
            assert!(moment.date >= profile.start_date && moment.date <= end);
            assert!(moment.hour < 24);
            assert_eq!(moment.hour, moment.time.hour());
            assert_eq!(moment.season, Season::from_month(moment.date.month()));
        }
    }

    #[test]
    fn test_single_day_window() {
        let profile = RegionProfile {
            window_days: 0,
            ..RegionProfile::default()
        };
        let sampler = TemporalSampler::new(&profile);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let moment = sampler.sample((), &mut rng);
            assert_eq!(moment.date, profile.start_date);
            assert_eq!(moment.season, Season::Winter);
        }
    }

    #[test]
    fn test_moment_derivations() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 14).unwrap();
        let time = NaiveTime::from_hms_opt(18, 45, 10).unwrap();
        let moment = Moment::new(date, time);
        assert_eq!(moment.season, Season::Monsoon);
        assert_eq!(moment.hour, 18);
    }
}
