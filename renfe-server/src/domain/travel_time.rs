//! Elapsed travel time between departure and arrival.
//!
//! The results page spells durations out in words ("2 horas 25 minutos",
//! "55 minutos"). When that element is missing or garbled, the duration is
//! derived from the departure/arrival pair instead, wrapping past midnight
//! for overnight services.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ClockTime;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing text that contains no recognizable duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel time: {reason}")]
pub struct TravelTimeError {
    reason: &'static str,
}

/// An elapsed time, stored as total minutes.
///
/// # Examples
///
/// ```
/// use renfe_server::domain::TravelTime;
///
/// let t = TravelTime::parse("2 horas 25 minutos").unwrap();
/// assert_eq!(t.total_minutes(), 145);
/// assert_eq!(t.to_string(), "2 h 25 min");
///
/// let t = TravelTime::parse("55 minutos").unwrap();
/// assert_eq!(t.to_string(), "55 min");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TravelTime {
    minutes: u32,
}

impl TravelTime {
    /// Create a travel time from a total minute count.
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Parse a duration from listing text.
    ///
    /// Accepts the site's word forms ("2 horas 25 minutos", "1 hora",
    /// "55 minutos"), abbreviated forms ("2 h 25 min") and the compact
    /// "H:MM" form. Returns `None` when no duration can be recognized.
    pub fn parse(text: &str) -> Option<Self> {
        let mut hours: Option<u32> = None;
        let mut minutes: Option<u32> = None;
        let mut pending: Option<u32> = None;

        for token in text.split_whitespace() {
            // Compact "H:MM" form
            if let Some((h, m)) = token.split_once(':') {
                if let (Ok(h), Ok(m)) = (h.parse::<u32>(), m.parse::<u32>()) {
                    hours = Some(h);
                    minutes = Some(m);
                    continue;
                }
            }

            if let Ok(n) = token.parse::<u32>() {
                pending = Some(n);
                continue;
            }

            // A unit word applies to the number that preceded it.
            let unit: String = token
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase();
            if let Some(n) = pending.take() {
                if unit.starts_with('h') {
                    hours = Some(n);
                } else if unit.starts_with('m') {
                    minutes = Some(n);
                }
            }
        }

        if hours.is_none() && minutes.is_none() {
            return None;
        }

        Some(Self::from_minutes(
            hours.unwrap_or(0) * 60 + minutes.unwrap_or(0),
        ))
    }

    /// Elapsed time from departure to arrival, wrapping past midnight.
    ///
    /// An arrival clock-earlier than the departure is an overnight service.
    ///
    /// # Examples
    ///
    /// ```
    /// use renfe_server::domain::{ClockTime, TravelTime};
    ///
    /// let dep = ClockTime::parse("06:24").unwrap();
    /// let arr = ClockTime::parse("08:49").unwrap();
    /// assert_eq!(TravelTime::between(dep, arr).total_minutes(), 145);
    ///
    /// // Overnight wrap
    /// let dep = ClockTime::parse("23:30").unwrap();
    /// let arr = ClockTime::parse("00:20").unwrap();
    /// assert_eq!(TravelTime::between(dep, arr).total_minutes(), 50);
    /// ```
    pub fn between(departure: ClockTime, arrival: ClockTime) -> Self {
        let dep = departure.minutes_from_midnight();
        let arr = arrival.minutes_from_midnight();
        let minutes = if arr >= dep {
            arr - dep
        } else {
            MINUTES_PER_DAY - dep + arr
        };
        Self::from_minutes(minutes)
    }

    /// Total elapsed minutes.
    pub fn total_minutes(&self) -> u32 {
        self.minutes
    }

    /// Whole-hour part of the duration.
    pub fn hours(&self) -> u32 {
        self.minutes / 60
    }

    /// Minute part of the duration (0-59).
    pub fn minutes(&self) -> u32 {
        self.minutes % 60
    }

    /// The duration as a chrono [`Duration`](chrono::Duration).
    pub fn as_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.minutes))
    }
}

impl FromStr for TravelTime {
    type Err = TravelTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(TravelTimeError {
            reason: "no duration found in text",
        })
    }
}

impl fmt::Debug for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelTime({} min)", self.minutes)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours() > 0 {
            write!(f, "{} h {} min", self.hours(), self.minutes())
        } else {
            write!(f, "{} min", self.minutes())
        }
    }
}

impl Serialize for TravelTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TravelTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
