//! Age buckets used to label printed pages.
//!
//! Keys follow the `under_3` / `age_N` convention of the product's request
//! bodies. `age_10` means ten and older.

use std::fmt;

/// Normalized age bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeLevel {
    Under3,
    Age3,
    Age4,
    Age5,
    #[default]
    Age6,
    Age7,
    Age8,
    Age9,
    Age10Plus,
}

const ALL: [AgeLevel; 9] = [
    AgeLevel::Under3,
    AgeLevel::Age3,
    AgeLevel::Age4,
    AgeLevel::Age5,
    AgeLevel::Age6,
    AgeLevel::Age7,
    AgeLevel::Age8,
    AgeLevel::Age9,
    AgeLevel::Age10Plus,
];

impl AgeLevel {
    /// All buckets, youngest first.
    pub fn all() -> &'static [AgeLevel] {
        &ALL
    }

    /// Bucket for a child's age in whole years.
    pub fn from_years(years: u8) -> Self {
        match years {
            0..=2 => Self::Under3,
            3 => Self::Age3,
            4 => Self::Age4,
            5 => Self::Age5,
            6 => Self::Age6,
            7 => Self::Age7,
            8 => Self::Age8,
            9 => Self::Age9,
            _ => Self::Age10Plus,
        }
    }

    /// Parse `under_3`, `age_6`, `6`, `10+`, `Age 6`, `under 3` and the like.
    ///
    /// `age_2` is accepted as an alias of `under_3`. Returns `None` for
    /// anything that is not a known bucket.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized: String = input
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();

        if matches!(normalized.as_str(), "under_3" | "under3" | "u3") {
            return Some(Self::Under3);
        }

        let digits = normalized
            .strip_prefix("age_")
            .or_else(|| normalized.strip_prefix("age"))
            .unwrap_or(&normalized);
        let digits = digits.strip_suffix('+').unwrap_or(digits);
        let years: u8 = digits.parse().ok()?;
        if !(2..=10).contains(&years) {
            return None;
        }
        Some(Self::from_years(years))
    }

    /// Request key, e.g. `age_6`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Under3 => "under_3",
            Self::Age3 => "age_3",
            Self::Age4 => "age_4",
            Self::Age5 => "age_5",
            Self::Age6 => "age_6",
            Self::Age7 => "age_7",
            Self::Age8 => "age_8",
            Self::Age9 => "age_9",
            Self::Age10Plus => "age_10",
        }
    }

    /// Human-readable label, e.g. `Age 6`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Under3 => "Under 3",
            Self::Age3 => "Age 3",
            Self::Age4 => "Age 4",
            Self::Age5 => "Age 5",
            Self::Age6 => "Age 6",
            Self::Age7 => "Age 7",
            Self::Age8 => "Age 8",
            Self::Age9 => "Age 9",
            Self::Age10Plus => "Age 10+",
        }
    }

    /// Inclusive age range in years; `None` upper bound means open-ended.
    pub fn years(self) -> (u8, Option<u8>) {
        match self {
            Self::Under3 => (0, Some(2)),
            Self::Age10Plus => (10, None),
            other => {
                let n = other as u8 + 2;
                (n, Some(n))
            }
        }
    }
}

impl fmt::Display for AgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_keys() {
        assert_eq!(AgeLevel::parse("under_3"), Some(AgeLevel::Under3));
        assert_eq!(AgeLevel::parse("age_6"), Some(AgeLevel::Age6));
        assert_eq!(AgeLevel::parse("age_10"), Some(AgeLevel::Age10Plus));
    }

    #[test]
    fn parses_loose_forms() {
        assert_eq!(AgeLevel::parse(" Age 7 "), Some(AgeLevel::Age7));
        assert_eq!(AgeLevel::parse("5"), Some(AgeLevel::Age5));
        assert_eq!(AgeLevel::parse("10+"), Some(AgeLevel::Age10Plus));
        assert_eq!(AgeLevel::parse("Under 3"), Some(AgeLevel::Under3));
        assert_eq!(AgeLevel::parse("age_2"), Some(AgeLevel::Under3));
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(AgeLevel::parse("age_11"), None);
        assert_eq!(AgeLevel::parse("age_1"), None);
        assert_eq!(AgeLevel::parse("teen"), None);
        assert_eq!(AgeLevel::parse(""), None);
    }

    #[test]
    fn keys_round_trip() {
        for level in AgeLevel::all() {
            assert_eq!(AgeLevel::parse(level.key()), Some(*level));
        }
    }

    #[test]
    fn all_is_ascending() {
        let all = AgeLevel::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all.len(), 9);
    }

    #[test]
    fn from_years_clamps() {
        assert_eq!(AgeLevel::from_years(0), AgeLevel::Under3);
        assert_eq!(AgeLevel::from_years(8), AgeLevel::Age8);
        assert_eq!(AgeLevel::from_years(14), AgeLevel::Age10Plus);
    }

    #[test]
    fn year_ranges() {
        assert_eq!(AgeLevel::Under3.years(), (0, Some(2)));
        assert_eq!(AgeLevel::Age3.years(), (3, Some(3)));
        assert_eq!(AgeLevel::Age9.years(), (9, Some(9)));
        assert_eq!(AgeLevel::Age10Plus.years(), (10, None));
    }

    #[test]
    fn labels() {
        assert_eq!(AgeLevel::Age6.to_string(), "Age 6");
        assert_eq!(AgeLevel::Under3.label(), "Under 3");
        assert_eq!(AgeLevel::Age10Plus.label(), "Age 10+");
        assert_eq!(AgeLevel::Age10Plus.key(), "age_10");
        assert_eq!(AgeLevel::default(), AgeLevel::Age6);
    }
}
