use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

/// Half-open `[start, end)` range in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: i64,
    pub end: i64,
}

impl BudgetPeriod {
    pub const ALL: [BudgetPeriod; 3] = [Self::Weekly, Self::Monthly, Self::Yearly];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// The week (from Monday), month or year containing `now`, in UTC.
    pub fn current_window(&self, now: DateTime<Utc>) -> PeriodWindow {
        let today = now.date_naive();

        let (start, end) = match *self {
            Self::Weekly => {
                let start =
                    today - Duration::days(today.weekday().num_days_from_monday() as i64);
                (start, start + Duration::days(7))
            }
            Self::Monthly => {
                let start = first_of_month(today.year(), today.month());
                let end = match today.month() {
                    12 => first_of_month(today.year() + 1, 1),
                    month => first_of_month(today.year(), month + 1),
                };
                (start, end)
            }
            Self::Yearly => (
                first_of_month(today.year(), 1),
                first_of_month(today.year() + 1, 1),
            ),
        };

        PeriodWindow {
            start: start.and_time(NaiveTime::MIN).and_utc().timestamp(),
            end: end.and_time(NaiveTime::MIN).and_utc().timestamp(),
        }
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|period| period.value() == s)
            .ok_or_else(|| format!("invalid budget period: {}", s))
    }
}
