use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsPeriod {
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl StatsPeriod {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Postgres `to_char` pattern naming the bucket a transaction falls in.
    pub fn bucket_format(&self) -> &'static str {
        match *self {
            Self::Weekly => "YYYY-MM-DD",
            Self::Monthly => "YYYY-MM",
            Self::Yearly => "YYYY",
        }
    }

    /// Per-bucket totals by type. Binds: user_id, window start.
    pub fn stats_sql(&self) -> String {
        let sql = [
            "SELECT to_char(to_timestamp(created_at) AT TIME ZONE 'UTC', '",
            self.bucket_format(),
            "') AS bucket, transaction_type, COALESCE(SUM(amount), 0)::float8 AS total_amount",
            " FROM transactions WHERE user_id = $1 AND created_at >= $2",
            " GROUP BY bucket, transaction_type ORDER BY bucket ASC",
        ]
        .concat();

        tracing::debug!(sql);

        sql
    }

    /// First instant covered by the stats window ending at `now`: the last
    /// 7 days, 12 months or 5 years, each including the current one.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();

        let start = match *self {
            Self::Weekly => today - Duration::days(6),
            Self::Monthly => {
                let months = today.year() * 12 + today.month0() as i32 - 11;
                first_of_month(months.div_euclid(12), months.rem_euclid(12) as u32 + 1)
            }
            Self::Yearly => first_of_month(today.year() - 4, 1),
        };

        start.and_time(NaiveTime::MIN).and_utc()
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

impl FromStr for StatsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(format!("invalid period: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 15, 0).unwrap()
    }

    #[test]
    fn weekly_window_covers_seven_days_from_midnight() {
        let start = StatsPeriod::Weekly.window_start(at(2024, 3, 3, 18));
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 26, 0, 0, 0).unwrap());
    }

    #[test]
    fn monthly_window_crosses_year_boundary() {
        let start = StatsPeriod::Monthly.window_start(at(2024, 3, 20, 9));
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap());

        let start = StatsPeriod::Monthly.window_start(at(2024, 12, 31, 23));
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn yearly_window_starts_four_years_back() {
        let start = StatsPeriod::Yearly.window_start(at(2024, 7, 4, 12));
        assert_eq!(start, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn stats_sql_buckets_by_period_format() {
        let expected = |format: &str| {
            [
                "SELECT to_char(to_timestamp(created_at) AT TIME ZONE 'UTC', '",
                format,
                "') AS bucket, transaction_type, COALESCE(SUM(amount), 0)::float8 AS total_amount FROM transactions WHERE user_id = $1 AND created_at >= $2 GROUP BY bucket, transaction_type ORDER BY bucket ASC",
            ]
            .concat()
        };

        assert_eq!(StatsPeriod::Weekly.stats_sql(), expected("YYYY-MM-DD"));
        assert_eq!(StatsPeriod::Monthly.stats_sql(), expected("YYYY-MM"));
        assert_eq!(StatsPeriod::Yearly.stats_sql(), expected("YYYY"));
    }

    #[test]
    fn parses_known_periods_only() {
        assert_eq!("Monthly".parse::<StatsPeriod>(), Ok(StatsPeriod::Monthly));
        assert!("daily".parse::<StatsPeriod>().is_err());
    }
}
