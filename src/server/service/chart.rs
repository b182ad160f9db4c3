//! Phonedb growth chart.
//!
//! Counts phone records month by month from January 2006 and renders the series as a chart
//! URL. The URL is cached for an hour; changes to the phone table within that hour are not
//! reflected until the cached value expires.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    data::phone::PhoneRepository,
    error::{internal::InternalError, AppError},
    model::chart::MonthlyStats,
    service::cache::CacheService,
};

/// Cache key of the rendered chart URL.
pub const CHART_CACHE_KEY: &str = "phonedb-chart-url";
/// Lifetime of the cached chart URL.
pub const CHART_CACHE_TTL: Duration = Duration::from_secs(3600);
/// First year shown on the chart.
const START_YEAR: i32 = 2006;
/// Lower bound for the supported and unsupported counters.
const EPOCH_YEAR: i32 = 1900;

pub struct ChartService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a CacheService,
    base_url: &'a str,
}

impl<'a> ChartService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a CacheService, base_url: &'a str) -> Self {
        Self {
            db,
            cache,
            base_url,
        }
    }

    /// Gets the chart URL, computing and caching it when the cached value is missing or
    /// expired.
    ///
    /// # Arguments
    /// - `now` - Current time; the last month on the chart is the month of `now`
    pub async fn get_chart_url(&self, now: DateTime<Utc>) -> Result<String, AppError> {
        if let Some(url) = self.cache.get(CHART_CACHE_KEY).await {
            return Ok(url);
        }

        let url = self.get_monthly_stats(now).await?.chart_url(self.base_url);
        self.cache
            .set(CHART_CACHE_KEY, url.clone(), CHART_CACHE_TTL)
            .await;

        Ok(url)
    }

    /// Counts phones for every month from January 2006 through the month of `now`.
    ///
    /// For each month, with `cutoff` the first instant of that month:
    /// - supported: not deleted, has connection info, created in `[1900-01-01, cutoff)`
    /// - unsupported: not deleted, no connection info, created in `[1900-01-01, cutoff)`
    /// - all: created before `cutoff`, in any state
    pub async fn get_monthly_stats(&self, now: DateTime<Utc>) -> Result<MonthlyStats, AppError> {
        let repo = PhoneRepository::new(self.db);
        let since = month_start(EPOCH_YEAR, 1)?;

        let mut stats = MonthlyStats::new();
        for year in START_YEAR..=now.year() {
            let last_month = if year == now.year() { now.month() } else { 12 };

            for month in 1..=last_month {
                let cutoff = month_start(year, month)?;

                let supported = repo.count_listed_between(since, cutoff, true).await?;
                let unsupported = repo.count_listed_between(since, cutoff, false).await?;
                let all = repo.count_created_before(cutoff).await?;

                tracing::debug!(
                    "{}-{:02}: {}, {}, {}",
                    year,
                    month,
                    all,
                    supported,
                    unsupported
                );

                stats.push(year, month, supported, unsupported, all);
            }
        }

        Ok(stats)
    }
}

fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>, InternalError> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or(InternalError::InvalidDate {
            year,
            month,
            day: 1,
        })
}
