//! Collector feed endpoints and refresh cadence (Immutable Blueprints)

pub struct CollectorConfig {
    /// Time-ordered sample array written by the scraper cron job.
    pub samples_url: &'static str,
    /// Last-run status record written next to it.
    pub status_url: &'static str,
    pub refresh_interval_secs: u64,
    pub fetch_timeout_secs: u64,
    /// Samples older than this are dropped on every snapshot install.
    pub retention_days: i64,
}

pub const COLLECTOR: CollectorConfig = CollectorConfig {
    samples_url: "https://blockhelden.github.io/auslastung/data/samples.json",
    status_url: "https://blockhelden.github.io/auslastung/data/status.json",
    refresh_interval_secs: 300,
    fetch_timeout_secs: 10,
    retention_days: 7,
};
