mod feed;
mod refresh;
mod store;

pub use {
    feed::{HttpFeed, OccupancyFeed},
    refresh::{RefreshCommand, RefreshOutcome, spawn_refresh_worker},
    store::SampleStore,
};
