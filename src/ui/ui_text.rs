//! User-facing strings in one place.

pub struct UiText {
    pub app_title: &'static str,

    pub label_lead: &'static str,
    pub label_boulder: &'static str,
    pub label_peaks: &'static str,
    pub label_peak_prefix: &'static str,

    pub label_refresh_now: &'static str,
    pub label_last_run: &'static str,
    pub label_data_age: &'static str,
    pub label_open_sectors: &'static str,
    pub label_drilldown_hint: &'static str,

    pub msg_loading: &'static str,
    pub msg_no_samples: &'static str,
    pub msg_view_error_prefix: &'static str,
    pub msg_collector_failed: &'static str,
    pub msg_no_status: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Crag Pulse",

    label_lead: "Lead",
    label_boulder: "Boulder",
    label_peaks: "Peaks",
    label_peak_prefix: "peak",

    label_refresh_now: "Refresh now",
    label_last_run: "Collector run",
    label_data_age: "Data age",
    label_open_sectors: "Open sectors",
    label_drilldown_hint: "Click a bar for the full day",

    msg_loading: "Waiting for first fetch...",
    msg_no_samples: "No samples in the retention window yet - charts show operating hours only.",
    msg_view_error_prefix: "Chart build failed: ",
    msg_collector_failed: "Last collector run failed",
    msg_no_status: "collector status unavailable",
};
