use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use eframe::egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel, Ui, Visuals};
use eframe::Storage;
use strum::IntoEnumIterator;

use crate::Cli;
use crate::config::plot::PLOT_CONFIG;
use crate::config::{COLLECTOR, HOURS, RangeMode};
use crate::data::{HttpFeed, RefreshCommand, RefreshOutcome, SampleStore, spawn_refresh_worker};
use crate::domain::{CollectorStatus, DayKey};
use crate::sync::{self, ChartRegistry};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::{bars, chart};
use crate::utils::time_utils::{
    epoch_ms_to_clock, format_duration, local_now_as_timestamp_ms,
};
use crate::view::{DashboardView, build_view};

const MODE_STORAGE_KEY: &str = "range_mode";

#[derive(Debug, Clone, Copy)]
pub(crate) struct SeriesVisibility {
    pub lead: bool,
    pub boulder: bool,
    pub peaks: bool,
}

impl Default for SeriesVisibility {
    fn default() -> Self {
        Self {
            lead: true,
            boulder: true,
            peaks: true,
        }
    }
}

pub struct App {
    mode: RangeMode,
    store: SampleStore,
    status: Option<CollectorStatus>,
    /// None until the first refresh outcome; Err renders as a visible
    /// message in place of the chart area.
    view: Option<Result<DashboardView, String>>,
    registry: ChartRegistry,
    visibility: SeriesVisibility,
    cmd_tx: Sender<RefreshCommand>,
    outcome_rx: Receiver<RefreshOutcome>,
    fetch_error: Option<String>,
    last_fetch_ms: Option<i64>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
        cc.egui_ctx.set_visuals(Visuals::dark());

        let mode = cc
            .storage
            .and_then(|s| eframe::get_value(s, MODE_STORAGE_KEY))
            .unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        let mut fetch_error = None;
        match HttpFeed::new(
            args.samples_url.clone(),
            args.status_url.clone(),
            COLLECTOR.fetch_timeout_secs,
        ) {
            Ok(feed) => spawn_refresh_worker(
                feed,
                Duration::from_secs(args.refresh_secs.max(1)),
                cmd_rx,
                outcome_tx,
            ),
            Err(e) => {
                log::error!("failed to construct http feed: {e:#}");
                fetch_error = Some(format!("{e:#}"));
            }
        }

        App {
            mode,
            store: SampleStore::new(args.retention_days),
            status: None,
            view: None,
            registry: ChartRegistry::new(),
            visibility: SeriesVisibility::default(),
            cmd_tx,
            outcome_rx,
            fetch_error,
            last_fetch_ms: None,
        }
    }

    fn drain_refresh_outcomes(&mut self) {
        let mut dirty = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.last_fetch_ms = Some(outcome.fetched_at_ms);
            if let Some(status) = outcome.status {
                self.status = Some(status);
            }
            match outcome.samples {
                Ok(samples) => {
                    self.store.install(samples, outcome.fetched_at_ms);
                    self.fetch_error = None;
                    dirty = true;
                }
                Err(msg) => {
                    // Keep the previous snapshot; still build a view on the
                    // very first pass so the placeholder renders.
                    self.fetch_error = Some(msg);
                    if self.view.is_none() {
                        dirty = true;
                    }
                }
            }
        }
        if dirty {
            self.rebuild_view();
        }
    }

    /// Rebuild the whole chart set from the current snapshot. Also the
    /// teardown point: build_view clears the registry, which implicitly
    /// cancels any in-flight pointer interaction.
    fn rebuild_view(&mut self) {
        let samples = self.store.snapshot();
        self.view = Some(
            build_view(
                self.mode,
                &samples,
                &HOURS,
                &mut self.registry,
                local_now_as_timestamp_ms(),
            )
            .map_err(|e| format!("{e:#}")),
        );
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading(UI_TEXT.app_title);
            ui.separator();

            let mut selected = self.mode;
            for mode in RangeMode::iter() {
                if ui.selectable_label(self.mode == mode, mode.id()).clicked() {
                    selected = mode;
                }
            }
            if selected != self.mode {
                self.mode = selected;
                self.rebuild_view();
            }

            ui.separator();
            ui.checkbox(&mut self.visibility.lead, UI_TEXT.label_lead);
            ui.checkbox(&mut self.visibility.boulder, UI_TEXT.label_boulder);
            ui.checkbox(&mut self.visibility.peaks, UI_TEXT.label_peaks);

            ui.separator();
            if ui.button(UI_TEXT.label_refresh_now).clicked()
                && self.cmd_tx.send(RefreshCommand::Now).is_err()
            {
                log::warn!("refresh worker is gone; manual refresh ignored");
            }
        });
    }

    fn draw_status_strip(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let now = local_now_as_timestamp_ms();
            match &self.status {
                Some(status) => {
                    let color = if status.success {
                        PLOT_CONFIG.color_ok
                    } else {
                        PLOT_CONFIG.color_error
                    };
                    ui.colored_label(
                        color,
                        format!(
                            "{}: {}",
                            UI_TEXT.label_last_run,
                            epoch_ms_to_clock(status.last_run_ms)
                        ),
                    );
                    if !status.success {
                        ui.colored_label(
                            PLOT_CONFIG.color_error,
                            format!("{} ({})", UI_TEXT.msg_collector_failed, status.message),
                        );
                    }
                    if let Some(sectors) =
                        status.data.as_ref().and_then(|d| d.open_sectors.as_deref())
                    {
                        ui.separator();
                        ui.label(format!("{}: {}", UI_TEXT.label_open_sectors, sectors));
                    }
                }
                None => match self.store.latest() {
                    Some(sample) => {
                        ui.label(format!(
                            "{}: {} ({})",
                            UI_TEXT.label_data_age,
                            format_duration(now - sample.timestamp_ms),
                            UI_TEXT.msg_no_status
                        ));
                    }
                    None => {
                        ui.label(UI_TEXT.msg_no_status);
                    }
                },
            }

            if let Some(fetched) = self.last_fetch_ms {
                ui.separator();
                ui.weak(format!("fetched {}", epoch_ms_to_clock(fetched)));
            }

            if let Some(err) = &self.fetch_error {
                ui.separator();
                ui.colored_label(
                    PLOT_CONFIG.color_warning,
                    format!("fetch failed, showing cached data: {err}"),
                );
            }
        });
    }

    fn draw_charts(&mut self, ui: &mut Ui) {
        let Some(view) = self.view.as_mut() else {
            ui.label(UI_TEXT.msg_loading);
            return;
        };
        let view = match view {
            Ok(v) => v,
            Err(msg) => {
                ui.colored_label(
                    PLOT_CONFIG.color_error,
                    format!("{}{}", UI_TEXT.msg_view_error_prefix, msg),
                );
                return;
            }
        };

        if self.store.is_empty() {
            ui.label(RichText::new(UI_TEXT.msg_no_samples).weak());
        }

        let registry = &mut self.registry;
        let visibility = self.visibility;
        let mut any_hovered = false;
        let mut cursor_changed = false;
        let mut clicked_day: Option<DayKey> = None;

        match view {
            DashboardView::DayGrid(charts) => {
                ScrollArea::vertical().show(ui, |ui| {
                    for spec in charts.iter() {
                        let fb = chart::show_day_chart(ui, spec, registry, &visibility);
                        any_hovered |= fb.hovered;
                        cursor_changed |= fb.cursor_changed;
                    }
                });
            }
            DashboardView::PeakBars { rows, drilldown } => {
                ScrollArea::vertical().show(ui, |ui| {
                    clicked_day = bars::show_peak_bars(ui, rows, &visibility);
                    if let Some(spec) = drilldown {
                        ui.separator();
                        let fb = chart::show_day_chart(ui, spec, registry, &visibility);
                        any_hovered |= fb.hovered;
                        cursor_changed |= fb.cursor_changed;
                    }
                });
            }
        }

        if !any_hovered {
            cursor_changed |= sync::pointer_leave(registry);
        }
        if cursor_changed {
            ui.ctx().request_repaint();
        }

        if let Some(day) = clicked_day {
            let samples = self.store.snapshot();
            if let Some(Ok(view)) = self.view.as_mut() {
                view.open_drilldown(
                    day,
                    &samples,
                    &HOURS,
                    &mut self.registry,
                    local_now_as_timestamp_ms(),
                );
                ui.ctx().request_repaint();
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.drain_refresh_outcomes();

        TopBottomPanel::top("controls").show(ctx, |ui| self.draw_controls(ui));
        TopBottomPanel::bottom("status").show(ctx, |ui| self.draw_status_strip(ui));
        CentralPanel::default().show(ctx, |ui| self.draw_charts(ui));

        // Keep the data-age readout ticking even without input events
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, MODE_STORAGE_KEY, &self.mode);
    }
}
