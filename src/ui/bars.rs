//! Peak summary bar chart: one category per day, lead/boulder peak bars,
//! click-to-drill-down.

use eframe::egui::{RichText, Ui, Vec2b};
use egui_plot::{Axis, AxisHints, Bar, BarChart, GridMark, Plot, VPlacement};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::DayKey;
use crate::ui::app::SeriesVisibility;
use crate::ui::ui_text::UI_TEXT;
use crate::view::PeakBarRow;

/// Render the bar chart. Returns the day of a clicked bar slot, if any.
pub(crate) fn show_peak_bars(
    ui: &mut Ui,
    rows: &[PeakBarRow],
    visibility: &SeriesVisibility,
) -> Option<DayKey> {
    let mut clicked_day = None;
    if rows.is_empty() {
        return clicked_day;
    }

    ui.label(RichText::new(UI_TEXT.label_drilldown_hint).weak());

    // A month of categories is too dense to label every slot
    let label_step = if rows.len() > 10 { 5 } else { 1 };
    let day_labels: Vec<String> = rows
        .iter()
        .map(|r| r.day.date().format("%d %b").to_string())
        .collect();

    let x_axis = AxisHints::new(Axis::X)
        .formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.01 || idx < 0.0 {
                return String::new();
            }
            let idx = idx as usize;
            if idx >= day_labels.len() || idx % label_step != 0 {
                return String::new();
            }
            day_labels[idx].clone()
        })
        .placement(VPlacement::Bottom);
    let y_axis = AxisHints::new(Axis::Y).formatter(|mark, _range| format!("{:.0}%", mark.value));

    let bar = |x: f64, value: f64| Bar::new(x, value).width(PLOT_CONFIG.bar_width);

    let lead_bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            r.peaks
                .max_lead
                .map(|p| bar(i as f64 - PLOT_CONFIG.bar_width / 2.0, p.value.as_f64()))
        })
        .collect();
    let boulder_bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            r.peaks
                .max_boulder
                .map(|p| bar(i as f64 + PLOT_CONFIG.bar_width / 2.0, p.value.as_f64()))
        })
        .collect();

    let slot_count = rows.len();
    Plot::new("peak_bars")
        .height(PLOT_CONFIG.bar_chart_height_px)
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(move |_input| {
            (0..slot_count)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-0.5..=(slot_count as f64 - 0.5));
            plot_ui.set_plot_bounds_y(0.0..=PLOT_CONFIG.y_axis_max);

            if visibility.lead {
                plot_ui.bar_chart(
                    BarChart::new(UI_TEXT.label_lead, lead_bars).color(PLOT_CONFIG.lead_color),
                );
            }
            if visibility.boulder {
                plot_ui.bar_chart(
                    BarChart::new(UI_TEXT.label_boulder, boulder_bars)
                        .color(PLOT_CONFIG.boulder_color),
                );
            }

            if plot_ui.response().clicked()
                && let Some(pointer) = plot_ui.pointer_coordinate()
            {
                let idx = pointer.x.round();
                if idx >= 0.0 && (idx as usize) < slot_count {
                    clicked_day = Some(rows[idx as usize].day);
                }
            }
        });

    clicked_day
}
