//! egui_plot adapter for a single normalized day chart: series lines,
//! static peak markers, and the synchronized cursor overlay. All layout
//! decisions (clamping, row bumping) come from `sync::layout_labels`; this
//! file only measures text and converts between pixel and plot space.

use eframe::egui::{Align2, Color32, FontId, RichText, Ui, Vec2b};
use egui_plot::{
    Axis, AxisHints, GridMark, Line, Plot, PlotPoint, PlotPoints, PlotUi, Text, VLine, VPlacement,
};

use crate::analysis::{NormalizedDaySeries, interpolate};
use crate::config::plot::PLOT_CONFIG;
use crate::sync::{self, ChartRegistry, LabelAnchor, layout_labels};
use crate::ui::app::SeriesVisibility;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::TimeUtils;
use crate::utils::time_utils::epoch_ms_to_clock;
use crate::view::DayChartSpec;

pub(crate) struct ChartFeedback {
    pub hovered: bool,
    pub cursor_changed: bool,
}

const LABEL_FONT_SIZE: f32 = 11.0;
/// Cursor labels hang from the top of the plot, peak labels sit above the
/// bottom axis; the two stacks never share rows (they are laid out
/// independently).
const CURSOR_LABEL_TOP_PX: f32 = 6.0;
const PEAK_LABEL_BOTTOM_PX: f32 = 40.0;

pub(crate) fn show_day_chart(
    ui: &mut Ui,
    spec: &DayChartSpec,
    registry: &mut ChartRegistry,
    visibility: &SeriesVisibility,
) -> ChartFeedback {
    let series = &spec.series;
    let (min_x, max_x) = (series.min_time() as f64, series.max_time() as f64);

    ui.label(RichText::new(spec.day.heading()).strong());

    let mut feedback = ChartFeedback {
        hovered: false,
        cursor_changed: false,
    };

    let hour_marks = hour_grid_marks(series);
    let x_axis = AxisHints::new(Axis::X)
        .formatter(|mark, _range| epoch_ms_to_clock(mark.value as i64))
        .placement(VPlacement::Bottom);
    let y_axis = AxisHints::new(Axis::Y).formatter(|mark, _range| format!("{:.0}%", mark.value));

    Plot::new(("day_chart", spec.chart_id))
        .height(PLOT_CONFIG.grid_chart_height_px)
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(move |_input| hour_marks.clone())
        .y_grid_spacer(|_input| quarter_grid_marks())
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(min_x..=max_x);
            plot_ui.set_plot_bounds_y(0.0..=PLOT_CONFIG.y_axis_max);

            if visibility.lead {
                plot_ui.line(series_line(series, |p| p.lead, UI_TEXT.label_lead, PLOT_CONFIG.lead_color));
            }
            if visibility.boulder {
                plot_ui.line(series_line(
                    series,
                    |p| p.boulder,
                    UI_TEXT.label_boulder,
                    PLOT_CONFIG.boulder_color,
                ));
            }

            // This chart is the sync source while the pointer is over it.
            // The whole registry updates inside pointer_move, so peers
            // rendered later this frame already see the mapped cursor.
            if plot_ui.response().hovered() {
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    feedback.hovered = true;
                    let t = (pointer.x as i64).clamp(series.min_time(), series.max_time());
                    feedback.cursor_changed |= sync::pointer_move(registry, spec.chart_id, t);
                }
            }

            if visibility.peaks {
                draw_peak_markers(plot_ui, spec, visibility);
            }

            if let Some(t) = registry.cursor(spec.chart_id).query_time_ms() {
                draw_cursor_overlay(plot_ui, series, t, visibility);
            }
        });

    feedback
}

fn series_line(
    series: &NormalizedDaySeries,
    value: impl Fn(&crate::analysis::SeriesPoint) -> f64,
    name: &str,
    color: Color32,
) -> Line<'static> {
    let pts: Vec<[f64; 2]> = series
        .points
        .iter()
        .map(|p| [p.timestamp_ms as f64, value(p)])
        .collect();
    Line::new(name, PlotPoints::new(pts))
        .color(color)
        .width(PLOT_CONFIG.series_line_width)
}

/// X grid on even local hours, anchored at opening time.
fn hour_grid_marks(series: &NormalizedDaySeries) -> Vec<GridMark> {
    let step = 2 * TimeUtils::MS_IN_H;
    let mut marks = Vec::new();
    let mut t = series.min_time();
    while t <= series.max_time() {
        marks.push(GridMark {
            value: t as f64,
            step_size: step as f64,
        });
        t += step;
    }
    marks
}

fn quarter_grid_marks() -> Vec<GridMark> {
    [0.0, 25.0, 50.0, 75.0, 100.0]
        .iter()
        .map(|&value| GridMark {
            value,
            step_size: 25.0,
        })
        .collect()
}

fn draw_cursor_overlay(
    plot_ui: &mut PlotUi,
    series: &NormalizedDaySeries,
    t: i64,
    visibility: &SeriesVisibility,
) {
    plot_ui.vline(
        VLine::new("", t as f64)
            .color(PLOT_CONFIG.cursor_line_color)
            .width(PLOT_CONFIG.cursor_line_width),
    );

    // Inside the axis window but outside the observed span: crosshair only
    let Some(values) = interpolate(series, t) else {
        return;
    };

    let mut labels: Vec<(i64, String, Color32)> = Vec::with_capacity(2);
    if visibility.lead {
        labels.push((
            t,
            format!(
                "{} {:.0}% {}",
                UI_TEXT.label_lead,
                values.lead,
                epoch_ms_to_clock(t)
            ),
            PLOT_CONFIG.lead_color,
        ));
    }
    if visibility.boulder {
        labels.push((
            t,
            format!("{} {:.0}%", UI_TEXT.label_boulder, values.boulder),
            PLOT_CONFIG.boulder_color,
        ));
    }

    draw_marker_labels(plot_ui, &labels, LabelStack::Top);
}

fn draw_peak_markers(plot_ui: &mut PlotUi, spec: &DayChartSpec, visibility: &SeriesVisibility) {
    let mut labels: Vec<(i64, String, Color32)> = Vec::with_capacity(2);

    if visibility.lead
        && let Some(peak) = spec.peaks.max_lead
    {
        plot_ui.vline(
            VLine::new("", peak.timestamp_ms as f64)
                .color(PLOT_CONFIG.peak_lead_color)
                .width(PLOT_CONFIG.peak_line_width),
        );
        labels.push((
            peak.timestamp_ms,
            format!(
                "{} {} {}",
                UI_TEXT.label_peak_prefix,
                peak.value,
                epoch_ms_to_clock(peak.timestamp_ms)
            ),
            PLOT_CONFIG.peak_lead_color,
        ));
    }
    if visibility.boulder
        && let Some(peak) = spec.peaks.max_boulder
    {
        plot_ui.vline(
            VLine::new("", peak.timestamp_ms as f64)
                .color(PLOT_CONFIG.peak_boulder_color)
                .width(PLOT_CONFIG.peak_line_width),
        );
        labels.push((
            peak.timestamp_ms,
            format!(
                "{} {} {}",
                UI_TEXT.label_peak_prefix,
                peak.value,
                epoch_ms_to_clock(peak.timestamp_ms)
            ),
            PLOT_CONFIG.peak_boulder_color,
        ));
    }

    draw_marker_labels(plot_ui, &labels, LabelStack::Bottom);
}

enum LabelStack {
    Top,
    Bottom,
}

/// Measure, lay out and draw a stack of marker labels.
///
/// The plot transform is linear with bounds we set ourselves, so the
/// pixel<->plot mapping is computed directly from the response rect.
fn draw_marker_labels(plot_ui: &mut PlotUi, items: &[(i64, String, Color32)], stack: LabelStack) {
    if items.is_empty() {
        return;
    }

    let rect = plot_ui.response().rect;
    let bounds = plot_ui.plot_bounds();
    let (bx_min, bx_max) = (*bounds.range_x().start(), *bounds.range_x().end());
    let (by_min, by_max) = (*bounds.range_y().start(), *bounds.range_y().end());
    if bx_max <= bx_min || by_max <= by_min || rect.width() <= 0.0 {
        return;
    }

    let px_per_x = rect.width() as f64 / (bx_max - bx_min);
    let px_per_y = rect.height() as f64 / (by_max - by_min);
    let font = FontId::proportional(LABEL_FONT_SIZE);

    let anchors: Vec<LabelAnchor> = items
        .iter()
        .map(|(t, text, color)| {
            let width = plot_ui.ctx().fonts_mut(|f| {
                f.layout_no_wrap(text.clone(), font.clone(), *color).size().x
            });
            LabelAnchor {
                anchor_x: (rect.left() as f64 + (*t as f64 - bx_min) * px_per_x) as f32,
                width,
            }
        })
        .collect();

    let placed = layout_labels(
        &anchors,
        rect.left(),
        rect.right(),
        PLOT_CONFIG.label_padding_px,
    );

    for (p, (_, text, color)) in placed.iter().zip(items) {
        let y_px = match stack {
            LabelStack::Top => {
                rect.top() + CURSOR_LABEL_TOP_PX + p.row as f32 * PLOT_CONFIG.label_row_height_px
            }
            LabelStack::Bottom => {
                rect.bottom()
                    - PEAK_LABEL_BOTTOM_PX
                    - p.row as f32 * PLOT_CONFIG.label_row_height_px
            }
        };
        let x_plot = bx_min + (p.x - rect.left()) as f64 / px_per_x;
        let y_plot = by_max - (y_px - rect.top()) as f64 / px_per_y;

        plot_ui.text(
            Text::new(
                "",
                PlotPoint::new(x_plot, y_plot),
                RichText::new(text).color(*color).size(LABEL_FONT_SIZE),
            )
            .anchor(Align2::LEFT_TOP),
        );
    }
}
