//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // SERIES COLORS
    pub lead_color: Color32,
    pub boulder_color: Color32,
    pub series_line_width: f32,

    // CURSOR / CROSSHAIR
    pub cursor_line_color: Color32,
    pub cursor_line_width: f32,

    // PEAK MARKERS
    pub peak_lead_color: Color32,
    pub peak_boulder_color: Color32,
    pub peak_line_width: f32,

    // LABEL LAYOUT (pixel space)
    /// Horizontal gap a label keeps from its anchor line.
    pub label_padding_px: f32,
    /// Vertical distance between stacked label rows when anchors collide.
    pub label_row_height_px: f32,

    // AXES
    /// Plot up to 100% plus this headroom so a full-gym line is not glued
    /// to the frame.
    pub y_axis_headroom: f64,
    pub y_axis_max: f64,

    // LAYOUT
    pub grid_chart_height_px: f32,
    pub bar_chart_height_px: f32,
    /// Width of one lead/boulder bar inside a day slot (slot width = 1.0).
    pub bar_width: f64,

    pub color_text_neutral: Color32,
    pub color_error: Color32,
    pub color_warning: Color32,
    pub color_ok: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // Lead wall = blue, boulder = orange. Matches the gym's own signage.
    lead_color: Color32::from_rgb(0, 191, 255),
    boulder_color: Color32::from_rgb(255, 165, 0),
    series_line_width: 2.0,

    cursor_line_color: Color32::from_rgb(255, 215, 0), // Gold
    cursor_line_width: 1.5,

    peak_lead_color: Color32::from_rgb(0, 130, 180),
    peak_boulder_color: Color32::from_rgb(190, 120, 0),
    peak_line_width: 1.0,

    label_padding_px: 6.0,
    label_row_height_px: 14.0,

    y_axis_headroom: 5.0,
    y_axis_max: 105.0,

    grid_chart_height_px: 180.0,
    bar_chart_height_px: 260.0,
    bar_width: 0.35,

    color_text_neutral: Color32::LIGHT_GRAY,
    color_error: Color32::from_rgb(255, 80, 80),
    color_warning: Color32::from_rgb(255, 215, 0),
    color_ok: Color32::from_rgb(100, 255, 100),
};
