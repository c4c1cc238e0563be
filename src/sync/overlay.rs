//! Pixel-space label layout shared by the cursor overlay and the static
//! peak markers. Inputs are measured text widths; the egui adapter feeds
//! galley sizes in, the tests feed plain numbers - no rendering backend
//! involved.

/// A label hanging off a vertical marker line.
#[derive(Debug, Clone, Copy)]
pub struct LabelAnchor {
    /// Pixel x of the marker line.
    pub anchor_x: f32,
    /// Measured text width in pixels.
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLabel {
    /// Left edge of the label, clamped inside the plot area.
    pub x: f32,
    /// 0 = baseline row; bumped down one row per horizontal collision.
    pub row: usize,
}

/// Place labels next to their anchor lines.
///
/// - Horizontal clamp: a label never extends past `plot_left`/`plot_right`.
/// - Overlap avoidance: when a label would horizontally intersect one
///   already placed on a row, it drops to the next row instead of
///   colliding.
pub fn layout_labels(
    anchors: &[LabelAnchor],
    plot_left: f32,
    plot_right: f32,
    padding: f32,
) -> Vec<PlacedLabel> {
    let mut placed: Vec<PlacedLabel> = Vec::with_capacity(anchors.len());
    // Occupied horizontal intervals per row, in placement order
    let mut rows: Vec<Vec<(f32, f32)>> = Vec::new();

    for anchor in anchors {
        let x = (anchor.anchor_x + padding)
            .min(plot_right - anchor.width)
            .max(plot_left);
        let interval = (x - padding, x + anchor.width + padding);

        let mut row = 0;
        loop {
            let collides = rows
                .get(row)
                .is_some_and(|ivs| ivs.iter().any(|&(s, e)| interval.0 < e && s < interval.1));
            if !collides {
                break;
            }
            row += 1;
        }

        if row == rows.len() {
            rows.push(Vec::new());
        }
        rows[row].push(interval);
        placed.push(PlacedLabel { x, row });
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: f32 = 6.0;

    fn anchor(x: f32, width: f32) -> LabelAnchor {
        LabelAnchor { anchor_x: x, width }
    }

    #[test]
    fn distant_labels_share_the_baseline_row() {
        let placed = layout_labels(&[anchor(10.0, 40.0), anchor(200.0, 40.0)], 0.0, 400.0, PAD);
        assert_eq!(placed[0].row, 0);
        assert_eq!(placed[1].row, 0);
        assert_eq!(placed[0].x, 16.0);
    }

    #[test]
    fn same_anchor_bumps_the_second_label_down() {
        let placed = layout_labels(&[anchor(100.0, 40.0), anchor(100.0, 40.0)], 0.0, 400.0, PAD);
        assert_eq!(placed[0].row, 0);
        assert_eq!(placed[1].row, 1);
        // Same x, different row - offset vertically, not pushed sideways
        assert_eq!(placed[0].x, placed[1].x);
    }

    #[test]
    fn three_colliding_labels_stack_three_rows() {
        let anchors = [anchor(50.0, 60.0), anchor(55.0, 60.0), anchor(60.0, 60.0)];
        let placed = layout_labels(&anchors, 0.0, 400.0, PAD);
        let rows: Vec<usize> = placed.iter().map(|p| p.row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn clamped_at_the_right_edge() {
        let placed = layout_labels(&[anchor(390.0, 40.0)], 0.0, 400.0, PAD);
        assert_eq!(placed[0].x, 360.0); // plot_right - width
    }

    #[test]
    fn clamped_at_the_left_edge() {
        let placed = layout_labels(&[anchor(-30.0, 40.0)], 0.0, 400.0, PAD);
        assert_eq!(placed[0].x, 0.0);
    }

    #[test]
    fn near_labels_on_different_rows_can_reuse_row_zero() {
        // First two collide; third is far away and stays on the baseline
        let anchors = [anchor(50.0, 40.0), anchor(60.0, 40.0), anchor(300.0, 40.0)];
        let placed = layout_labels(&anchors, 0.0, 400.0, PAD);
        assert_eq!(placed[2].row, 0);
    }
}
