//! Multi-chart cursor synchronization: the registry of live charts, the
//! pointer state machine with its time-of-day broadcast, and the label
//! layout geometry shared by cursor overlays and peak markers.

mod cursor;
mod overlay;
mod registry;

pub use cursor::{pointer_leave, pointer_move};
pub use overlay::{LabelAnchor, PlacedLabel, layout_labels};
pub use registry::{ChartEntry, ChartId, ChartRegistry, CursorState};
