mod grid;
mod widget;
pub(crate) use self::grid::YearGrid;
pub(crate) use self::widget::{legend_line, Heatmap, GRID_LINES};
