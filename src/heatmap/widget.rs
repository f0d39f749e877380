use super::grid::YearGrid;
use crate::scale::Bucket;
use crate::theme::{self, LABEL_STYLE, MONTH_STYLE, WEEKDAY_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use time::{Date, Month};

/// Number of columns on the left side of the grid, used as the margin in
/// which the weekday labels are written
const LEFT_MARGIN: u16 = 4;

/// Number of columns per week of the grid
const CELL_WIDTH: u16 = 2;

/// Number of lines taken up by the grid: the month-label row plus one row per
/// day of the week
pub(crate) const GRID_LINES: u16 = 8;

static DAY_SYMBOL: &str = "■";
static PAD_SYMBOL: &str = "·";

/// Renders a [`YearGrid`] as week columns under a month-label row, with the
/// cursor cell shown in reverse video.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Heatmap<'a> {
    grid: &'a YearGrid,
    cursor: Date,
}

impl<'a> Heatmap<'a> {
    pub(crate) fn new(grid: &'a YearGrid, cursor: Date) -> Heatmap<'a> {
        Heatmap { grid, cursor }
    }
}

impl Widget for Heatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = Canvas { area, buf };
        for label in self.grid.month_labels() {
            let week = u16::try_from(label.week).unwrap_or(u16::MAX);
            let x = CELL_WIDTH.saturating_mul(week).saturating_add(LEFT_MARGIN);
            canvas.print(0, x, month_abbrev(label.month), MONTH_STYLE);
        }
        for (row, name) in [(2, "Mon"), (4, "Wed"), (6, "Fri")] {
            canvas.print(row, 0, name, WEEKDAY_STYLE);
        }
        for (week_no, week) in self.grid.weeks().iter().enumerate() {
            let week_no = u16::try_from(week_no).unwrap_or(u16::MAX);
            let x = CELL_WIDTH
                .saturating_mul(week_no)
                .saturating_add(LEFT_MARGIN);
            for (day_no, cell) in week.cells().iter().enumerate() {
                let y = u16::try_from(day_no).unwrap_or(u16::MAX).saturating_add(1);
                let (symbol, style) = if cell.date == self.cursor {
                    (
                        DAY_SYMBOL,
                        theme::bucket_style(cell.bucket).add_modifier(Modifier::REVERSED),
                    )
                } else if cell.in_target_year {
                    (DAY_SYMBOL, theme::bucket_style(cell.bucket))
                } else {
                    (PAD_SYMBOL, theme::PADDING_STYLE)
                };
                canvas.print(y, x, symbol, style);
            }
        }
    }
}

/// Legend row mapping each bucket to its count range, lightest to darkest.
pub(crate) fn legend_line() -> Line<'static> {
    let mut spans = vec![Span::styled("Less ", LABEL_STYLE)];
    for bucket in Bucket::ALL {
        spans.push(Span::styled(DAY_SYMBOL, theme::bucket_style(bucket)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("More", LABEL_STYLE));
    let ranges = Bucket::ALL.map(Bucket::range).join(" / ");
    spans.push(Span::styled(format!("   {ranges} assessments"), LABEL_STYLE));
    Line::from(spans)
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    // Truncates at the right edge of the area rather than wrapping or
    // panicking.
    fn print(&mut self, y: u16, x: u16, s: &str, style: Style) {
        if y < self.area.height && x < self.area.width {
            let max_width = usize::from(self.area.width - x);
            self.buf
                .set_stringn(self.area.x + x, self.area.y + y, s, max_width, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{score_map, ScoreRecord};
    use ratatui::style::Color;
    use time::macros::date;

    fn record(date: Date, count: u32) -> ScoreRecord {
        ScoreRecord {
            date,
            total_assessments: count,
            subject: "Algorithms".into(),
            chapter: "Backtracking".into(),
            topic: "N-Queens".into(),
        }
    }

    fn render_2024(cursor: Date) -> Buffer {
        let records = [record(date!(2024 - 01 - 01), 7)];
        let grid = YearGrid::build(2024, &score_map(&records));
        let area = Rect::new(0, 0, 120, 8);
        let mut buf = Buffer::empty(area);
        Heatmap::new(&grid, cursor).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_month_and_weekday_labels() {
        let buf = render_2024(date!(2024 - 06 - 15));
        // January labels week 0, February week 5.
        assert_eq!(buf[(4, 0)].symbol(), "J");
        assert_eq!(buf[(5, 0)].symbol(), "a");
        assert_eq!(buf[(14, 0)].symbol(), "F");
        assert_eq!(buf[(0, 2)].symbol(), "M");
        assert_eq!(buf[(0, 4)].symbol(), "W");
        assert_eq!(buf[(0, 6)].symbol(), "F");
    }

    #[test]
    fn test_cell_symbols_and_colors() {
        let buf = render_2024(date!(2024 - 06 - 15));
        // 2023-12-31 pads the Sunday slot of week 0.
        assert_eq!(buf[(4, 1)].symbol(), PAD_SYMBOL);
        assert_eq!(buf[(4, 1)].style().fg, Some(Color::DarkGray));
        // 2024-01-01 sits on Monday of week 0 with the 6-8 bucket color.
        assert_eq!(buf[(4, 2)].symbol(), DAY_SYMBOL);
        assert_eq!(buf[(4, 2)].style().fg, Some(Color::Rgb(102, 204, 102)));
        // An empty day gets the zero-bucket gray: 2024-01-02, Tuesday.
        assert_eq!(buf[(4, 3)].symbol(), DAY_SYMBOL);
        assert_eq!(buf[(4, 3)].style().fg, Some(Color::Rgb(217, 217, 217)));
    }

    #[test]
    fn test_cursor_cell_is_reversed() {
        let buf = render_2024(date!(2024 - 01 - 01));
        assert!(buf[(4, 2)]
            .style()
            .add_modifier
            .contains(Modifier::REVERSED));
        assert!(!buf[(4, 3)]
            .style()
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn test_truncates_in_narrow_area() {
        let records = [record(date!(2024 - 01 - 01), 7)];
        let grid = YearGrid::build(2024, &score_map(&records));
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        // Must not panic; cells past column 19 are simply not drawn.
        Heatmap::new(&grid, date!(2024 - 06 - 15)).render(area, &mut buf);
        assert_eq!(buf[(4, 2)].symbol(), DAY_SYMBOL);
    }

    #[test]
    fn test_legend_line() {
        let line = legend_line();
        let text = line
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect::<String>();
        assert!(text.starts_with("Less"));
        assert!(text.contains("More"));
        assert!(text.contains("0 / 1-2 / 3-5 / 6-8 / 9-11 / 12+ assessments"));
    }
}
