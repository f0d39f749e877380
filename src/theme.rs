use crate::scale::Bucket;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const LABEL_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Black);

pub(crate) const WEEKDAY_STYLE: Style = LABEL_STYLE;

/// Adjacent-year padding cells; never color-coded by count.
pub(crate) const PADDING_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

// The original dashboard's HSL ramp, converted to RGB: two grays, then greens
// of increasing saturation and decreasing lightness.
const BUCKET_ZERO_STYLE: Style = Style::new().fg(Color::Rgb(217, 217, 217)).bg(Color::Black);
const BUCKET_FAINT_STYLE: Style = Style::new().fg(Color::Rgb(179, 179, 179)).bg(Color::Black);
const BUCKET_LOW_STYLE: Style = Style::new().fg(Color::Rgb(166, 217, 166)).bg(Color::Black);
const BUCKET_MID_STYLE: Style = Style::new().fg(Color::Rgb(102, 204, 102)).bg(Color::Black);
const BUCKET_HIGH_STYLE: Style = Style::new().fg(Color::Rgb(46, 184, 46)).bg(Color::Black);
const BUCKET_TOP_STYLE: Style = Style::new().fg(Color::Rgb(23, 130, 23)).bg(Color::Black);

pub(crate) fn bucket_style(bucket: Bucket) -> Style {
    match bucket {
        Bucket::Zero => BUCKET_ZERO_STYLE,
        Bucket::Faint => BUCKET_FAINT_STYLE,
        Bucket::Low => BUCKET_LOW_STYLE,
        Bucket::Mid => BUCKET_MID_STYLE,
        Bucket::High => BUCKET_HIGH_STYLE,
        Bucket::Top => BUCKET_TOP_STYLE,
    }
}

pub(crate) mod picker {
    use super::{Modifier, Style, BASE_STYLE};

    pub(crate) const SELECTED_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);
}
