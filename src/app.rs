use crate::filter::{FilterLevel, FilterSelection};
use crate::heatmap::{legend_line, Heatmap, YearGrid, GRID_LINES};
use crate::help::Help;
use crate::picker::{Picker, PickerInput, PickerOutput, PickerState};
use crate::records::{self, ScoreRecord};
use crate::theme::{BASE_STYLE, LABEL_STYLE, TITLE_STYLE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, read};
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::collections::BTreeMap;
use std::io::{self, Write};
use time::{Date, Duration};

// Grid building pads with adjacent-year days, so keep a year of slack inside
// the range the time crate supports.
pub(crate) const YEAR_MIN: i32 = 1;
pub(crate) const YEAR_MAX: i32 = 9998;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    records: Vec<ScoreRecord>,
    selection: FilterSelection,
    year: i32,
    today: Date,
    cursor: Date,
    scores: BTreeMap<Date, ScoreRecord>,
    grid: YearGrid,
    state: AppState,
}

impl App {
    pub(crate) fn new(today: Date, year: i32, records: Vec<ScoreRecord>) -> App {
        let selection = FilterSelection::default();
        let scores = records::score_map(records.iter().filter(|r| selection.matches(r)));
        let grid = YearGrid::build(year, &scores);
        let cursor = if today.year() == year {
            today
        } else {
            Date::from_ordinal_date(year, 1).expect("year should be within the supported range")
        };
        App {
            records,
            selection,
            year,
            today,
            cursor,
            scores,
            grid,
            state: AppState::Heatmap,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Heatmap => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-7),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(7),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
                KeyCode::Char('[') => self.change_year(-1),
                KeyCode::Char(']') => self.change_year(1),
                KeyCode::Char('s') => self.open_picker(FilterLevel::Subject),
                KeyCode::Char('c') => self.open_picker(FilterLevel::Chapter),
                KeyCode::Char('t') => self.open_picker(FilterLevel::Topic),
                KeyCode::Char('x') => {
                    self.clear_filters();
                    true
                }
                KeyCode::Char('0') | KeyCode::Home => self.jump_to_today(),
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Heatmap;
                true
            }
            AppState::Picking(state) => {
                if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
                    self.state = AppState::Heatmap;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('k') | KeyCode::Up => state.handle_input(PickerInput::Up),
                        KeyCode::Char('j') | KeyCode::Down => state.handle_input(PickerInput::Down),
                        KeyCode::Enter => state.handle_input(PickerInput::Enter),
                        _ => PickerOutput::Invalid,
                    };
                    match output {
                        PickerOutput::Ok => true,
                        PickerOutput::Invalid => false,
                        PickerOutput::Choose(value) => {
                            let level = state.level();
                            self.state = AppState::Heatmap;
                            self.apply_filter(level, value);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    // Every mutation below recomputes the filtered map and the grid from
    // scratch; both are pure functions of the current selection and year.
    fn rebuild(&mut self) {
        self.scores =
            records::score_map(self.records.iter().filter(|r| self.selection.matches(r)));
        self.grid = YearGrid::build(self.year, &self.scores);
    }

    fn move_cursor(&mut self, days: i64) -> bool {
        let Some(date) = self.cursor.checked_add(Duration::days(days)) else {
            return false;
        };
        if date.year() == self.year {
            self.cursor = date;
            true
        } else {
            false
        }
    }

    fn change_year(&mut self, delta: i32) -> bool {
        let Some(year) = self
            .year
            .checked_add(delta)
            .filter(|y| (YEAR_MIN..=YEAR_MAX).contains(y))
        else {
            return false;
        };
        self.year = year;
        self.cursor = same_day_in_year(self.cursor, year);
        self.rebuild();
        true
    }

    fn jump_to_today(&mut self) -> bool {
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.today.year()) {
            return false;
        }
        if self.year != self.today.year() {
            self.year = self.today.year();
            self.rebuild();
        }
        self.cursor = self.today;
        true
    }

    fn open_picker(&mut self, level: FilterLevel) -> bool {
        match PickerState::new(level, &self.selection) {
            Some(state) => {
                self.state = AppState::Picking(state);
                true
            }
            None => false,
        }
    }

    fn apply_filter(&mut self, level: FilterLevel, value: Option<&str>) {
        self.selection = self
            .selection
            .clone()
            .apply(level, value.map(str::to_owned));
        self.rebuild();
    }

    fn clear_filters(&mut self) {
        self.selection = FilterSelection::default();
        self.rebuild();
    }

    fn filter_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(9);
        let mut first = true;
        for level in [FilterLevel::Subject, FilterLevel::Chapter, FilterLevel::Topic] {
            if !std::mem::replace(&mut first, false) {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("{}: ", level.name()), LABEL_STYLE));
            let value = self.selection.get(level).unwrap_or("(all)").to_owned();
            spans.push(Span::styled(value, BASE_STYLE));
        }
        Line::from(spans)
    }

    fn detail_text(&self) -> String {
        records::tooltip(self.cursor, self.scores.get(&self.cursor))
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [title_area, filter_area, _, heat_area, _, legend_area, _, detail_area, hint_area, _] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(GRID_LINES),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);
        Paragraph::new(Line::styled(
            format!("Assessment Submissions {}", self.year),
            TITLE_STYLE,
        ))
        .render(title_area, buf);
        Paragraph::new(self.filter_line()).render(filter_area, buf);
        Heatmap::new(&self.grid, self.cursor).render(heat_area, buf);
        Paragraph::new(legend_line()).render(legend_area, buf);
        Paragraph::new(self.detail_text()).render(detail_area, buf);
        Paragraph::new(Line::styled("Press ? for help", LABEL_STYLE)).render(hint_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Picking(ref mut state) = self.state {
            Picker.render(area, buf, state);
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Heatmap,
    Helping,
    Picking(PickerState),
    Quitting,
}

fn same_day_in_year(date: Date, year: i32) -> Date {
    Date::from_calendar_date(year, date.month(), date.day()).unwrap_or_else(|_| {
        Date::from_calendar_date(year, date.month(), 28)
            .expect("day 28 should exist in every month")
    })
}
