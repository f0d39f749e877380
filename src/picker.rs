use crate::filter::{FilterLevel, FilterSelection};
use crate::theme::{picker::SELECTED_STYLE, BASE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

/// First entry of every picker; choosing it clears the level.
static CLEAR_ENTRY: &str = "(none)";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Picker;

impl StatefulWidget for Picker {
    type State = PickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(" {} ", state.level.name());
        let longest = state
            .entries()
            .map(str::len)
            .chain(std::iter::once(title.len()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(longest)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let height = u16::try_from(state.entry_count())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let [outer_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [outer_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block = Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center);
        let inner_area = block.inner(outer_area);
        block.render(outer_area, buf);
        let lines = state
            .entries()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == state.cursor {
                    SELECTED_STYLE
                } else {
                    BASE_STYLE
                };
                Line::styled(format!(" {entry} "), style)
            })
            .collect::<Vec<_>>();
        Text::from(lines).render(inner_area, buf);
    }
}

/// Modal list of choices for one filter level.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PickerState {
    level: FilterLevel,
    options: Vec<&'static str>,
    cursor: usize,
}

impl PickerState {
    /// Returns `None` when the level's parent is unset, which is what keeps
    /// dependent filters disabled rather than erroring.
    pub(crate) fn new(level: FilterLevel, selection: &FilterSelection) -> Option<PickerState> {
        let parent_set = match level {
            FilterLevel::Subject => true,
            FilterLevel::Chapter => selection.get(FilterLevel::Subject).is_some(),
            FilterLevel::Topic => selection.get(FilterLevel::Chapter).is_some(),
        };
        if !parent_set {
            return None;
        }
        let options = selection.options(level);
        let cursor = selection
            .get(level)
            .and_then(|current| options.iter().position(|&o| o == current))
            .map_or(0, |i| i + 1);
        Some(PickerState {
            level,
            options,
            cursor,
        })
    }

    pub(crate) fn level(&self) -> FilterLevel {
        self.level
    }

    fn entry_count(&self) -> usize {
        self.options.len() + 1
    }

    fn entries(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(CLEAR_ENTRY).chain(self.options.iter().copied())
    }

    pub(crate) fn handle_input(&mut self, input: PickerInput) -> PickerOutput {
        match input {
            PickerInput::Up => {
                if self.cursor == 0 {
                    PickerOutput::Invalid
                } else {
                    self.cursor -= 1;
                    PickerOutput::Ok
                }
            }
            PickerInput::Down => {
                if self.cursor + 1 < self.entry_count() {
                    self.cursor += 1;
                    PickerOutput::Ok
                } else {
                    PickerOutput::Invalid
                }
            }
            PickerInput::Enter => {
                if self.cursor == 0 {
                    PickerOutput::Choose(None)
                } else {
                    self.options
                        .get(self.cursor - 1)
                        .copied()
                        .map_or(PickerOutput::Invalid, |o| PickerOutput::Choose(Some(o)))
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerInput {
    Up,
    Down,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerOutput {
    Ok,
    Invalid,
    Choose(Option<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(subject: Option<&str>, chapter: Option<&str>) -> FilterSelection {
        FilterSelection {
            subject: subject.map(str::to_owned),
            chapter: chapter.map(str::to_owned),
            topic: None,
        }
    }

    #[test]
    fn test_dependent_pickers_disabled_without_parent() {
        let sel = FilterSelection::default();
        assert!(PickerState::new(FilterLevel::Subject, &sel).is_some());
        assert!(PickerState::new(FilterLevel::Chapter, &sel).is_none());
        assert!(PickerState::new(FilterLevel::Topic, &sel).is_none());
        let sel = selection(Some("Algorithms"), None);
        assert!(PickerState::new(FilterLevel::Chapter, &sel).is_some());
        assert!(PickerState::new(FilterLevel::Topic, &sel).is_none());
    }

    #[test]
    fn test_navigation_clamps() {
        let sel = selection(Some("Algorithms"), None);
        let mut state = PickerState::new(FilterLevel::Chapter, &sel).unwrap();
        assert_eq!(state.handle_input(PickerInput::Up), PickerOutput::Invalid);
        assert_eq!(state.handle_input(PickerInput::Down), PickerOutput::Ok);
        for _ in 0..4 {
            assert_eq!(state.handle_input(PickerInput::Down), PickerOutput::Ok);
        }
        assert_eq!(state.handle_input(PickerInput::Down), PickerOutput::Invalid);
    }

    #[test]
    fn test_enter_chooses_option() {
        let sel = selection(Some("Algorithms"), None);
        let mut state = PickerState::new(FilterLevel::Chapter, &sel).unwrap();
        assert_eq!(state.handle_input(PickerInput::Down), PickerOutput::Ok);
        assert_eq!(
            state.handle_input(PickerInput::Enter),
            PickerOutput::Choose(Some("Sorting & Searching"))
        );
    }

    #[test]
    fn test_enter_on_clear_entry() {
        let sel = selection(Some("Algorithms"), None);
        let mut state = PickerState::new(FilterLevel::Subject, &sel).unwrap();
        while state.cursor > 0 {
            assert_eq!(state.handle_input(PickerInput::Up), PickerOutput::Ok);
        }
        assert_eq!(
            state.handle_input(PickerInput::Enter),
            PickerOutput::Choose(None)
        );
    }

    #[test]
    fn test_preselects_current_value() {
        let sel = selection(Some("Algorithms"), Some("Backtracking"));
        let state = PickerState::new(FilterLevel::Chapter, &sel).unwrap();
        // "Backtracking" is the fifth chapter, behind the clear entry.
        assert_eq!(state.cursor, 5);
        let state = PickerState::new(FilterLevel::Topic, &sel).unwrap();
        assert_eq!(state.cursor, 0);
    }
}
