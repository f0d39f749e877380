use crate::hierarchy;
use crate::records::ScoreRecord;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum FilterLevel {
    Subject,
    Chapter,
    Topic,
}

impl FilterLevel {
    pub(crate) fn name(self) -> &'static str {
        match self {
            FilterLevel::Subject => "Subject",
            FilterLevel::Chapter => "Chapter",
            FilterLevel::Topic => "Topic",
        }
    }
}

/// The current subject/chapter/topic selection.  `None` means "unset".
///
/// Invariant, maintained by [`FilterSelection::apply`]: `chapter` is only set
/// while `subject` is, and `topic` only while `chapter` is.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FilterSelection {
    pub(crate) subject: Option<String>,
    pub(crate) chapter: Option<String>,
    pub(crate) topic: Option<String>,
}

impl FilterSelection {
    /// The one cascade transition: changing a level resets everything below it.
    pub(crate) fn apply(self, level: FilterLevel, value: Option<String>) -> FilterSelection {
        match level {
            FilterLevel::Subject => FilterSelection {
                subject: value,
                chapter: None,
                topic: None,
            },
            FilterLevel::Chapter => FilterSelection {
                chapter: value,
                topic: None,
                ..self
            },
            FilterLevel::Topic => FilterSelection {
                topic: value,
                ..self
            },
        }
    }

    pub(crate) fn clear(self, level: FilterLevel) -> FilterSelection {
        self.apply(level, None)
    }

    pub(crate) fn get(&self, level: FilterLevel) -> Option<&str> {
        match level {
            FilterLevel::Subject => self.subject.as_deref(),
            FilterLevel::Chapter => self.chapter.as_deref(),
            FilterLevel::Topic => self.topic.as_deref(),
        }
    }

    /// Exact-match AND across the set fields; unset fields impose no
    /// constraint.
    pub(crate) fn matches(&self, record: &ScoreRecord) -> bool {
        field_matches(self.subject.as_deref(), &record.subject)
            && field_matches(self.chapter.as_deref(), &record.chapter)
            && field_matches(self.topic.as_deref(), &record.topic)
    }

    /// Choices available at a level given the levels above it.  Chapter and
    /// topic lists are empty until their parent level is set.
    pub(crate) fn options(&self, level: FilterLevel) -> Vec<&'static str> {
        match level {
            FilterLevel::Subject => hierarchy::CURRICULUM.iter().map(|s| s.name).collect(),
            FilterLevel::Chapter => self
                .subject
                .as_deref()
                .and_then(hierarchy::find_subject)
                .map(|s| s.chapters.iter().map(|c| c.name).collect())
                .unwrap_or_default(),
            FilterLevel::Topic => self
                .subject
                .as_deref()
                .and_then(hierarchy::find_subject)
                .and_then(|s| self.chapter.as_deref().and_then(|c| s.find_chapter(c)))
                .map(|c| c.topics.to_vec())
                .unwrap_or_default(),
        }
    }
}

fn field_matches(selected: Option<&str>, value: &str) -> bool {
    selected.map_or(true, |s| s == value)
}
