use crate::records::ScoreRecord;
use crate::scale::Bucket;
use std::collections::BTreeMap;
use time::{Date, Month};

const DAYS_IN_WEEK: usize = 7;

/// One day of the grid.  Padding cells from the adjacent years exist only to
/// complete the first and last weeks; they always carry a zero count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    pub(crate) date: Date,
    pub(crate) in_target_year: bool,
    pub(crate) count: u32,
    pub(crate) bucket: Bucket,
}

impl Cell {
    fn new(year: i32, date: Date, scores: &BTreeMap<Date, ScoreRecord>) -> Cell {
        let in_target_year = date.year() == year;
        // Records outside the target year are never matched, so padding cells
        // stay at zero.
        let count = if in_target_year {
            scores.get(&date).map_or(0, |r| r.total_assessments)
        } else {
            0
        };
        Cell {
            date,
            in_target_year,
            count,
            bucket: Bucket::for_count(count),
        }
    }
}

/// Exactly seven cells, Sunday first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Week([Cell; DAYS_IN_WEEK]);

impl Week {
    pub(crate) fn cells(&self) -> &[Cell; DAYS_IN_WEEK] {
        &self.0
    }

    fn first_in_year(&self) -> Option<&Cell> {
        self.0.iter().find(|c| c.in_target_year)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthLabel {
    pub(crate) month: Month,
    pub(crate) week: usize,
}

/// Week-aligned grid of one calendar year, padded at both ends with
/// adjacent-year days so every week is full.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct YearGrid {
    year: i32,
    weeks: Vec<Week>,
    month_labels: Vec<MonthLabel>,
}

impl YearGrid {
    pub(crate) fn build(year: i32, scores: &BTreeMap<Date, ScoreRecord>) -> YearGrid {
        let first = Date::from_ordinal_date(year, 1)
            .expect("year should be within the supported range");
        let last = Date::from_calendar_date(year, Month::December, 31)
            .expect("year should be within the supported range");
        let lead = usize::from(first.weekday().number_days_from_sunday());
        let mut date = first;
        for _ in 0..lead {
            date = date
                .previous_day()
                .expect("the calendar should extend before January 1");
        }
        let mut cells = Vec::with_capacity(DAYS_IN_WEEK * 54);
        loop {
            cells.push(Cell::new(year, date, scores));
            if date >= last && cells.len() % DAYS_IN_WEEK == 0 {
                break;
            }
            date = date
                .next_day()
                .expect("the calendar should extend past December 31");
        }
        let weeks = cells
            .chunks_exact(DAYS_IN_WEEK)
            .map(|chunk| {
                Week(<[Cell; DAYS_IN_WEEK]>::try_from(chunk)
                    .expect("chunks_exact should yield full weeks"))
            })
            .collect::<Vec<_>>();
        let month_labels = derive_month_labels(&weeks);
        YearGrid {
            year,
            weeks,
            month_labels,
        }
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub(crate) fn month_labels(&self) -> &[MonthLabel] {
        &self.month_labels
    }
}

// A month is labeled at the first week whose first in-year cell enters it.
// Keying off the previously *labeled* month (not the week index) is what rules
// out duplicate consecutive labels.
fn derive_month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels = Vec::with_capacity(12);
    let mut current = None;
    for (week, w) in weeks.iter().enumerate() {
        if let Some(cell) = w.first_in_year() {
            let month = cell.date.month();
            if current != Some(month) {
                labels.push(MonthLabel { month, week });
                current = Some(month);
            }
        }
    }
    labels
}
