//! Lays out the days of a year in Sunday-first month grids

use std::error::Error;

use chrono::{Datelike, NaiveDate};

use super::{month_lengths, DayKey};

/// A day of a month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    key: DayKey,
}

impl DayCell {
    pub fn key(&self) -> DayKey  { self.key }
    /// The number displayed in the cell
    pub fn day(&self) -> u32     { self.key.day() }
}

/// The days of one month, and where the first one falls in the week
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    /// Empty cells before the first day. This is the weekday of the 1st (0 = Sunday)
    leading_blanks: u32,
    days: Vec<DayCell>,
}

impl MonthGrid {
    fn build(year: i32, month: u32, length: u32) -> Result<Self, Box<dyn Error>> {
        let first = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date,
            None => return Err(format!("Year {} is out of the supported range", year).into()),
        };
        let leading_blanks = first.weekday().num_days_from_sunday();

        let mut days = Vec::with_capacity(length as usize);
        for day in 1..=length {
            let key = DayKey::new(year, month, day)
                .ok_or_else(|| format!("Invalid date {}-{}-{}", year, month, day))?;
            days.push(DayCell { key });
        }

        Ok(Self { year, month, leading_blanks, days })
    }

    pub fn year(&self) -> i32             { self.year }
    /// Counted from 1
    pub fn month(&self) -> u32            { self.month }
    pub fn leading_blanks(&self) -> u32   { self.leading_blanks }
    pub fn days(&self) -> &[DayCell]      { &self.days }

    /// The grid as rows of 7 slots, `None` being a blank.
    ///
    /// Only the first row is padded: the last row stops at the last day of the month.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let mut slots: Vec<Option<&DayCell>> = Vec::with_capacity(self.leading_blanks as usize + self.days.len());
        slots.extend((0..self.leading_blanks).map(|_| None));
        slots.extend(self.days.iter().map(Some));

        slots.chunks(7)
            .map(|week| week.to_vec())
            .collect()
    }
}

/// The twelve months of a year
#[derive(Clone, Debug, PartialEq)]
pub struct YearGrid {
    year: i32,
    months: Vec<MonthGrid>,
}

impl YearGrid {
    pub fn build(year: i32) -> Result<Self, Box<dyn Error>> {
        let lengths = month_lengths(year);
        let mut months = Vec::with_capacity(12);
        for (index, length) in lengths.iter().enumerate() {
            months.push(MonthGrid::build(year, index as u32 + 1, *length)?);
        }
        Ok(Self { year, months })
    }

    pub fn year(&self) -> i32             { self.year }
    pub fn months(&self) -> &[MonthGrid]  { &self.months }

    /// Month counted from 1
    pub fn month(&self, month: u32) -> Option<&MonthGrid> {
        match month {
            1..=12 => self.months.get(month as usize - 1),
            _ => None,
        }
    }

    pub fn contains(&self, key: DayKey) -> bool {
        key.year() == self.year
    }

    pub fn cell(&self, key: DayKey) -> Option<&DayCell> {
        if self.contains(key) == false {
            return None;
        }
        self.month(key.month())?.days.get(key.day() as usize - 1)
    }
}
