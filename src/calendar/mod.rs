//! A full-year calendar, shown as a carousel of month grids
//!
//! Everything here is pure date arithmetic: [`grid`] lays out the days of a year, [`carousel`] tracks which month is centered,
//! [`annotations`] stores the events attached to days, and [`render`] turns them into HTML.

pub mod grid;
pub mod carousel;
pub mod annotations;
pub mod render;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use grid::YearGrid;
use carousel::Carousel;
use annotations::{Annotation, AnnotationStore};

/// Spanish month names, as shown in the paginator and the sidebar
pub const MONTH_NAMES: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

/// Column headers of a month grid. Weeks start on Sunday
pub const WEEKDAY_HEADERS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sab"];

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Divisible by 4 and not by 100, or divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days of every month of `year`
pub fn month_lengths(year: i32) -> [u32; 12] {
    let mut lengths = MONTH_LENGTHS;
    if is_leap_year(year) {
        lengths[1] = 29;
    }
    lengths
}

/// The (capitalised) name of a month, counted from 1
pub fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[month as usize - 1]),
        _ => None,
    }
}


/// The key of a day cell, formatted `year-MM-DD`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    date: NaiveDate,
}

impl DayKey {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn date(&self) -> NaiveDate { self.date }
    pub fn year(&self) -> i32       { self.date.year() }
    pub fn month(&self) -> u32      { self.date.month() }
    pub fn day(&self) -> u32        { self.date.day() }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for DayKey {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split from the right, so that negative years still parse
        let mut parts = s.trim().rsplitn(3, '-');
        let day = parts.next().ok_or("Missing day")?.parse()?;
        let month = parts.next().ok_or("Missing month")?.parse()?;
        let year = parts.next().ok_or("Missing year")?.parse()?;
        match DayKey::new(year, month, day) {
            Some(key) => Ok(key),
            None => Err(format!("Invalid date: {}", s).into()),
        }
    }
}


/// What the sidebar shows about a day
#[derive(Clone, Debug, PartialEq)]
pub struct Sidebar<'a> {
    pub day: u32,
    pub month_name: &'static str,
    pub event: Option<&'a Annotation>,
}


/// The calendar of the current year, as seen on the page
#[derive(Clone, Debug)]
pub struct Calendar {
    grid: YearGrid,
    today: DayKey,
    carousel: Carousel,
    annotations: AnnotationStore,
    selected: Option<DayKey>,
}

impl Calendar {
    /// Build the calendar of the year of `today`, centered on its month, with the default events
    pub fn new(today: NaiveDate) -> Result<Self, Box<dyn Error>> {
        let today = DayKey::from(today);
        let grid = YearGrid::build(today.year())?;
        let carousel = Carousel::new(today.month());

        let mut annotations = AnnotationStore::new();
        for (key, annotation) in annotations::default_events(today) {
            annotations.attach(key, annotation);
        }

        Ok(Self { grid, today, carousel, annotations, selected: None })
    }

    /// Build the calendar for the local current date
    pub fn for_today() -> Result<Self, Box<dyn Error>> {
        Self::new(Local::now().date_naive())
    }

    pub fn grid(&self) -> &YearGrid             { &self.grid        }
    pub fn today(&self) -> DayKey               { self.today        }
    pub fn carousel(&self) -> &Carousel         { &self.carousel    }
    pub fn carousel_mut(&mut self) -> &mut Carousel { &mut self.carousel }
    pub fn annotations(&self) -> &AnnotationStore   { &self.annotations }
    pub fn selected(&self) -> Option<DayKey>    { self.selected     }

    /// Move the carousel back to the month of today. Returns the number of single-step moves
    pub fn show_current_month(&mut self) -> u32 {
        self.carousel.jump_to(self.today.month())
    }

    /// A day has been clicked. Days outside this calendar are ignored
    pub fn select_day(&mut self, key: DayKey) -> Option<Sidebar<'_>> {
        if self.grid.contains(key) == false {
            log::debug!("Ignoring a click on {}, which is not part of the calendar", key);
            return None;
        }
        self.selected = Some(key);
        Some(self.sidebar(key))
    }

    pub fn sidebar(&self, key: DayKey) -> Sidebar<'_> {
        Sidebar {
            day: key.day(),
            month_name: MONTH_NAMES[key.month() as usize - 1],
            event: self.annotations.get(key),
        }
    }

    /// The date the event creator is pre-filled with: the selected day, or today
    pub fn event_creator_default_date(&self) -> DayKey {
        self.selected.unwrap_or(self.today)
    }

    /// Attach an event to a day. Returns `false` (and does nothing) when the day is not part of this calendar
    pub fn save_event(&mut self, key: DayKey, annotation: Annotation) -> bool {
        if self.grid.contains(key) == false {
            log::warn!("Cannot add an event on {}, which is not part of the calendar", key);
            return false;
        }
        self.annotations.attach(key, annotation);
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert_eq!(month_lengths(2000)[1], 29);
        assert_eq!(month_lengths(1900)[1], 28);
        assert_eq!(month_lengths(2024)[1], 29);
        assert_eq!(month_lengths(2023)[1], 28);
        for year in 1583..2500 {
            let expected: u32 = if is_leap_year(year) { 366 } else { 365 };
            assert_eq!(month_lengths(year).iter().sum::<u32>(), expected);
            assert_eq!(is_leap_year(year), NaiveDate::from_ymd_opt(year, 2, 29).is_some());
        }
    }

    #[test]
    fn day_keys() {
        let key = DayKey::new(2024, 3, 7).unwrap();
        assert_eq!(key.to_string(), "2024-03-07");
        assert_eq!("2024-03-07".parse::<DayKey>().unwrap(), key);
        assert!("2023-02-29".parse::<DayKey>().is_err());
        assert!("hello".parse::<DayKey>().is_err());
        assert!(DayKey::new(2024, 13, 1).is_none());
    }

    #[test]
    fn selecting_days() {
        let mut cal = Calendar::new(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()).unwrap();
        assert_eq!(cal.event_creator_default_date().to_string(), "2024-05-20");

        let christmas = DayKey::new(2024, 12, 25).unwrap();
        let sidebar = cal.select_day(christmas).unwrap();
        assert_eq!(sidebar.day, 25);
        assert_eq!(sidebar.month_name, "Diciembre");
        assert_eq!(sidebar.event.unwrap().category(), "festivity");
        assert_eq!(cal.event_creator_default_date(), christmas);

        // Not part of this year: nothing changes
        assert!(cal.select_day(DayKey::new(2025, 1, 1).unwrap()).is_none());
        assert_eq!(cal.selected(), Some(christmas));
    }

    #[test]
    fn christmas_day_shows_today_first() {
        let cal = Calendar::new(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()).unwrap();
        let sidebar = cal.sidebar(cal.today());
        assert_eq!(sidebar.event.unwrap().name(), "YEAH!");
        assert_eq!(cal.annotations().len(), 3);
    }

    #[test]
    fn saving_events() {
        let mut cal = Calendar::new(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()).unwrap();
        let key = DayKey::new(2024, 6, 1).unwrap();
        assert!(cal.sidebar(key).event.is_none());

        let exam = Annotation::new("Parcial", "Unidades 1 a 3", "important");
        assert!(cal.save_event(key, exam.clone()));
        assert_eq!(cal.sidebar(key).event, Some(&exam));

        assert_eq!(cal.save_event(DayKey::new(2023, 6, 1).unwrap(), exam), false);
    }

    #[test]
    fn back_to_current_month() {
        let mut cal = Calendar::new(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()).unwrap();
        assert_eq!(cal.carousel().index(), 5);
        cal.carousel_mut().next();
        cal.carousel_mut().next();
        assert_eq!(cal.show_current_month(), 2);
        assert_eq!(cal.carousel().index(), 5);
        assert_eq!(cal.show_current_month(), 0);
    }
}
