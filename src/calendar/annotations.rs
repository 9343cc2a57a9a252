//! Events attached to calendar days

use std::collections::HashMap;

use super::DayKey;

/// An event shown in the sidebar when its day is clicked
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    notes: String,
    /// Any tag is accepted ("important", "birthday", "festivity"...)
    category: String,
}

impl Annotation {
    pub fn new<N, T, C>(name: N, notes: T, category: C) -> Self
    where
        N: ToString,
        T: ToString,
        C: ToString,
    {
        Self {
            name: name.to_string(),
            notes: notes.to_string(),
            category: category.to_string(),
        }
    }

    pub fn name(&self) -> &str      { &self.name     }
    pub fn notes(&self) -> &str     { &self.notes    }
    pub fn category(&self) -> &str  { &self.category }

    /// The class suffix of the category, e.g. `event--birthday`, if there is a category
    pub fn category_class(&self, prefix: &str) -> Option<String> {
        let category = self.category.trim();
        if category.is_empty() {
            None
        } else {
            Some(format!("{}--{}", prefix, category))
        }
    }
}

/// Annotations, by day
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationStore {
    by_day: HashMap<DayKey, Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an annotation to a day, replacing (and returning) the previous one
    pub fn attach(&mut self, key: DayKey, annotation: Annotation) -> Option<Annotation> {
        self.by_day.insert(key, annotation)
    }

    pub fn get(&self, key: DayKey) -> Option<&Annotation> {
        self.by_day.get(&key)
    }

    pub fn remove(&mut self, key: DayKey) -> Option<Annotation> {
        self.by_day.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

/// The events every calendar starts with, in the order they are applied.
///
/// Today comes last, so that it wins over a fixed date falling on the same day.
pub fn default_events(today: DayKey) -> Vec<(DayKey, Annotation)> {
    let year = today.year();
    let fixed = [
        (12, 25, Annotation::new("MERRY CHRISTMAS", "A lot of gift!!!!", "festivity")),
        (5, 4, Annotation::new("LUCA'S BIRTHDAY", "Another gifts...?", "birthday")),
        (3, 3, Annotation::new("MY LADY'S BIRTHDAY", "A lot of money to spent!!!!", "birthday")),
    ];

    let mut events = Vec::with_capacity(fixed.len() + 1);
    for (month, day, annotation) in fixed.iter() {
        if let Some(key) = DayKey::new(year, *month, *day) {
            events.push((key, annotation.clone()));
        }
    }
    events.push((today, Annotation::new("YEAH!", "Today is your day", "important")));
    events
}
