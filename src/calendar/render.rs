//! HTML rendering of the calendar

use maud::{html, Markup};

use super::{Calendar, Sidebar, WEEKDAY_HEADERS};
use super::annotations::Annotation;
use super::grid::{DayCell, MonthGrid};

/// The twelve month blocks, in order. They are meant to be laid out side by side and shifted by [`Carousel::offset_percent`](super::carousel::Carousel::offset_percent)
pub fn render_year(calendar: &Calendar) -> Markup {
    html! {
        @for month in calendar.grid().months() {
            (render_month(calendar, month))
        }
    }
}

pub fn render_month(calendar: &Calendar, month: &MonthGrid) -> Markup {
    let month_number = format!("{:02}", month.month());
    let month_class = format!("c-main c-main-{}", month_number);

    html! {
        div class=(month_class) data-month=(month_number) {
            div.c-cal__row {
                @for header in WEEKDAY_HEADERS.iter() {
                    div.c-cal__col { (*header) }
                }
            }
            @for week in month.weeks() {
                div.c-cal__row {
                    @for slot in week {
                        @match slot {
                            Some(cell) => { (render_cell(calendar, cell)) }
                            None => { div.c-cal__cel {} }
                        }
                    }
                }
            }
        }
    }
}

fn render_cell(calendar: &Calendar, cell: &DayCell) -> Markup {
    let key = cell.key();
    let annotation = calendar.annotations().get(key);

    let mut classes = vec![String::from("c-cal__cel")];
    if key == calendar.today() {
        classes.push(String::from("isToday"));
    }
    if calendar.selected() == Some(key) {
        classes.push(String::from("isSelected"));
    }
    if let Some(annotation) = annotation {
        classes.push(String::from("event"));
        classes.extend(annotation.category_class("event"));
    }

    html! {
        div class=(classes.join(" "))
            data-day=(key.to_string())
            data-name=[annotation.map(|a| a.name())]
            data-notes=[annotation.map(|a| a.notes())] {
            p { (cell.day()) }
        }
    }
}

/// The line describing an event in the sidebar
pub fn render_sidebar_event(annotation: &Annotation) -> Markup {
    let class = match annotation.category_class("c-aside__event") {
        Some(category) => format!("c-aside__event {}", category),
        None => String::from("c-aside__event"),
    };
    html! {
        p class=(class) {
            (annotation.name()) " "
            span { " • " (annotation.notes()) }
        }
    }
}

/// The day number, the month name and the event of a day
pub fn render_sidebar(sidebar: &Sidebar<'_>) -> Markup {
    html! {
        div.c-aside__day {
            span.c-aside__num { (sidebar.day) }
            " "
            span.c-aside__month { (sidebar.month_name) }
        }
        div.c-aside__eventList {
            @if let Some(event) = sidebar.event {
                (render_sidebar_event(event))
            }
        }
    }
}
