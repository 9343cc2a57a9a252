//! Some utility functions

use crate::traits::KeyValueStore;
use crate::store::Planner;
use crate::calendar::Calendar;
use crate::Assignment;

/// A debug utility that pretty-prints the courses of the current user, and their assignments
pub fn print_planner<S: KeyValueStore>(planner: &Planner<S>) {
    match planner.current_user() {
        None => {
            println!("Nobody is logged in ({} users in the roster)", planner.roster().len());
            return;
        },
        Some(user) => println!("USER {} ({})", user.display_label(), user.carnet()),
    }

    for course in planner.courses_for_current_user() {
        println!("COURSE {} - {} (term {})\t{}", course.code(), course.name(), course.term(), course.id());
        for assignment in planner.assignments_for_course(course.id()) {
            print_assignment(assignment);
        }
    }

    let orphans = planner.orphaned_assignments();
    if orphans.is_empty() == false {
        println!("WITHOUT COURSE");
        for assignment in orphans {
            print_assignment(assignment);
        }
    }
}

pub fn print_assignment(assignment: &Assignment) {
    let completion = if assignment.completed() { "✓" } else { " " };
    println!("    {} {}\t[{}] due {}\t{}", completion, assignment.title(), assignment.priority(), assignment.due_date(), assignment.id());
}

/// A debug utility that pretty-prints the month currently shown by a calendar
pub fn print_month(calendar: &Calendar) {
    let month = match calendar.grid().month(calendar.carousel().index()) {
        Some(month) => month,
        None => return,
    };
    println!("{} {}", calendar.carousel().label(), calendar.grid().year());
    println!("{}", crate::calendar::WEEKDAY_HEADERS.join(" "));
    for week in month.weeks() {
        let line: Vec<String> = week.iter()
            .map(|slot| match slot {
                None => String::from("   "),
                Some(cell) => {
                    let marker = if calendar.annotations().get(cell.key()).is_some() { "*" } else { " " };
                    format!("{:>2}{}", cell.day(), marker)
                },
            })
            .collect();
        println!("{}", line.join(" "));
    }
}

