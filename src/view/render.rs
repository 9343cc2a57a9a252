//! HTML fragments of the notes screen

use chrono::{DateTime, Datelike, Utc};
use maud::{html, Markup};

use crate::assignment::Assignment;
use crate::course::Course;
use crate::store::Planner;
use crate::traits::KeyValueStore;

/// The options of the course `<select>` of the assignment form
pub fn render_course_select(courses: &[&Course]) -> Markup {
    html! {
        option value="" { "Seleccionar materia" }
        @for course in courses {
            option value=(course.id().as_str()) { (course.code()) " - " (course.name()) }
        }
    }
}

/// One card per course of the current user, with its assignments
pub fn render_course_list<S: KeyValueStore>(planner: &Planner<S>, now: DateTime<Utc>) -> Markup {
    if planner.current_user().and_then(|u| u.id()).is_none() {
        return html! { p.no-data { "Debes iniciar sesión para ver tus materias." } };
    }

    let courses = planner.courses_for_current_user();
    if courses.is_empty() {
        return html! { p.no-data { "No hay materias registradas. Agrega tu primera materia." } };
    }

    html! {
        @for course in courses {
            @let assignments = planner.assignments_for_course(course.id());
            div.materia-card {
                div.materia-header {
                    span.materia-nombre { (course.name()) }
                    span.materia-codigo { (course.code()) " - Sem " (course.term()) }
                }
                div.trabajos-lista {
                    @if assignments.is_empty() {
                        p.no-trabajos { "No hay trabajos asignados" }
                    } @else {
                        @for assignment in assignments {
                            (render_assignment(assignment, now))
                        }
                    }
                }
            }
        }
    }
}

pub fn render_assignment(assignment: &Assignment, now: DateTime<Utc>) -> Markup {
    let mut classes = vec![
        String::from("trabajo-item"),
        format!("prioridad-{}", assignment.priority()),
    ];
    let due_class = assignment.due_status(now).css_class();
    if due_class.is_empty() == false {
        classes.push(due_class.to_string());
    }

    let due_date = match assignment.parsed_due_date() {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => String::from("Fecha inválida"),
    };
    let days_left = match assignment.days_left(now) {
        Some(days) => days.to_string(),
        None => String::from("?"),
    };
    let description = match assignment.description() {
        "" => "Sin descripción",
        text => text,
    };
    let (icon, label) = if assignment.completed() {
        ("✅", "Completado")
    } else {
        ("⏳", "Marcar como completado")
    };
    let id = assignment.id().as_str();

    html! {
        div class=(classes.join(" ")) data-id=(id) {
            strong { (assignment.title()) }
            p { (description) }
            small { "Entrega: " (due_date) " (" (days_left) " días)" }
            button.btn-app data-action="toggle" data-id=(id) { (icon) " " (label) }
            button.btn-app data-action="delete" data-id=(id) { "🗑️ Eliminar" }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    use crate::assignment::NewAssignment;
    use crate::id::RecordId;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 8, 9, 0, 0).unwrap()
    }

    fn assignment(due_date: &str, description: &str) -> Assignment {
        Assignment::new(RecordId::from("u1"), NewAssignment {
            course_id: RecordId::from("c1"),
            title: "Ensayo <final>".into(),
            description: description.into(),
            due_date: due_date.into(),
            priority: "alta".into(),
        })
    }

    #[test]
    fn assignment_due_soon() {
        let html = render_assignment(&assignment("2024-05-10", ""), now()).into_string();
        assert!(html.starts_with("<div class=\"trabajo-item prioridad-alta fecha-proxima\""));
        assert!(html.contains("<strong>Ensayo &lt;final&gt;</strong>"));
        assert!(html.contains("<p>Sin descripción</p>"));
        assert!(html.contains("Entrega: 10/5/2024 (2 días)"));
        assert!(html.contains("⏳ Marcar como completado"));
    }

    #[test]
    fn assignment_overdue_and_completed() {
        let mut a = assignment("2024-05-01", "Capítulo 2");
        a.toggle_completed();
        let html = render_assignment(&a, now()).into_string();
        assert!(html.starts_with("<div class=\"trabajo-item prioridad-alta fecha-pasada\""));
        assert!(html.contains("<p>Capítulo 2</p>"));
        assert!(html.contains("✅ Completado"));
    }

    #[test]
    fn invalid_due_date() {
        let html = render_assignment(&assignment("pronto", ""), now()).into_string();
        assert!(html.starts_with("<div class=\"trabajo-item prioridad-alta\""));
        assert!(html.contains("Entrega: Fecha inválida (? días)"));
    }
}
