//! Reacts to the user interactions of the notes screen

use chrono::Utc;

use crate::assignment::NewAssignment;
use crate::id::RecordId;
use crate::store::Planner;
use crate::traits::{KeyValueStore, RosterSource};

use super::{ids, Page, ViewState};
use super::render::{render_course_list, render_course_select};

const CONFIRM_DELETE: &str = "¿Estás seguro de que quieres eliminar este trabajo?";

/// Owns the planner, and keeps the page in sync with it
#[derive(Debug)]
pub struct Controller<S: KeyValueStore> {
    planner: Planner<S>,
    view: ViewState,
}

impl<S: KeyValueStore> Controller<S> {
    pub fn new(planner: Planner<S>) -> Self {
        Self { planner, view: ViewState::default() }
    }

    pub fn planner(&self) -> &Planner<S> { &self.planner }
    pub fn view(&self) -> &ViewState     { &self.view    }

    /// Load the roster, then show the app if a user is still logged in, or the login screen otherwise
    pub async fn init<R, P>(&mut self, roster: &R, page: &mut P)
    where
        R: RosterSource + ?Sized,
        P: Page + ?Sized,
    {
        self.planner.load_roster(roster).await;
        if self.planner.current_user().is_some() {
            self.show_app(page);
        } else {
            self.show_login(page);
        }
    }

    fn show_login<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.view.show_login();
        page.reset_form(ids::LOGIN_FORM);
        page.apply_view(&self.view);
    }

    fn show_app<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.view.show_app();
        if let Some(user) = self.planner.current_user() {
            page.set_text(ids::USER_LABEL, user.carnet());
        }
        self.refresh(page);
        page.apply_view(&self.view);
    }

    /// Re-render the course select and the course list
    pub fn refresh<P: Page + ?Sized>(&self, page: &mut P) {
        let courses = self.planner.courses_for_current_user();
        page.set_html(ids::COURSE_SELECT, &render_course_select(&courses).into_string());
        page.set_html(ids::COURSE_LIST, &render_course_list(&self.planner, Utc::now()).into_string());
    }

    pub fn submit_login<P: Page + ?Sized>(&mut self, page: &mut P) {
        let (carnet, password) = match (page.value(ids::CARNET), page.value(ids::PASSWORD)) {
            (Some(carnet), Some(password)) => (carnet, password),
            _ => {
                page.alert("Formulario de login incompleto en el DOM.");
                return;
            },
        };

        let logged_in = self.planner.login(&carnet, &password).map(|_| ());
        match logged_in {
            Ok(()) => self.show_app(page),
            Err(err) => page.alert(&err.to_string()),
        }
    }

    pub fn logout<P: Page + ?Sized>(&mut self, page: &mut P) {
        if let Err(err) = self.planner.logout() {
            log::warn!("Unable to forget the current user: {}", err);
        }
        self.show_login(page);
    }

    /// Returns `false` (after sending the user back to the login screen) when nobody able to own records is logged in
    fn ensure_authenticated<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if self.planner.current_user().and_then(|u| u.id()).is_some() {
            return true;
        }
        log::error!("No authenticated user: {:?}", self.planner.current_user());
        self.show_login(page);
        false
    }

    pub fn submit_course<P: Page + ?Sized>(&mut self, page: &mut P) {
        if self.ensure_authenticated(page) == false {
            return;
        }

        let fields = (page.value(ids::COURSE_NAME), page.value(ids::COURSE_CODE), page.value(ids::COURSE_TERM));
        let (name, code, term) = match fields {
            (Some(name), Some(code), Some(term)) => (name, code, term),
            _ => {
                page.alert("Formulario de materia incompleto en el DOM.");
                return;
            },
        };

        if let Err(err) = self.planner.add_course(name, &code, term) {
            log::warn!("Unable to add a course: {}", err);
            page.alert(&err.to_string());
            return;
        }
        self.refresh(page);
        page.reset_form(ids::COURSE_FORM);
    }

    pub fn submit_assignment<P: Page + ?Sized>(&mut self, page: &mut P) {
        if self.ensure_authenticated(page) == false {
            return;
        }

        let fields = (
            page.value(ids::COURSE_SELECT),
            page.value(ids::ASSIGNMENT_TITLE),
            page.value(ids::ASSIGNMENT_DESCRIPTION),
            page.value(ids::DUE_DATE),
            page.value(ids::PRIORITY),
        );
        let new = match fields {
            (Some(course_id), Some(title), Some(description), Some(due_date), Some(priority)) => NewAssignment {
                course_id: RecordId::from(course_id.trim()),
                title,
                description,
                due_date,
                priority,
            },
            _ => {
                page.alert("Formulario de trabajo incompleto en el DOM.");
                return;
            },
        };

        if let Err(err) = self.planner.add_assignment(new) {
            log::warn!("Unable to add an assignment: {}", err);
            page.alert(&err.to_string());
            return;
        }
        self.refresh(page);
        page.reset_form(ids::ASSIGNMENT_FORM);
    }

    /// The page always shows the in-memory state, even when it could not be saved
    pub fn toggle_completed<P: Page + ?Sized>(&mut self, id: &RecordId, page: &mut P) {
        match self.planner.toggle_completed(id) {
            Ok(true) => self.refresh(page),
            Ok(false) => log::debug!("No assignment {} to toggle", id),
            Err(err) => {
                log::warn!("Unable to save the completion of {}: {}", id, err);
                self.refresh(page);
            },
        }
    }

    pub fn delete_assignment<P: Page + ?Sized>(&mut self, id: &RecordId, page: &mut P) {
        if page.confirm(CONFIRM_DELETE) == false {
            return;
        }
        match self.planner.delete_assignment(id) {
            Ok(true) => self.refresh(page),
            Ok(false) => log::debug!("No assignment {} to delete", id),
            Err(err) => {
                log::warn!("Unable to save the deletion of {}: {}", id, err);
                self.refresh(page);
            },
        }
    }

    pub fn open_notes<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.view.open_notes();
        page.apply_view(&self.view);
    }

    pub fn open_calendar<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.view.open_calendar();
        page.apply_view(&self.view);
    }

    pub fn back_to_menu<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.view.back_to_menu();
        page.apply_view(&self.view);
    }

    pub fn today_pressed<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.view.today_pressed();
        page.apply_view(&self.view);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::{CURRENT_USER_KEY, ROSTER_KEY};
    use crate::storage::FlakyStore;
    use crate::view::MemoryPage;

    const USER: &str = r#"{"id": 1, "carnet": "AB123456", "password": "secreto"}"#;

    /// A logged-in controller with one course and one assignment
    fn controller_with_homework(page: &mut MemoryPage) -> (Controller<FlakyStore>, std::rc::Rc<std::cell::Cell<bool>>) {
        let roster = format!("[{}]", USER);
        let (store, fail_writes) = FlakyStore::with_items(&[(ROSTER_KEY, roster.as_str()), (CURRENT_USER_KEY, USER)]);
        let mut controller = Controller::new(Planner::load(store));

        page.fill(ids::COURSE_NAME, "Redes");
        page.fill(ids::COURSE_CODE, "red");
        page.fill(ids::COURSE_TERM, "5");
        controller.submit_course(page);
        let course_id = controller.planner().courses()[0].id().clone();

        page.fill(ids::COURSE_SELECT, course_id.as_str());
        page.fill(ids::ASSIGNMENT_TITLE, "Subnetting");
        page.fill(ids::DUE_DATE, "2030-01-15");
        page.fill(ids::PRIORITY, "media");
        controller.submit_assignment(page);
        assert_eq!(controller.planner().assignments().len(), 1);

        (controller, fail_writes)
    }

    #[test]
    fn unsaved_toggle_is_still_shown() {
        let mut page = MemoryPage::planner_page();
        let (mut controller, fail_writes) = controller_with_homework(&mut page);
        let id = controller.planner().assignments()[0].id().clone();

        fail_writes.set(true);
        controller.toggle_completed(&id, &mut page);
        assert!(controller.planner().get_assignment(&id).unwrap().completed());
        assert!(page.content(ids::COURSE_LIST).unwrap().contains("✅ Completado"));
    }

    #[test]
    fn unsaved_deletion_is_still_shown() {
        let mut page = MemoryPage::planner_page();
        let (mut controller, fail_writes) = controller_with_homework(&mut page);
        let id = controller.planner().assignments()[0].id().clone();

        fail_writes.set(true);
        controller.delete_assignment(&id, &mut page);
        assert!(controller.planner().assignments().is_empty());
        let list = page.content(ids::COURSE_LIST).unwrap();
        assert!(list.contains("Subnetting") == false);
        assert!(list.contains("No hay trabajos asignados"));
    }

    #[test]
    fn unsaved_course_is_not_listed() {
        let mut page = MemoryPage::planner_page();
        let (mut controller, fail_writes) = controller_with_homework(&mut page);

        fail_writes.set(true);
        page.fill(ids::COURSE_NAME, "Física");
        page.fill(ids::COURSE_CODE, "fis");
        page.fill(ids::COURSE_TERM, "1");
        controller.submit_course(&mut page);
        controller.submit_course(&mut page);

        assert_eq!(controller.planner().courses().len(), 1);
        assert_eq!(page.alerts().len(), 2);
        // The form is kept, so that it can be submitted again
        assert_eq!(page.value(ids::COURSE_NAME).as_deref(), Some("Física"));
    }
}
