//! Binds the page to the planner
//!
//! The page is only reached through the [`Page`] trait, so that the whole flow (forms, screens, lists) can run without a browser.
//! [`Controller`] reads form values, calls the [`Planner`](crate::store::Planner), and pushes freshly rendered fragments back.

pub mod render;
pub mod controller;
pub mod memory_page;

pub use controller::Controller;
pub use memory_page::MemoryPage;

use bitflags::bitflags;

/// Element ids the controller looks for
pub mod ids {
    pub const LOGIN_FORM: &str = "loginForm";
    pub const CARNET: &str = "carnet";
    pub const PASSWORD: &str = "password";

    pub const COURSE_FORM: &str = "materiaForm";
    pub const COURSE_NAME: &str = "nombreMateria";
    pub const COURSE_CODE: &str = "codigoMateria";
    pub const COURSE_TERM: &str = "semestre";

    pub const ASSIGNMENT_FORM: &str = "trabajoForm";
    pub const COURSE_SELECT: &str = "materiaSelect";
    pub const ASSIGNMENT_TITLE: &str = "tituloTrabajo";
    pub const ASSIGNMENT_DESCRIPTION: &str = "descripcionTrabajo";
    pub const DUE_DATE: &str = "fechaEntrega";
    pub const PRIORITY: &str = "prioridad";

    pub const COURSE_LIST: &str = "listaMaterias";
    pub const USER_LABEL: &str = "userCarnet";

    /// The inputs a form holds, i.e. what resetting it clears
    pub fn form_fields(form_id: &str) -> &'static [&'static str] {
        match form_id {
            LOGIN_FORM => &[CARNET, PASSWORD],
            COURSE_FORM => &[COURSE_NAME, COURSE_CODE, COURSE_TERM],
            ASSIGNMENT_FORM => &[COURSE_SELECT, ASSIGNMENT_TITLE, ASSIGNMENT_DESCRIPTION, DUE_DATE, PRIORITY],
            _ => &[],
        }
    }
}


bitflags! {
    /// The parts of the page that are displayed
    pub struct Visible: u8 {
        const LOGIN_SCREEN = 1;
        const LOGIN_FORM = 2;
        const APP_SCREEN = 4;
        /// The main menu, with the "notes" and "calendar" buttons
        const MENU = 8;
        const NOTES = 16;
        const CALENDAR = 32;
        const CALENDAR_CONTROLS = 64;
    }
}

/// The class set on the page body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Login,
    App,
}

impl Background {
    pub fn css_class(&self) -> &'static str {
        match self {
            Background::Login => "login-bg",
            Background::App => "app-bg",
        }
    }
}

/// Which screens are shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    visible: Visible,
    background: Background,
}

impl Default for ViewState {
    fn default() -> Self {
        let mut view = Self { visible: Visible::empty(), background: Background::Login };
        view.show_login();
        view
    }
}

impl ViewState {
    pub fn visible(&self) -> Visible         { self.visible }
    pub fn background(&self) -> Background   { self.background }
    pub fn is_visible(&self, part: Visible) -> bool {
        self.visible.contains(part)
    }

    /// The login screen, with the app behind it reset to its main menu
    pub fn show_login(&mut self) {
        self.background = Background::Login;
        self.visible = Visible::LOGIN_SCREEN | Visible::LOGIN_FORM | Visible::MENU;
    }

    /// The app, on its main menu
    pub fn show_app(&mut self) {
        self.background = Background::App;
        let login_form = self.visible & Visible::LOGIN_FORM;
        self.visible = Visible::APP_SCREEN | Visible::MENU | login_form;
    }

    pub fn open_notes(&mut self) {
        self.visible.remove(Visible::MENU | Visible::CALENDAR | Visible::CALENDAR_CONTROLS);
        self.visible.insert(Visible::NOTES);
    }

    pub fn open_calendar(&mut self) {
        self.visible.remove(Visible::MENU | Visible::NOTES);
        self.visible.insert(Visible::CALENDAR | Visible::CALENDAR_CONTROLS);
    }

    pub fn back_to_menu(&mut self) {
        self.visible.remove(Visible::NOTES | Visible::CALENDAR | Visible::CALENDAR_CONTROLS);
        self.visible.insert(Visible::MENU);
    }

    /// The "this month" button: calendar controls only make sense while the calendar is shown
    pub fn today_pressed(&mut self) {
        let calendar_shown = self.visible.contains(Visible::CALENDAR);
        self.visible.set(Visible::CALENDAR_CONTROLS, calendar_shown);
    }
}


/// The host page, as seen by the [`Controller`].
///
/// Elements are designated by their id. Operations on elements that do not exist return `None` or `false`.
pub trait Page {
    /// The current value of an input
    fn value(&self, element_id: &str) -> Option<String>;
    /// Replace the content of an element by some HTML
    fn set_html(&mut self, element_id: &str, html: &str) -> bool;
    /// Replace the content of an element by some text
    fn set_text(&mut self, element_id: &str, text: &str) -> bool;
    /// Clear the inputs of a form
    fn reset_form(&mut self, form_id: &str) -> bool;

    fn alert(&mut self, message: &str);
    /// Ask the user a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Show and hide screens
    fn apply_view(&mut self, view: &ViewState);
}
