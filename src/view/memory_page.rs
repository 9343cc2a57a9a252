//! A [`Page`] that only lives in memory
//!
//! It stands for the browser page in tests and in command-line tools.

use std::collections::{HashMap, HashSet};

use super::{ids, Page, ViewState};

#[derive(Clone, Debug, Default)]
pub struct MemoryPage {
    /// Ids of the elements that exist on this page
    elements: HashSet<String>,
    values: HashMap<String, String>,
    contents: HashMap<String, String>,

    alerts: Vec<String>,
    confirm_answer: bool,
    view: Option<ViewState>,
}

impl MemoryPage {
    /// A page without any element
    pub fn empty() -> Self {
        Self::default()
    }

    /// A page with every element the planner uses. Confirmations are accepted
    pub fn planner_page() -> Self {
        let mut page = Self::empty();
        for form in &[ids::LOGIN_FORM, ids::COURSE_FORM, ids::ASSIGNMENT_FORM] {
            page.add_element(form);
            for field in ids::form_fields(form) {
                page.add_element(field);
            }
        }
        page.add_element(ids::COURSE_LIST);
        page.add_element(ids::USER_LABEL);
        page.confirm_answer = true;
        page
    }

    pub fn add_element(&mut self, id: &str) {
        self.elements.insert(id.to_string());
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
        self.values.remove(id);
        self.contents.remove(id);
    }

    /// Type something in an input. Returns `false` if there is no such input
    pub fn fill(&mut self, id: &str, value: &str) -> bool {
        if self.elements.contains(id) == false {
            return false;
        }
        self.values.insert(id.to_string(), value.to_string());
        true
    }

    /// What the next confirmation dialogs will answer
    pub fn answer_confirmations(&mut self, answer: bool) {
        self.confirm_answer = answer;
    }

    /// The HTML or text last set in an element
    pub fn content(&self, id: &str) -> Option<&str> {
        self.contents.get(id).map(|s| s.as_str())
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// The view last applied
    pub fn view(&self) -> Option<&ViewState> {
        self.view.as_ref()
    }
}

impl Page for MemoryPage {
    fn value(&self, element_id: &str) -> Option<String> {
        if self.elements.contains(element_id) == false {
            return None;
        }
        Some(self.values.get(element_id).cloned().unwrap_or_default())
    }

    fn set_html(&mut self, element_id: &str, html: &str) -> bool {
        if self.elements.contains(element_id) == false {
            return false;
        }
        self.contents.insert(element_id.to_string(), html.to_string());
        true
    }

    fn set_text(&mut self, element_id: &str, text: &str) -> bool {
        let escaped = maud::html!{ (text) }.into_string();
        self.set_html(element_id, &escaped)
    }

    fn reset_form(&mut self, form_id: &str) -> bool {
        if self.elements.contains(form_id) == false {
            return false;
        }
        for field in ids::form_fields(form_id) {
            self.values.remove(*field);
        }
        true
    }

    fn alert(&mut self, message: &str) {
        log::info!("Alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        log::info!("Confirm: {} -> {}", message, self.confirm_answer);
        self.confirm_answer
    }

    fn apply_view(&mut self, view: &ViewState) {
        self.view = Some(*view);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements() {
        let mut page = MemoryPage::empty();
        assert_eq!(page.fill(ids::CARNET, "AB123456"), false);
        assert_eq!(page.value(ids::CARNET), None);
        assert_eq!(page.set_html(ids::COURSE_LIST, "<p></p>"), false);
        assert_eq!(page.reset_form(ids::LOGIN_FORM), false);
    }

    #[test]
    fn forms_reset_their_fields() {
        let mut page = MemoryPage::planner_page();
        page.fill(ids::CARNET, "AB123456");
        page.fill(ids::COURSE_NAME, "Física");
        assert!(page.reset_form(ids::LOGIN_FORM));
        assert_eq!(page.value(ids::CARNET).as_deref(), Some(""));
        assert_eq!(page.value(ids::COURSE_NAME).as_deref(), Some("Física"));
    }
}
