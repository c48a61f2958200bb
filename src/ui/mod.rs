// handlers only see these traits and bindings, never a concrete page
pub mod console;

use crate::models::file::SelectedFile;
use log::debug;
use std::collections::HashMap;

pub trait InputSource {
    /// Current value of a text input, `None` when the element does not exist.
    fn text(&self, element_id: &str) -> Option<String>;
    /// The file selected in a file input, if any.
    fn file(&self, element_id: &str) -> Option<SelectedFile>;
    /// Clears every input of the form.
    fn reset(&self);
}

pub trait Surface {
    fn alert(&self, message: &str);
    fn set_disabled(&self, control: &str, disabled: bool);
    /// Replaces the result list; an empty slice clears it.
    fn render_results(&self, entries: &[String]);
    fn has_element(&self, element_id: &str) -> bool;
    fn set_text(&self, element_id: &str, text: &str);
    fn set_width(&self, element_id: &str, percent: u8);
}

pub trait Page: InputSource + Surface {}

impl<T: InputSource + Surface + ?Sized> Page for T {}

/// Maps logical field names to element ids, plus the control a handler
/// disables while its request is in flight.
#[derive(Debug, Clone)]
pub struct FieldBindings {
    control: String,
    fields: HashMap<&'static str, String>,
}

impl FieldBindings {
    pub fn new(control: impl Into<String>) -> Self {
        FieldBindings { control: control.into(), fields: HashMap::new() }
    }

    /// Element ids of the employee registration form.
    pub fn registration() -> Self {
        FieldBindings::new("register-btn")
            .bind("name", "name")
            .bind("date_of_birth", "dob")
            .bind("address", "address")
            .bind("contact_number", "contact")
            .bind("pan_number", "pan")
            .bind("aadhar_number", "aadhar")
    }

    /// Element ids of the document upload form.
    pub fn documents() -> Self {
        FieldBindings::new("upload-btn")
            .bind("employee_id", "employee_id")
            .bind("resume", "resume")
            .bind("educational_certificates", "certs")
            .bind("offer_letters", "offer")
            .bind("pan_card", "pan_card")
            .bind("aadhar_card", "aadhar_card")
            .bind("form_16_or_it_returns", "form16")
    }

    pub fn bind(mut self, field: &'static str, element_id: impl Into<String>) -> Self {
        self.fields.insert(field, element_id.into());
        self
    }

    pub fn control(&self) -> &str {
        &self.control
    }

    /// Unbound fields use their logical name as element id.
    pub fn element_id<'a>(&'a self, field: &'a str) -> &'a str {
        self.fields.get(field).map(String::as_str).unwrap_or(field)
    }

    /// Reads a text field; a missing element reads as empty.
    pub fn text<S: InputSource + ?Sized>(&self, source: &S, field: &str) -> String {
        source.text(self.element_id(field)).unwrap_or_default()
    }

    pub fn file<S: InputSource + ?Sized>(&self, source: &S, field: &str) -> Option<SelectedFile> {
        source.file(self.element_id(field))
    }
}

/// Keeps a control disabled for as long as it lives and re-enables it
/// exactly once when dropped, whichever way the handler exits.
pub struct DisabledControl<'a, S: Surface + ?Sized> {
    surface: &'a S,
    control: &'a str,
}

impl<'a, S: Surface + ?Sized> DisabledControl<'a, S> {
    pub fn new(surface: &'a S, control: &'a str) -> Self {
        debug!("disabling '{}'", control);
        surface.set_disabled(control, true);
        DisabledControl { surface, control }
    }
}

impl<S: Surface + ?Sized> Drop for DisabledControl<'_, S> {
    fn drop(&mut self) {
        debug!("re-enabling '{}'", self.control);
        self.surface.set_disabled(self.control, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Controls {
        calls: RefCell<Vec<(String, bool)>>,
    }

    impl Surface for Controls {
        fn alert(&self, _message: &str) {}
        fn set_disabled(&self, control: &str, disabled: bool) {
            self.calls.borrow_mut().push((control.to_string(), disabled));
        }
        fn render_results(&self, _entries: &[String]) {}
        fn has_element(&self, _element_id: &str) -> bool {
            false
        }
        fn set_text(&self, _element_id: &str, _text: &str) {}
        fn set_width(&self, _element_id: &str, _percent: u8) {}
    }

    #[test]
    fn guard_toggles_control_once() {
        let controls = Controls::default();
        {
            let _guard = DisabledControl::new(&controls, "register-btn");
            assert_eq!(*controls.calls.borrow(), vec![("register-btn".to_string(), true)]);
        }
        assert_eq!(
            *controls.calls.borrow(),
            vec![("register-btn".to_string(), true), ("register-btn".to_string(), false)]
        );
    }

    #[test]
    fn bindings_fall_back_to_logical_name() {
        let bindings = FieldBindings::registration();
        assert_eq!(bindings.element_id("date_of_birth"), "dob");
        assert_eq!(bindings.element_id("nickname"), "nickname");
        assert_eq!(bindings.control(), "register-btn");

        let rebound = FieldBindings::documents().bind("employee_id", "emp-id-input");
        assert_eq!(rebound.element_id("employee_id"), "emp-id-input");
        assert_eq!(rebound.element_id("form_16_or_it_returns"), "form16");
    }
}
