#![allow(dead_code)]

use actix_web::{web, App, HttpServer};
use hr_form_client::api::HrApi;
use hr_form_client::config::{ClientConfig, UploadRoute};
use hr_form_client::models::file::SelectedFile;
use hr_form_client::models::stats::Stat;
use hr_form_client::ui::{InputSource, Surface};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::net::TcpListener;

/// Starts an in-process backend on an ephemeral port and returns its base URL.
pub fn spawn_backend<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub fn unreachable_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn api(base_url: &str) -> HrApi {
    api_with_route(base_url, UploadRoute::Files)
}

pub fn api_with_route(base_url: &str, route: UploadRoute) -> HrApi {
    HrApi::new(&ClientConfig::new(base_url, route).unwrap()).unwrap()
}

pub fn selected(file_name: &str, bytes: &[u8]) -> SelectedFile {
    SelectedFile { file_name: file_name.to_string(), bytes: bytes.to_vec() }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Alert(String),
    Disabled(String, bool),
    Results(Vec<String>),
    Text(String, String),
    Width(String, u8),
    Reset,
}

/// In-memory page that records everything handlers do to it.
#[derive(Default)]
pub struct MemoryPage {
    texts: RefCell<HashMap<String, String>>,
    files: RefCell<HashMap<String, SelectedFile>>,
    elements: HashSet<String>,
    events: RefCell<Vec<UiEvent>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dashboard() -> Self {
        let mut page = Self::default();
        for stat in [Stat::Employees, Stat::Documents] {
            page.elements.insert(stat.count_element().to_string());
            page.elements.insert(stat.bar_element().to_string());
        }
        page
    }

    pub fn with_text(self, element_id: &str, value: &str) -> Self {
        self.texts.borrow_mut().insert(element_id.to_string(), value.to_string());
        self
    }

    pub fn with_file(self, element_id: &str, file: SelectedFile) -> Self {
        self.files.borrow_mut().insert(element_id.to_string(), file);
        self
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn control_states(&self, control: &str) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Disabled(id, disabled) if id == control => Some(disabled),
                _ => None,
            })
            .collect()
    }

    pub fn renders(&self) -> Vec<Vec<String>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Results(entries) => Some(entries),
                _ => None,
            })
            .collect()
    }

    pub fn was_reset(&self) -> bool {
        self.events().contains(&UiEvent::Reset)
    }

    fn record(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl InputSource for MemoryPage {
    fn text(&self, element_id: &str) -> Option<String> {
        self.texts.borrow().get(element_id).cloned()
    }

    fn file(&self, element_id: &str) -> Option<SelectedFile> {
        self.files.borrow().get(element_id).cloned()
    }

    fn reset(&self) {
        self.texts.borrow_mut().clear();
        self.files.borrow_mut().clear();
        self.record(UiEvent::Reset);
    }
}

impl Surface for MemoryPage {
    fn alert(&self, message: &str) {
        self.record(UiEvent::Alert(message.to_string()));
    }

    fn set_disabled(&self, control: &str, disabled: bool) {
        self.record(UiEvent::Disabled(control.to_string(), disabled));
    }

    fn render_results(&self, entries: &[String]) {
        self.record(UiEvent::Results(entries.to_vec()));
    }

    fn has_element(&self, element_id: &str) -> bool {
        self.elements.contains(element_id)
    }

    fn set_text(&self, element_id: &str, text: &str) {
        self.record(UiEvent::Text(element_id.to_string(), text.to_string()));
    }

    fn set_width(&self, element_id: &str, percent: u8) {
        self.record(UiEvent::Width(element_id.to_string(), percent));
    }
}
