use super::{InputSource, Surface};
use crate::errors::AppError;
use crate::models::file::SelectedFile;
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A page backed by command-line values. Text inputs hold the values given
/// on the command line, file inputs hold the contents of the given paths,
/// and all feedback goes to stdout.
#[derive(Debug, Default)]
pub struct ConsolePage {
    texts: RefCell<HashMap<String, String>>,
    files: RefCell<HashMap<String, SelectedFile>>,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, element_id: &str, value: impl Into<String>) -> Self {
        self.texts.borrow_mut().insert(element_id.to_string(), value.into());
        self
    }

    // a path that cannot be read fails here, only an omitted one is "no selection"
    pub fn with_file(self, element_id: &str, path: Option<PathBuf>) -> Result<Self, AppError> {
        if let Some(path) = path {
            let bytes = fs::read(&path)
                .map_err(|err| AppError::Io(format!("{}: {}", path.display(), err)))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.files
                .borrow_mut()
                .insert(element_id.to_string(), SelectedFile { file_name, bytes });
        }
        Ok(self)
    }
}

impl InputSource for ConsolePage {
    fn text(&self, element_id: &str) -> Option<String> {
        self.texts.borrow().get(element_id).cloned()
    }

    fn file(&self, element_id: &str) -> Option<SelectedFile> {
        self.files.borrow().get(element_id).cloned()
    }

    fn reset(&self) {
        self.texts.borrow_mut().clear();
        self.files.borrow_mut().clear();
    }
}

impl Surface for ConsolePage {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn set_disabled(&self, control: &str, disabled: bool) {
        debug!("control '{}' disabled={}", control, disabled);
    }

    fn render_results(&self, entries: &[String]) {
        for entry in entries {
            println!("{}", entry);
        }
    }

    fn has_element(&self, _element_id: &str) -> bool {
        true
    }

    fn set_text(&self, element_id: &str, text: &str) {
        println!("{:<16} {}", element_id, text);
    }

    fn set_width(&self, element_id: &str, percent: u8) {
        let filled = usize::from(percent.min(100) / 10);
        println!(
            "{:<16} [{}{}] {}%",
            element_id,
            "#".repeat(filled),
            " ".repeat(10 - filled),
            percent
        );
    }
}
