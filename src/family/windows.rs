//! The Windows widget family.

use super::GuiFactory;
use crate::product::{Button, Checkbox, FamilyTag, Widget};
use crate::traits::Product;

static FAMILY: FamilyTag = FamilyTag::WINDOWS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowsButton {
    pub label: String,
}

impl Product for WindowsButton {
    fn name(&self) -> &str {
        "Windows button"
    }

    fn render(&self) -> String {
        format!("[ {} ] (Windows)", self.label)
    }
}

impl Widget for WindowsButton {
    fn family(&self) -> &FamilyTag {
        &FAMILY
    }
}

impl Button for WindowsButton {
    fn press(&self) -> String {
        format!("Windows button '{}' pressed", self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowsCheckbox {
    pub checked: bool,
}

impl Product for WindowsCheckbox {
    fn name(&self) -> &str {
        "Windows checkbox"
    }

    fn render(&self) -> String {
        let mark = if self.checked { "x" } else { " " };
        format!("[{mark}] (Windows)")
    }
}

impl Widget for WindowsCheckbox {
    fn family(&self) -> &FamilyTag {
        &FAMILY
    }
}

impl Checkbox for WindowsCheckbox {
    fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    fn is_checked(&self) -> bool {
        self.checked
    }
}

/// Factory for the Windows family.
#[derive(Debug, Clone)]
pub struct WindowsFactory {
    button_label: String,
}

impl WindowsFactory {
    pub fn new() -> Self {
        Self::with_button_label("OK")
    }

    pub fn with_button_label(label: impl Into<String>) -> Self {
        Self {
            button_label: label.into(),
        }
    }
}

impl Default for WindowsFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiFactory for WindowsFactory {
    fn family(&self) -> &FamilyTag {
        &FAMILY
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton {
            label: self.button_label.clone(),
        })
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox::default())
    }
}
