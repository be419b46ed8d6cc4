//! The Mac widget family.

use super::GuiFactory;
use crate::product::{Button, Checkbox, FamilyTag, Widget};
use crate::traits::Product;

static FAMILY: FamilyTag = FamilyTag::MAC;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacButton {
    pub label: String,
}

impl Product for MacButton {
    fn name(&self) -> &str {
        "Mac button"
    }

    fn render(&self) -> String {
        format!("( {} ) (Mac)", self.label)
    }
}

impl Widget for MacButton {
    fn family(&self) -> &FamilyTag {
        &FAMILY
    }
}

impl Button for MacButton {
    fn press(&self) -> String {
        format!("Mac button '{}' clicked", self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MacCheckbox {
    pub checked: bool,
}

impl Product for MacCheckbox {
    fn name(&self) -> &str {
        "Mac checkbox"
    }

    fn render(&self) -> String {
        let mark = if self.checked { "✓" } else { " " };
        format!("({mark}) (Mac)")
    }
}

impl Widget for MacCheckbox {
    fn family(&self) -> &FamilyTag {
        &FAMILY
    }
}

impl Checkbox for MacCheckbox {
    fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    fn is_checked(&self) -> bool {
        self.checked
    }
}

/// Factory for the Mac family.
#[derive(Debug, Clone)]
pub struct MacFactory {
    button_label: String,
}

impl MacFactory {
    pub fn new() -> Self {
        Self::with_button_label("OK")
    }

    pub fn with_button_label(label: impl Into<String>) -> Self {
        Self {
            button_label: label.into(),
        }
    }
}

impl Default for MacFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiFactory for MacFactory {
    fn family(&self) -> &FamilyTag {
        &FAMILY
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton {
            label: self.button_label.clone(),
        })
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox::default())
    }
}
