// Category domain model - an ordered group of placed widgets
use super::widget::WidgetInstance;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub widgets: Vec<WidgetInstance>,
}

impl Category {
    pub fn new(id: String, name: String, widgets: Vec<WidgetInstance>) -> Self {
        Self { id, name, widgets }
    }

    pub fn contains(&self, widget_id: &str) -> bool {
        self.widgets.iter().any(|w| w.id == widget_id)
    }

    /// Appends in insertion order. Returns false when the id is already placed here.
    pub fn place(&mut self, widget: WidgetInstance) -> bool {
        if self.contains(&widget.id) {
            return false;
        }
        self.widgets.push(widget);
        true
    }

    /// Returns true if a widget was removed.
    pub fn remove(&mut self, widget_id: &str) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.id != widget_id);
        self.widgets.len() != before
    }
}
