// Widget domain models - placed instances and addable catalog entries
use serde::{Deserialize, Serialize};

/// Icon given to every widget created through the custom widget flow.
pub const CUSTOM_WIDGET_ICON: &str = "➕";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Chart,
    Text,
}

impl WidgetKind {
    /// Unknown kinds fall back to text, which renders any data string.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "chart" => WidgetKind::Chart,
            _ => WidgetKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInstance {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub data: String,
    pub icon: String,
}

impl WidgetInstance {
    pub fn new(id: String, name: String, kind: WidgetKind, data: String, icon: String) -> Self {
        Self {
            id,
            name,
            kind,
            data,
            icon,
        }
    }

    /// A user-authored text card.
    pub fn custom(id: String, name: String, text: String) -> Self {
        Self::new(id, name, WidgetKind::Text, text, CUSTOM_WIDGET_ICON.to_string())
    }

    /// Places a catalog entry, keeping its id so membership can be decided by id alone.
    pub fn from_catalog(entry: &WidgetCatalogEntry) -> Self {
        Self::new(
            entry.id.clone(),
            entry.name.clone(),
            WidgetKind::Text,
            placeholder_data(&entry.name),
            entry.icon.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetCatalogEntry {
    pub id: String,
    pub name: String,
    /// Display name of the group this entry is listed under.
    pub category: String,
    pub icon: String,
}

impl WidgetCatalogEntry {
    pub fn new(id: String, name: String, category: String, icon: String) -> Self {
        Self {
            id,
            name,
            category,
            icon,
        }
    }

    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Data shown by a catalog widget toggled onto the dashboard.
pub fn placeholder_data(name: &str) -> String {
    format!("Random data for {}", name)
}
