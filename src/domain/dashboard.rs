// Dashboard domain model - the category hierarchy plus the addable widget catalog
use super::category::Category;
use super::error::DashboardError;
use super::widget::WidgetCatalogEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub categories: Vec<Category>,
    pub available_widgets: Vec<WidgetCatalogEntry>,
}

impl DashboardState {
    /// Builds a state, rejecting duplicate category, catalog, or per-category widget ids.
    pub fn new(
        categories: Vec<Category>,
        available_widgets: Vec<WidgetCatalogEntry>,
    ) -> Result<Self, DashboardError> {
        let state = Self {
            categories,
            available_widgets,
        };
        state.validate()?;
        Ok(state)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        ensure_distinct("category", self.categories.iter().map(|c| c.id.as_str()))?;
        ensure_distinct("catalog", self.available_widgets.iter().map(|w| w.id.as_str()))?;
        for category in &self.categories {
            ensure_distinct(
                &format!("widget in category {}", category.id),
                category.widgets.iter().map(|w| w.id.as_str()),
            )?;
        }
        Ok(())
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    pub fn catalog_entry(&self, widget_id: &str) -> Option<&WidgetCatalogEntry> {
        self.available_widgets.iter().find(|w| w.id == widget_id)
    }

    pub fn is_present_in(&self, category_id: &str, widget_id: &str) -> bool {
        self.category(category_id)
            .map(|c| c.contains(widget_id))
            .unwrap_or(false)
    }

    /// What the catalog checkbox reflects: placed in at least one category.
    pub fn is_present_anywhere(&self, widget_id: &str) -> bool {
        self.categories.iter().any(|c| c.contains(widget_id))
    }

    /// True if the id is taken by any catalog entry or any placed widget.
    pub fn contains_id(&self, id: &str) -> bool {
        self.catalog_entry(id).is_some() || self.is_present_anywhere(id)
    }

    /// Resolves the category a catalog entry toggles into by matching display names.
    pub fn category_for_catalog_entry(&self, entry: &WidgetCatalogEntry) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == entry.category)
    }

    pub fn search(&self, term: &str) -> Vec<WidgetCatalogEntry> {
        self.available_widgets
            .iter()
            .filter(|w| w.matches(term))
            .cloned()
            .collect()
    }

    /// Distinct catalog group names in first-seen order.
    pub fn category_groups(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.available_widgets
            .iter()
            .filter(|w| seen.insert(w.category.as_str()))
            .map(|w| w.category.clone())
            .collect()
    }
}

fn ensure_distinct<'a>(
    scope: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DashboardError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DashboardError::DuplicateId {
                scope: scope.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::widget::{WidgetInstance, WidgetKind};

    pub fn entry(id: &str, name: &str, group: &str) -> WidgetCatalogEntry {
        WidgetCatalogEntry::new(id.to_string(), name.to_string(), group.to_string(), "*".to_string())
    }

    pub fn instance(id: &str, name: &str) -> WidgetInstance {
        WidgetInstance::new(
            id.to_string(),
            name.to_string(),
            WidgetKind::Chart,
            format!("{} data", name),
            "*".to_string(),
        )
    }

    /// Two categories, one placed widget each, plus an unplaced catalog entry.
    pub fn small_state() -> DashboardState {
        DashboardState::new(
            vec![
                Category::new("alpha".to_string(), "Alpha".to_string(), vec![instance("a1", "Alpha One")]),
                Category::new("beta".to_string(), "Beta".to_string(), vec![instance("b1", "Beta One")]),
            ],
            vec![
                entry("a1", "Alpha One", "Alpha"),
                entry("b1", "Beta One", "Beta"),
                entry("spare", "Spare Widget", "Spare"),
                entry("alphaTwo", "Alpha Two", "Alpha"),
            ],
        )
        .unwrap()
    }
}
