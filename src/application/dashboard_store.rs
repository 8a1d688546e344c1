// Dashboard store - owns the dashboard state and applies commands to it
use crate::domain::command::{apply, DashboardCommand};
use crate::domain::dashboard::DashboardState;
use crate::domain::error::DashboardError;
use crate::domain::id::WidgetIdGenerator;
use crate::domain::widget::WidgetCatalogEntry;
use serde::Serialize;
use std::sync::Arc;

/// A read snapshot tagged with the revision it was taken at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub revision: u64,
    #[serde(flatten)]
    pub state: DashboardState,
}

/// Catalog entry as shown in the manage-widgets list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(flatten)]
    pub entry: WidgetCatalogEntry,
    /// Placed in at least one category.
    pub present: bool,
    /// Category whose display name matches the entry's group, if any.
    pub target_category_id: Option<String>,
}

#[derive(Clone)]
pub struct DashboardStore {
    state: DashboardState,
    revision: u64,
    ids: Arc<dyn WidgetIdGenerator>,
}

impl DashboardStore {
    pub fn new(seed: DashboardState, ids: Arc<dyn WidgetIdGenerator>) -> Self {
        Self {
            state: seed,
            revision: 0,
            ids,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Bumped once for every command that changed the state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            revision: self.revision,
            state: self.state.clone(),
        }
    }

    /// Applies a command, replacing the state wholesale.
    ///
    /// Unknown references are absorbed and reported as `Ok(false)`. Only
    /// validation failures reach the caller.
    pub fn dispatch(&mut self, command: DashboardCommand) -> Result<bool, DashboardError> {
        let name = command.name();
        match apply(&self.state, command, self.ids.as_ref()) {
            Ok(next) if next == self.state => {
                tracing::debug!("{} left the dashboard unchanged", name);
                Ok(false)
            }
            Ok(next) => {
                self.state = next;
                self.revision += 1;
                tracing::info!("{} applied, dashboard at revision {}", name, self.revision);
                Ok(true)
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("Ignoring {}: {}", name, e);
                Ok(false)
            }
            Err(e) => {
                tracing::debug!("Rejected {}: {}", name, e);
                Err(e)
            }
        }
    }

    pub fn remove_widget(&mut self, category_id: &str, widget_id: &str) -> &DashboardState {
        self.dispatch_absorbing(DashboardCommand::RemoveWidget {
            category_id: category_id.to_string(),
            widget_id: widget_id.to_string(),
        })
    }

    pub fn add_custom_widget(
        &mut self,
        category_id: &str,
        name: &str,
        text: &str,
    ) -> Result<&DashboardState, DashboardError> {
        self.dispatch(DashboardCommand::AddCustomWidget {
            category_id: category_id.to_string(),
            name: name.to_string(),
            text: text.to_string(),
        })?;
        Ok(&self.state)
    }

    pub fn toggle_widget(&mut self, widget_id: &str, present: bool, category_id: &str) -> &DashboardState {
        self.dispatch_absorbing(DashboardCommand::ToggleWidget {
            widget_id: widget_id.to_string(),
            present,
            category_id: category_id.to_string(),
        })
    }

    pub fn search(&self, term: &str) -> Vec<WidgetCatalogEntry> {
        self.state.search(term)
    }

    pub fn category_groups(&self) -> Vec<String> {
        self.state.category_groups()
    }

    pub fn catalog_view(&self, term: &str) -> Vec<CatalogItem> {
        self.state
            .search(term)
            .into_iter()
            .map(|entry| CatalogItem {
                present: self.state.is_present_anywhere(&entry.id),
                target_category_id: self
                    .state
                    .category_for_catalog_entry(&entry)
                    .map(|c| c.id.clone()),
                entry,
            })
            .collect()
    }

    // Remove and toggle cannot fail validation, so any error is already absorbed.
    fn dispatch_absorbing(&mut self, command: DashboardCommand) -> &DashboardState {
        if let Err(e) = self.dispatch(command) {
            tracing::warn!("Unexpected rejection: {}", e);
        }
        &self.state
    }
}
