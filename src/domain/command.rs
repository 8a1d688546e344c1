// Dashboard commands - pure state transitions
use super::dashboard::DashboardState;
use super::error::DashboardError;
use super::id::WidgetIdGenerator;
use super::widget::{WidgetCatalogEntry, WidgetInstance};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    RemoveWidget {
        category_id: String,
        widget_id: String,
    },
    AddCustomWidget {
        category_id: String,
        name: String,
        text: String,
    },
    ToggleWidget {
        widget_id: String,
        present: bool,
        category_id: String,
    },
}

impl DashboardCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardCommand::RemoveWidget { .. } => "remove_widget",
            DashboardCommand::AddCustomWidget { .. } => "add_custom_widget",
            DashboardCommand::ToggleWidget { .. } => "toggle_widget",
        }
    }
}

/// Produces the state that follows `state` under `command`.
///
/// The input is never modified; on error the caller keeps its current state.
/// Commands that are already satisfied (removing an absent widget, toggling a
/// widget into the state it is already in) return an equal state.
pub fn apply(
    state: &DashboardState,
    command: DashboardCommand,
    ids: &dyn WidgetIdGenerator,
) -> Result<DashboardState, DashboardError> {
    match command {
        DashboardCommand::RemoveWidget {
            category_id,
            widget_id,
        } => remove_widget(state, &category_id, &widget_id),
        DashboardCommand::AddCustomWidget {
            category_id,
            name,
            text,
        } => add_custom_widget(state, &category_id, name, text, ids),
        DashboardCommand::ToggleWidget {
            widget_id,
            present,
            category_id,
        } => toggle_widget(state, &widget_id, present, &category_id),
    }
}

fn remove_widget(
    state: &DashboardState,
    category_id: &str,
    widget_id: &str,
) -> Result<DashboardState, DashboardError> {
    let mut next = state.clone();
    let category = next
        .category_mut(category_id)
        .ok_or_else(|| DashboardError::category_not_found(category_id))?;
    category.remove(widget_id);
    Ok(next)
}

fn add_custom_widget(
    state: &DashboardState,
    category_id: &str,
    name: String,
    text: String,
    ids: &dyn WidgetIdGenerator,
) -> Result<DashboardState, DashboardError> {
    if name.is_empty() {
        return Err(DashboardError::ValidationRejected { field: "name" });
    }
    if text.is_empty() {
        return Err(DashboardError::ValidationRejected { field: "text" });
    }

    let mut next = state.clone();
    let id = fresh_id(state, ids);
    let category = next
        .category_mut(category_id)
        .ok_or_else(|| DashboardError::category_not_found(category_id))?;

    let widget = WidgetInstance::custom(id, name, text);
    let entry = WidgetCatalogEntry::new(
        widget.id.clone(),
        widget.name.clone(),
        category.name.clone(),
        widget.icon.clone(),
    );
    category.place(widget);
    next.available_widgets.push(entry);
    Ok(next)
}

fn toggle_widget(
    state: &DashboardState,
    widget_id: &str,
    present: bool,
    category_id: &str,
) -> Result<DashboardState, DashboardError> {
    let mut next = state.clone();
    let placed = state.is_present_in(category_id, widget_id);
    let category = next
        .category_mut(category_id)
        .ok_or_else(|| DashboardError::category_not_found(category_id))?;

    match (placed, present) {
        (false, true) => {
            let entry = state
                .catalog_entry(widget_id)
                .ok_or_else(|| DashboardError::widget_not_found(widget_id))?;
            category.place(WidgetInstance::from_catalog(entry));
        }
        (true, false) => {
            category.remove(widget_id);
        }
        _ => {}
    }
    Ok(next)
}

fn fresh_id(state: &DashboardState, ids: &dyn WidgetIdGenerator) -> String {
    loop {
        let candidate = ids.next_id();
        if !state.contains_id(&candidate) {
            return candidate;
        }
        tracing::debug!("Generated widget id {} already in use, drawing again", candidate);
    }
}
