// Seed configuration - the dashboard every session starts from
use crate::domain::category::Category;
use crate::domain::dashboard::DashboardState;
use crate::domain::error::DashboardError;
use crate::domain::widget::{WidgetCatalogEntry, WidgetInstance, WidgetKind};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    #[serde(default)]
    pub categories: Vec<CategorySeed>,
    #[serde(default)]
    pub available_widgets: Vec<CatalogSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CategorySeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<WidgetSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetSeed {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub data: String,
    pub icon: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSeed {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
}

impl SeedConfig {
    /// Converts the seed into a validated dashboard state.
    pub fn into_state(self) -> Result<DashboardState, DashboardError> {
        let categories = self
            .categories
            .into_iter()
            .map(|c| {
                let widgets = c
                    .widgets
                    .into_iter()
                    .map(|w| WidgetInstance::new(w.id, w.name, WidgetKind::parse(&w.kind), w.data, w.icon))
                    .collect();
                Category::new(c.id, c.name, widgets)
            })
            .collect();

        let available_widgets = self
            .available_widgets
            .into_iter()
            .map(|w| WidgetCatalogEntry::new(w.id, w.name, w.category, w.icon))
            .collect();

        DashboardState::new(categories, available_widgets)
    }
}

fn widget(id: &str, name: &str, kind: &str, data: &str, icon: &str) -> WidgetSeed {
    WidgetSeed {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        data: data.to_string(),
        icon: icon.to_string(),
    }
}

fn catalog(id: &str, name: &str, category: &str, icon: &str) -> CatalogSeed {
    CatalogSeed {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
    }
}

/// Built-in CNAPP dashboard used when no seed is configured.
pub fn default_seed() -> SeedConfig {
    SeedConfig {
        categories: vec![
            CategorySeed {
                id: "cspmExecutiveDashboard".to_string(),
                name: "CSPM Executive Dashboard".to_string(),
                widgets: vec![
                    widget(
                        "cloudAccounts",
                        "Cloud Accounts",
                        "chart",
                        "Cloud Accounts Data - Connected: 2, Total: 2",
                        "📊",
                    ),
                    widget(
                        "cloudAccountRiskAssessment",
                        "Cloud Account Risk Assessment",
                        "chart",
                        "Cloud Account Risk Assessment Data - Score: 9659",
                        "⚠️",
                    ),
                ],
            },
            CategorySeed {
                id: "cwppDashboard".to_string(),
                name: "CWPP Dashboard".to_string(),
                widgets: vec![
                    widget(
                        "top5NamespaceSpecificAlerts",
                        "Top 5 Namespace Specific Alerts",
                        "text",
                        "No Graph data available!",
                        "🚨",
                    ),
                    widget("workloadAlerts", "Workload Alerts", "text", "No Graph data available!", "🔔"),
                ],
            },
            CategorySeed {
                id: "registryScan".to_string(),
                name: "Registry Scan".to_string(),
                widgets: vec![
                    widget(
                        "imageRiskAssessment",
                        "Image Risk Assessment",
                        "text",
                        "1470 Total vulnerabilities",
                        "🔎",
                    ),
                    widget("imageSecurityIssues", "Image Security Issues", "text", "2 Total images", "🛡️"),
                ],
            },
        ],
        available_widgets: vec![
            catalog("cloudAccounts", "Cloud Accounts", "CSPM", "📊"),
            catalog("cloudAccountRiskAssessment", "Cloud Account Risk Assessment", "CSPM", "⚠️"),
            catalog("top5NamespaceSpecificAlerts", "Top 5 Namespace Specific Alerts", "CWPP", "🚨"),
            catalog("workloadAlerts", "Workload Alerts", "CWPP", "🔔"),
            catalog("imageRiskAssessment", "Image Risk Assessment", "Registry Scan", "🔎"),
            catalog("imageSecurityIssues", "Image Security Issues", "Registry Scan", "🛡️"),
            catalog("newWidgetImage", "Image Widget", "Image", "🖼️"),
            catalog("newWidgetTicket", "Ticket Widget", "Ticket", "🎟️"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_valid() {
        let state = default_seed().into_state().unwrap();
        assert_eq!(state.categories.len(), 3);
        assert_eq!(state.available_widgets.len(), 8);
        for category in &state.categories {
            assert_eq!(category.widgets.len(), 2);
        }
        assert_eq!(
            state.category("cspmExecutiveDashboard").unwrap().widgets[0].kind,
            WidgetKind::Chart
        );
    }

    #[test]
    fn test_seed_with_duplicate_catalog_id_fails() {
        let mut seed = default_seed();
        seed.available_widgets.push(catalog("cloudAccounts", "Again", "CSPM", "📊"));
        assert!(matches!(
            seed.into_state(),
            Err(DashboardError::DuplicateId { .. })
        ));
    }
}
