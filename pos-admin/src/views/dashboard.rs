//! Dashboard summary cards

use serde::Serialize;

use crate::core::AdminState;
use crate::services::CrudService;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_users: usize,
    pub total_items: usize,
    pub total_categories: usize,
    pub total_tables: usize,
    /// Sum of seats over all tables
    pub total_seats: u64,
    pub total_outlets: usize,
    pub profile_saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub title: &'static str,
    pub value: String,
}

impl DashboardSummary {
    pub fn from_state(state: &AdminState) -> Self {
        Self {
            total_users: state.users.store().len(),
            total_items: state.items.store().len(),
            total_categories: state.categories.store().len(),
            total_tables: state.tables.store().len(),
            total_seats: state.tables.total_seats(),
            total_outlets: state.outlets.store().len(),
            profile_saved: state.profile.get().is_saved(),
        }
    }

    pub fn cards(&self) -> Vec<DashboardCard> {
        [
            ("Total Users", self.total_users.to_string()),
            ("Total Items", self.total_items.to_string()),
            ("Total Categories", self.total_categories.to_string()),
            ("Total Tables", self.total_tables.to_string()),
            ("Total Outlets", self.total_outlets.to_string()),
        ]
        .into_iter()
        .map(|(title, value)| DashboardCard { title, value })
        .collect()
    }
}
