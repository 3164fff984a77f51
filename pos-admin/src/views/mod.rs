//! View models
//!
//! Everything a frontend renders: collection lists, item tabs, forms, the
//! delete prompt and the dashboard cards. Views are rebuilt from the store
//! snapshot on every render.

pub mod dashboard;
pub mod item_tabs;
pub mod list;
pub mod screen;

pub use dashboard::{DashboardCard, DashboardSummary};
pub use item_tabs::{ALL_TAB, ItemTab, ItemTabs};
pub use list::{ListRow, ListView, RenderContext, RowRender};
pub use screen::{FormView, ListBody, Screen, ScreenBody, ScreenView};
