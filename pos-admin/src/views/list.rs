//! List view models
//!
//! Pure rendering of a store snapshot. The only state a list carries is
//! which row is mid-edit and which is pending delete.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Category, DiningTable, Item, Outlet, User};

use crate::store::Record;
use crate::utils::messages;

/// Formatting inputs shared by all rows
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Price prefix, e.g. "RM"
    pub currency_symbol: String,
    /// Used to show an item's category name
    pub categories: Vec<Category>,
}

impl RenderContext {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// `RM12.50`
    pub fn price(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub pending_delete: bool,
}

/// How a record renders as a row
pub trait RowRender: Record {
    /// Shown when the collection is empty
    const EMPTY_MESSAGE: Option<&'static str>;

    fn lines(&self, ctx: &RenderContext) -> Vec<String>;

    fn image(&self) -> Option<&str> {
        None
    }
}

impl RowRender for Category {
    const EMPTY_MESSAGE: Option<&'static str> = Some(messages::EMPTY_CATEGORIES);

    fn lines(&self, _ctx: &RenderContext) -> Vec<String> {
        Vec::new()
    }
}

impl RowRender for Item {
    // Item tabs render nothing for an empty category
    const EMPTY_MESSAGE: Option<&'static str> = None;

    fn lines(&self, ctx: &RenderContext) -> Vec<String> {
        let mut lines = vec![ctx.price(self.price)];
        if let Some(name) = ctx.category_name(&self.category) {
            lines.push(name.to_string());
        }
        if self.selection {
            lines.extend(
                self.choices
                    .iter()
                    .map(|c| format!("{} (+{})", c.name, ctx.price(c.price))),
            );
        }
        lines
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl RowRender for DiningTable {
    const EMPTY_MESSAGE: Option<&'static str> = Some(messages::EMPTY_TABLES);

    fn lines(&self, _ctx: &RenderContext) -> Vec<String> {
        vec![format!("Seats: {}", self.seats)]
    }
}

impl RowRender for Outlet {
    const EMPTY_MESSAGE: Option<&'static str> = Some(messages::EMPTY_OUTLETS);

    fn lines(&self, _ctx: &RenderContext) -> Vec<String> {
        let address = [
            Some(self.address1.as_str()),
            self.address2.as_deref(),
            self.address3.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
        vec![
            format!("Business Registration Number: {}", self.business_reg_no),
            format!("Trading License: {}", self.trading_license),
            format!("{address}, {} {}", self.postcode, self.state),
            format!("Contact Number: {} {}", self.country_code, self.contact_number),
            format!("Email: {}", self.email),
        ]
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl RowRender for User {
    const EMPTY_MESSAGE: Option<&'static str> = Some(messages::EMPTY_USERS);

    fn lines(&self, _ctx: &RenderContext) -> Vec<String> {
        vec![format!("Role: {}", self.role)]
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// A rendered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub rows: Vec<ListRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl ListView {
    pub fn render<T: RowRender>(
        records: &[T],
        ctx: &RenderContext,
        pending_delete: Option<&str>,
    ) -> Self {
        let rows: Vec<ListRow> = records
            .iter()
            .map(|r| ListRow {
                id: r.id().to_string(),
                title: r.name().to_string(),
                lines: r.lines(ctx),
                image: r.image().map(str::to_string),
                pending_delete: pending_delete == Some(r.id()),
            })
            .collect();
        let empty_message = if rows.is_empty() { T::EMPTY_MESSAGE } else { None };
        Self {
            rows,
            empty_message,
        }
    }
}
