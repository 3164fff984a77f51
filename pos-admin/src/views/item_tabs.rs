//! Item screen tabs: a synthetic "all" tab, then one tab per category

use serde::Serialize;
use shared::models::{Category, Item};

use super::list::{ListView, RenderContext};
use crate::utils::messages;

/// Key of the unfiltered tab
pub const ALL_TAB: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTab {
    /// `all` or a category id
    pub key: String,
    pub label: String,
    pub list: ListView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTabs {
    pub tabs: Vec<ItemTab>,
    /// Set (and `tabs` empty) when there are no categories at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl ItemTabs {
    pub fn render(
        items: &[Item],
        categories: &[Category],
        ctx: &RenderContext,
        pending_delete: Option<&str>,
    ) -> Self {
        if categories.is_empty() {
            return Self {
                tabs: Vec::new(),
                empty_message: Some(messages::EMPTY_ITEM_TABS),
            };
        }

        let mut tabs = Vec::with_capacity(categories.len() + 1);
        tabs.push(ItemTab {
            key: ALL_TAB.to_string(),
            label: "All".to_string(),
            list: ListView::render(items, ctx, pending_delete),
        });
        for category in categories {
            let filtered: Vec<Item> = items
                .iter()
                .filter(|i| i.category == category.id)
                .cloned()
                .collect();
            tabs.push(ItemTab {
                key: category.id.clone(),
                label: category.name.clone(),
                list: ListView::render(&filtered, ctx, pending_delete),
            });
        }
        Self {
            tabs,
            empty_message: None,
        }
    }

    pub fn tab(&self, key: &str) -> Option<&ItemTab> {
        self.tabs.iter().find(|t| t.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::default_categories;

    fn item(id: &str, category: &str) -> Item {
        Item {
            id: id.to_string(),
            name: format!("Item {id}"),
            price: Decimal::ONE,
            category: category.to_string(),
            image: None,
            image_name: None,
            selection: false,
            choices: Vec::new(),
        }
    }

    #[test]
    fn test_tabs_filter_by_category() {
        let items = vec![item("a", "1"), item("b", "2"), item("c", "1"), item("d", "gone")];
        let categories = default_categories();
        let ctx = RenderContext::new("RM").with_categories(categories.clone());
        let tabs = ItemTabs::render(&items, &categories, &ctx, None);

        assert_eq!(tabs.tabs.len(), 7);
        assert_eq!(tabs.tabs[0].key, "all");
        // Dangling references only show under "all"
        assert_eq!(tabs.tab("all").unwrap().list.rows.len(), 4);
        assert_eq!(tabs.tab("1").unwrap().list.rows.len(), 2);
        assert_eq!(tabs.tab("2").unwrap().label, "Drinks");
        assert!(tabs.tab("6").unwrap().list.rows.is_empty());
    }

    #[test]
    fn test_no_categories() {
        let tabs = ItemTabs::render(&[item("a", "1")], &[], &RenderContext::new("RM"), None);
        assert!(tabs.tabs.is_empty());
        assert_eq!(tabs.empty_message, Some("Please create categories."));
    }
}
