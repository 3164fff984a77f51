//! Collection screen: list, form and delete gate wired together
//!
//! A screen shows either its list or its form, never both. The delete
//! prompt overlays the list while a delete is pending.

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{Category, DiningTable, Item, Outlet, User};

use super::item_tabs::ItemTabs;
use super::list::{ListView, RenderContext, RowRender};
use crate::core::Config;
use crate::deletion::{DeletePrompt, DeletionGate};
use crate::form::entities::RecordOf;
use crate::form::{EntityForm, FieldError, FormController, FormMode, FormValues};
use crate::image::ImageData;
use crate::services::CrudService;
use crate::store::Record;

/// Rendered form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    /// `Create New Table` / `Edit Table`
    pub title: String,
    /// `Create` / `Save`
    pub submit_label: &'static str,
    pub values: FormValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_error: Option<String>,
}

/// What the screen body shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScreenBody {
    List(ListView),
    ItemTabs(ItemTabs),
    Form(FormView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    pub title: &'static str,
    /// `+ Table`
    pub create_label: String,
    pub body: ScreenBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_prompt: Option<DeletePrompt>,
}

/// How a collection lays out its list body
pub trait ListBody: RowRender {
    /// Screen heading
    const TITLE: &'static str;

    fn body(records: &[Self], ctx: &RenderContext, pending_delete: Option<&str>) -> ScreenBody {
        ScreenBody::List(ListView::render(records, ctx, pending_delete))
    }
}

impl ListBody for Category {
    const TITLE: &'static str = "Categories";
}

impl ListBody for DiningTable {
    const TITLE: &'static str = "Tables";
}

impl ListBody for Outlet {
    const TITLE: &'static str = "Outlets";
}

impl ListBody for User {
    const TITLE: &'static str = "Users";
}

impl ListBody for Item {
    const TITLE: &'static str = "Items";

    fn body(records: &[Self], ctx: &RenderContext, pending_delete: Option<&str>) -> ScreenBody {
        ScreenBody::ItemTabs(ItemTabs::render(records, &ctx.categories, ctx, pending_delete))
    }
}

/// One collection screen
pub struct Screen<F: EntityForm> {
    form: FormController<F>,
    deletion: DeletionGate,
}

impl<F> Screen<F>
where
    F: EntityForm,
    RecordOf<F>: ListBody,
{
    pub fn new(service: F::Service, config: &Config) -> Self {
        Self {
            form: FormController::new(service, config),
            deletion: DeletionGate::new(),
        }
    }

    pub fn form(&self) -> &FormController<F> {
        &self.form
    }

    /// Field edits go straight to the controller
    pub fn form_mut(&mut self) -> &mut FormController<F> {
        &mut self.form
    }

    pub fn deletion(&self) -> &DeletionGate {
        &self.deletion
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit(&mut self, id: &str) -> AppResult<()> {
        self.form.open_edit(id)
    }

    pub fn apply_image(&mut self, image: Option<ImageData>) {
        self.form.apply_image(image);
    }

    pub fn submit(&mut self) -> AppResult<RecordOf<F>> {
        self.form.submit()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Start the confirm-or-cancel flow for record `id`
    pub fn request_delete(&mut self, id: &str) -> AppResult<()> {
        let record = self
            .form
            .service()
            .find(id)
            .ok_or_else(|| AppError::not_found(<RecordOf<F> as Record>::RESOURCE))?;
        self.deletion.request(&record);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    pub fn confirm_delete(&mut self) -> Option<AppResult<RecordOf<F>>> {
        self.deletion.confirm(self.form.service())
    }

    /// Render from the current store snapshot
    pub fn view(&self, ctx: &RenderContext) -> ScreenView {
        let label = <F::Service as CrudService>::LABEL;
        let body = match self.form.mode() {
            FormMode::Closed => {
                let records = self.form.service().list();
                let pending = self.deletion.pending().map(|p| p.id.as_str());
                <RecordOf<F> as ListBody>::body(&records, ctx, pending)
            }
            FormMode::Create | FormMode::Edit { .. } => {
                let editing = self.form.editing_id().is_some();
                ScreenBody::Form(FormView {
                    title: if editing {
                        format!("Edit {label}")
                    } else {
                        format!("Create New {label}")
                    },
                    submit_label: if editing { "Save" } else { "Create" },
                    values: self.form.values().clone(),
                    error: self.form.error().cloned(),
                    form_error: self.form.form_error().map(str::to_string),
                })
            }
        };
        ScreenView {
            title: <RecordOf<F> as ListBody>::TITLE,
            create_label: format!("+ {label}"),
            body,
            delete_prompt: self.deletion.prompt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{CategoryForm, ItemForm, TableForm};
    use crate::services::{CategoryService, DiningTableService, ItemService};
    use crate::store::EntityStore;
    use shared::models::default_categories;

    fn table_screen() -> Screen<TableForm> {
        Screen::new(DiningTableService::new(EntityStore::new()), &Config::default())
    }

    #[test]
    fn test_form_hides_list() {
        let mut screen = table_screen();
        let ctx = RenderContext::new("RM");

        let view = screen.view(&ctx);
        assert_eq!(view.title, "Tables");
        assert_eq!(view.create_label, "+ Table");
        assert!(matches!(view.body, ScreenBody::List(ref l) if l.empty_message == Some("Please create tables.")));

        screen.open_create();
        match screen.view(&ctx).body {
            ScreenBody::Form(form) => {
                assert_eq!(form.title, "Create New Table");
                assert_eq!(form.submit_label, "Create");
            }
            other => panic!("expected form, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_form_title_and_error() {
        let service = CategoryService::new(
            EntityStore::with_records(default_categories()),
            EntityStore::new(),
        );
        let mut screen: Screen<CategoryForm> = Screen::new(service, &Config::default());
        screen.open_edit("1").unwrap();
        screen.form_mut().set_text("name", "drinks");
        assert!(screen.submit().is_err());

        match screen.view(&RenderContext::new("RM")).body {
            ScreenBody::Form(form) => {
                assert_eq!(form.title, "Edit Category");
                assert_eq!(form.submit_label, "Save");
                assert_eq!(form.error.unwrap().message, "Category name already exists.");
            }
            other => panic!("expected form, got {other:?}"),
        }
    }

    #[test]
    fn test_list_after_edit_cancel() {
        let service = CategoryService::new(
            EntityStore::with_records(default_categories()),
            EntityStore::new(),
        );
        let mut screen: Screen<CategoryForm> = Screen::new(service, &Config::default());
        screen.open_edit("2").unwrap();
        assert!(matches!(screen.view(&RenderContext::new("RM")).body, ScreenBody::Form(_)));

        screen.cancel();
        match screen.view(&RenderContext::new("RM")).body {
            ScreenBody::List(list) => {
                assert_eq!(list.rows.len(), 6);
                let json = serde_json::to_value(&list.rows[1]).unwrap();
                assert_eq!(json["title"], "Drinks");
                assert!(json.get("editing").is_none());
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_flow_through_screen() {
        let mut screen = table_screen();
        screen.open_create();
        screen.form_mut().set_text("name", "T1");
        let table = screen.submit().unwrap();

        screen.request_delete(&table.id).unwrap();
        let view = screen.view(&RenderContext::new("RM"));
        assert_eq!(view.delete_prompt.unwrap().target.name, "T1");
        match view.body {
            ScreenBody::List(list) => assert!(list.rows[0].pending_delete),
            other => panic!("expected list, got {other:?}"),
        }

        screen.cancel_delete();
        assert_eq!(screen.form().service().list().len(), 1);

        screen.request_delete(&table.id).unwrap();
        screen.confirm_delete().unwrap().unwrap();
        assert!(screen.form().service().list().is_empty());
        assert!(screen.confirm_delete().is_none());

        assert!(screen.request_delete("missing").is_err());
    }

    #[test]
    fn test_item_screen_renders_tabs() {
        let categories = EntityStore::with_records(default_categories());
        let service = ItemService::new(EntityStore::new(), categories.clone(), true);
        let screen: Screen<ItemForm> = Screen::new(service, &Config::default());
        let ctx = RenderContext::new("RM").with_categories(categories.get().to_vec());

        match screen.view(&ctx).body {
            ScreenBody::ItemTabs(tabs) => assert_eq!(tabs.tabs.len(), 7),
            other => panic!("expected tabs, got {other:?}"),
        }
    }
}
