//! End-to-end admin flows over a fresh `AdminState`

use pos_admin::form::{CategoryForm, ItemForm, OutletForm, TableForm};
use pos_admin::views::ScreenBody;
use pos_admin::{
    AdminState, Config, CrudService, DashboardSummary, ErrorCode, ProfileEditor, Screen, dispatch,
};
use shared::AdminIntent;
use shared::models::{CategoryInput, DiningTableInput};

fn state() -> AdminState {
    AdminState::new(Config::with_overrides(true, true))
}

fn blank_state() -> AdminState {
    AdminState::new(Config::with_overrides(false, true))
}

#[test]
fn test_ids_unique_and_never_reused() {
    let state = blank_state();
    let mut ids = Vec::new();
    for name in ["T1", "T2", "T3"] {
        let table = state
            .tables
            .create(DiningTableInput {
                name: name.into(),
                seats: 2,
            })
            .unwrap();
        ids.push(table.id);
    }
    state.tables.delete(&ids[1]).unwrap();
    let next = state
        .tables
        .create(DiningTableInput {
            name: "T4".into(),
            seats: 2,
        })
        .unwrap();

    assert!(!ids.contains(&next.id));
    let mut all: Vec<String> = state.tables.list().iter().map(|t| t.id.clone()).collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 3);
}

#[test]
fn test_duplicate_category_leaves_collection_unchanged() {
    let state = blank_state();
    for name in ["Dishes", "Drinks"] {
        state.categories.create(CategoryInput { name: name.into() }).unwrap();
    }
    let revision = state.categories.store().revision();

    let mut screen: Screen<CategoryForm> = Screen::new(state.categories.clone(), &state.config);
    screen.open_create();
    screen.form_mut().set_text("name", "dishes");
    let err = screen.submit().unwrap_err();
    assert_eq!(err.code, ErrorCode::CategoryNameExists);
    assert_eq!(screen.form().error().unwrap().field, "name");
    assert_eq!(state.categories.list().len(), 2);
    assert_eq!(state.categories.store().revision(), revision);

    screen.form_mut().set_text("name", "Snacks");
    screen.submit().unwrap();
    let names: Vec<String> = state.categories.list().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, ["Dishes", "Drinks", "Snacks"]);
    assert!(!screen.form().is_open());
}

#[test]
fn test_unmodified_edit_succeeds() {
    let state = state();
    let mut screen: Screen<CategoryForm> = Screen::new(state.categories.clone(), &state.config);
    screen.open_edit("2").unwrap();
    let saved = screen.submit().unwrap();
    assert_eq!(saved.id, "2");
    assert_eq!(saved.name, "Drinks");
}

#[test]
fn test_delete_cancel_then_confirm() {
    let state = state();
    let mut screen: Screen<CategoryForm> = Screen::new(state.categories.clone(), &state.config);

    screen.request_delete("3").unwrap();
    screen.cancel_delete();
    assert_eq!(state.categories.list().len(), 6);

    screen.request_delete("3").unwrap();
    screen.request_delete("4").unwrap();
    let removed = screen.confirm_delete().unwrap().unwrap();
    assert_eq!(removed.name, "Promo");
    assert!(state.categories.find("3").is_some());
    assert!(state.categories.find("4").is_none());
}

#[test]
fn test_table_seats_boundary() {
    let state = blank_state();
    let mut screen: Screen<TableForm> = Screen::new(state.tables.clone(), &state.config);
    screen.open_create();
    screen.form_mut().set_text("name", "Patio");
    screen.form_mut().set_text("seats", "0");
    let err = screen.submit().unwrap_err();
    assert_eq!(err.message, "Number of seats must be at least 1");
    assert!(state.tables.list().is_empty());

    screen.form_mut().set_text("seats", "1");
    let table = screen.submit().unwrap();
    assert_eq!(table.seats, 1);
}

#[test]
fn test_item_price_and_category_checks() {
    let state = state();
    let mut screen: Screen<ItemForm> = Screen::new(state.items.clone(), &state.config);
    screen.open_create();
    screen.form_mut().set_text("name", "Teh Tarik");
    screen.form_mut().set_text("price", "abc");
    screen.form_mut().set_text("category", "2");
    let err = screen.submit().unwrap_err();
    assert_eq!(err.message, "Price must be a number");
    assert_eq!(screen.form().error().unwrap().field, "price");

    screen.form_mut().set_text("price", "3.50");
    screen.form_mut().set_text("category", "no-such-category");
    let err = screen.submit().unwrap_err();
    assert_eq!(err.code, ErrorCode::ItemCategoryInvalid);
    assert_eq!(screen.form().error().unwrap().field, "category");
    assert!(state.items.list().is_empty());

    screen.form_mut().set_text("category", "2");
    let item = screen.submit().unwrap();
    assert_eq!(state.items.by_category("2")[0].id, item.id);

    match screen.view(&state.render_context()).body {
        ScreenBody::ItemTabs(tabs) => {
            assert_eq!(tabs.tab("all").unwrap().list.rows.len(), 1);
            assert_eq!(tabs.tab("2").unwrap().list.rows[0].lines[0], "RM3.50");
            assert!(tabs.tab("1").unwrap().list.rows.is_empty());
        }
        other => panic!("expected item tabs, got {other:?}"),
    }
}

#[test]
fn test_outlet_invalid_email() {
    let state = blank_state();
    let mut screen: Screen<OutletForm> = Screen::new(state.outlets.clone(), &state.config);
    screen.open_create();
    for (field, value) in [
        ("name", "Bangsar"),
        ("businessRegNo", "2024010001"),
        ("tradingLicense", "TL-88"),
        ("address1", "1 Jalan Telawi"),
        ("postcode", "59100"),
        ("state", "Kuala Lumpur"),
        ("contactNumber", "123456789"),
        ("email", "not-an-email"),
    ] {
        screen.form_mut().set_text(field, value);
    }
    let err = screen.submit().unwrap_err();
    assert_eq!(err.message, "Invalid email address");
    assert!(state.outlets.list().is_empty());

    screen.form_mut().set_text("email", "bangsar@example.com");
    let outlet = screen.submit().unwrap();
    assert_eq!(outlet.country_code, state.config.default_country_code);
}

#[test]
fn test_profile_password_needs_special_character() {
    let state = blank_state();
    let mut editor = ProfileEditor::new(state.profile.clone());
    assert!(editor.is_editable());

    editor.set_text("name", "Kedai Makan").unwrap();
    editor.set_text("contactNumber", "123456789").unwrap();
    editor.set_text("email", "owner@example.com").unwrap();
    editor.set_text("password", "Password1234").unwrap();
    let err = editor.submit().unwrap_err();
    assert_eq!(err.message, "Password must contain at least one special character");
    assert!(!state.profile.get().is_saved());

    editor.set_text("password", "Password1234!").unwrap();
    let profile = editor.submit().unwrap();
    assert!(!profile.id.is_empty());
    assert!(!editor.is_editable());
    assert!(state.profile.get().is_saved());
}

#[tokio::test]
async fn test_revision_notifies_subscribers() {
    let state = blank_state();
    let mut rx = state.tables.store().subscribe();
    let before = rx.borrow().revision;

    state
        .tables
        .create(DiningTableInput {
            name: "Bar".into(),
            seats: 6,
        })
        .unwrap();

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().revision, before + 1);
}

#[test]
fn test_dispatch_json_and_dashboard() {
    let state = state();
    let lines = [
        r#"{"model":"Category","action":{"type":"Create","data":{"name":"Snacks"}}}"#,
        r#"{"model":"Table","action":{"type":"Create","data":{"name":"T1","seats":4}}}"#,
        r#"{"model":"User","action":{"type":"Create","data":{"name":"Aina","role":"Staff","password":"secret"}}}"#,
        r#"{"model":"Item","action":{"type":"Create","data":{"name":"Kopi","price":2.5,"category":"2"}}}"#,
    ];
    for line in lines {
        let intent: AdminIntent = serde_json::from_str(line).unwrap();
        let result = dispatch(&state, intent);
        assert!(result.success, "{line}: {}", result.message);
    }

    let summary = DashboardSummary::from_state(&state);
    assert_eq!(summary.total_categories, 7);
    assert_eq!(summary.total_tables, 1);
    assert_eq!(summary.total_users, 1);
    assert_eq!(summary.total_items, 1);
}
