//! Forms: declarative schema, per-collection form definitions, the generic
//! create/edit controller and the profile editor

pub mod controller;
pub mod entities;
pub mod profile;
pub mod schema;

pub use controller::{FormController, FormMode};
pub use entities::{CategoryForm, EntityForm, ItemForm, OutletForm, TableForm, UserForm};
pub use profile::ProfileEditor;
pub use schema::{FieldError, FieldSchema, FieldValue, FormSchema, FormValues, Rule, ValidValues};
