//! Declarative form schema
//!
//! A [`FormSchema`] is an ordered list of [`FieldSchema`]. Validation walks
//! the fields in declaration order and stops at the first failure, so the
//! form only ever marks one field.
//!
//! Raw values are text. Numeric fields are coerced before any rule runs:
//! empty input yields the field's "required" message, unparsable input its
//! type message, and only then do range rules apply.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use validator::ValidateEmail;

use crate::utils::validation::is_special;

// =============================================================================
// Raw values
// =============================================================================

/// One raw form value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    /// Repeated sub-form (item choices)
    List(Vec<FormValues>),
}

/// Raw values of a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FormValues::set_text`]
    pub fn with_text(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    /// Builder form of [`FormValues::set_flag`]
    pub fn with_flag(mut self, field: &str, value: bool) -> Self {
        self.set_flag(field, value);
        self
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.0.insert(field.to_string(), FieldValue::Flag(value));
    }

    pub fn set_list(&mut self, field: &str, rows: Vec<FormValues>) {
        self.0.insert(field.to_string(), FieldValue::List(rows));
    }

    /// Text value, empty when missing or not text
    pub fn text(&self, field: &str) -> &str {
        match self.0.get(field) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn flag(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(FieldValue::Flag(true)))
    }

    pub fn list(&self, field: &str) -> &[FormValues] {
        match self.0.get(field) {
            Some(FieldValue::List(rows)) => rows,
            _ => &[],
        }
    }

    /// Append a row to a list field, creating the list when absent
    pub fn push_row(&mut self, field: &str, row: FormValues) {
        let mut rows = self.list(field).to_vec();
        rows.push(row);
        self.set_list(field, rows);
    }

    /// Remove row `index` of a list field; `false` when out of range
    pub fn remove_row(&mut self, field: &str, index: usize) -> bool {
        match self.0.get_mut(field) {
            Some(FieldValue::List(rows)) if index < rows.len() => {
                rows.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Edit row `index` of a list field in place; `false` when out of range
    pub fn update_row(&mut self, field: &str, index: usize, f: impl FnOnce(&mut FormValues)) -> bool {
        match self.0.get_mut(field) {
            Some(FieldValue::List(rows)) => match rows.get_mut(index) {
                Some(row) => {
                    f(row);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }
}

// =============================================================================
// Field errors
// =============================================================================

/// The one field marked on a rejected form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field path, e.g. `price` or `choices.0.name`
    pub field: String,
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    /// Field-bound view of a service error, if it names a field
    pub fn from_app_error(err: &AppError) -> Option<Self> {
        err.field()
            .map(|field| Self::new(field, err.code, err.message.clone()))
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::for_field(err.code, err.field, err.message)
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Character class required by a [`Rule::Contains`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => is_special(&c),
        }
    }
}

/// Constraint checked after a value is present and well-typed
#[derive(Debug, Clone)]
pub enum Rule {
    MinDecimal(Decimal, &'static str),
    MinInteger(i64, &'static str),
    MinLength(usize, &'static str),
    Email(&'static str),
    Contains(CharClass, &'static str),
    OneOf(&'static [&'static str], &'static str),
}

impl Rule {
    /// `None` when the value passes (or the rule does not apply to it)
    fn check(&self, value: &ParsedValue) -> Option<(ErrorCode, &'static str)> {
        match (self, value) {
            (Rule::MinDecimal(min, msg), ParsedValue::Decimal(v)) if v < min => {
                Some((ErrorCode::ValueOutOfRange, *msg))
            }
            (Rule::MinInteger(min, msg), ParsedValue::Integer(v)) if v < min => {
                Some((ErrorCode::ValueOutOfRange, *msg))
            }
            (Rule::MinLength(min, msg), ParsedValue::Text(s)) if s.chars().count() < *min => {
                Some((ErrorCode::ValueOutOfRange, *msg))
            }
            (Rule::Email(msg), ParsedValue::Text(s)) if !s.trim().to_string().validate_email() => {
                Some((ErrorCode::InvalidFormat, *msg))
            }
            (Rule::Contains(class, msg), ParsedValue::Text(s)) if !s.chars().any(|c| class.matches(c)) => {
                Some((ErrorCode::InvalidFormat, *msg))
            }
            (Rule::OneOf(allowed, msg), ParsedValue::Text(s)) if !allowed.iter().any(|a| *a == s.trim()) => {
                Some((ErrorCode::InvalidFormat, *msg))
            }
            _ => None,
        }
    }
}

/// Value type of a field
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    /// Money; the message is shown when the text does not parse
    Decimal { invalid: &'static str },
    /// Whole number; the message is shown when the text does not parse
    Integer { invalid: &'static str },
    Flag,
    List(Vec<FieldSchema>),
}

/// One field of a form
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Message when empty; `None` makes the field optional
    pub required: Option<&'static str>,
    pub rules: Vec<Rule>,
    /// Only validated while this flag field is on
    pub when: Option<&'static str>,
}

impl FieldSchema {
    fn of(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: None,
            rules: Vec::new(),
            when: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::of(name, FieldKind::Text)
    }

    pub fn decimal(name: &'static str, invalid: &'static str) -> Self {
        Self::of(name, FieldKind::Decimal { invalid })
    }

    pub fn integer(name: &'static str, invalid: &'static str) -> Self {
        Self::of(name, FieldKind::Integer { invalid })
    }

    pub fn flag(name: &'static str) -> Self {
        Self::of(name, FieldKind::Flag)
    }

    pub fn list(name: &'static str, fields: Vec<FieldSchema>) -> Self {
        Self::of(name, FieldKind::List(fields))
    }

    pub fn required(mut self, msg: &'static str) -> Self {
        self.required = Some(msg);
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn when(mut self, flag: &'static str) -> Self {
        self.when = Some(flag);
        self
    }

    fn check(&self, values: &FormValues, path: &str) -> Result<Option<ParsedValue>, FieldError> {
        let parsed = match &self.kind {
            FieldKind::Flag => return Ok(Some(ParsedValue::Flag(values.flag(self.name)))),
            FieldKind::List(fields) => {
                let rows = values
                    .list(self.name)
                    .iter()
                    .enumerate()
                    .map(|(i, row)| validate_fields(fields, row, &format!("{path}.{i}.")))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Some(ParsedValue::List(rows)));
            }
            kind => {
                let raw = values.text(self.name);
                if raw.trim().is_empty() {
                    return match self.required {
                        Some(msg) => Err(FieldError::new(path, ErrorCode::RequiredField, msg)),
                        None if matches!(kind, FieldKind::Text) => {
                            Ok(Some(ParsedValue::Text(String::new())))
                        }
                        None => Ok(None),
                    };
                }
                match kind {
                    FieldKind::Decimal { invalid } => Decimal::from_str(raw.trim())
                        .map(ParsedValue::Decimal)
                        .map_err(|_| FieldError::new(path, ErrorCode::TypeMismatch, *invalid))?,
                    FieldKind::Integer { invalid } => raw
                        .trim()
                        .parse::<i64>()
                        .map(ParsedValue::Integer)
                        .map_err(|_| FieldError::new(path, ErrorCode::TypeMismatch, *invalid))?,
                    _ => ParsedValue::Text(raw.to_string()),
                }
            }
        };

        for rule in &self.rules {
            if let Some((code, msg)) = rule.check(&parsed) {
                return Err(FieldError::new(path, code, msg));
            }
        }
        Ok(Some(parsed))
    }
}

/// Ordered field list of one form
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate every field in declaration order; first failure wins
    pub fn validate(&self, values: &FormValues) -> Result<ValidValues, FieldError> {
        validate_fields(&self.fields, values, "")
    }
}

fn validate_fields(
    fields: &[FieldSchema],
    values: &FormValues,
    prefix: &str,
) -> Result<ValidValues, FieldError> {
    let mut valid = ValidValues::default();
    for field in fields {
        if let Some(flag) = field.when
            && !values.flag(flag)
        {
            continue;
        }
        let path = format!("{prefix}{}", field.name);
        if let Some(parsed) = field.check(values, &path)? {
            valid.0.insert(field.name, parsed);
        }
    }
    Ok(valid)
}

// =============================================================================
// Validated values
// =============================================================================

/// A value that passed its field's checks
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Text(String),
    Decimal(Decimal),
    Integer(i64),
    Flag(bool),
    List(Vec<ValidValues>),
}

/// Typed values of a form that passed validation
///
/// Getters fall back to empty / zero for fields that were skipped
/// (optional and empty, or gated off by a flag).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidValues(HashMap<&'static str, ParsedValue>);

impl ValidValues {
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            Some(ParsedValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    /// Text value, `None` when empty
    pub fn optional_text(&self, field: &str) -> Option<String> {
        Some(self.text(field)).filter(|s| !s.trim().is_empty())
    }

    pub fn decimal(&self, field: &str) -> Decimal {
        match self.0.get(field) {
            Some(ParsedValue::Decimal(d)) => *d,
            _ => Decimal::ZERO,
        }
    }

    pub fn integer(&self, field: &str) -> i64 {
        match self.0.get(field) {
            Some(ParsedValue::Integer(n)) => *n,
            _ => 0,
        }
    }

    pub fn flag(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(ParsedValue::Flag(true)))
    }

    pub fn list(&self, field: &str) -> &[ValidValues] {
        match self.0.get(field) {
            Some(ParsedValue::List(rows)) => rows,
            _ => &[],
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::text("name").required("Item name is required"),
            FieldSchema::decimal("price", "Price must be a number")
                .required("Please enter a price")
                .rule(Rule::MinDecimal(Decimal::ZERO, "Price must be at least 0")),
            FieldSchema::flag("selection"),
            FieldSchema::list(
                "choices",
                vec![FieldSchema::text("name").required("Choice name is required")],
            )
            .when("selection"),
        ])
    }

    #[test]
    fn test_numeric_coercion_messages() {
        let schema = price_schema();
        let base = FormValues::new().with_text("name", "Latte");

        let err = schema.validate(&base).unwrap_err();
        assert_eq!(err.field, "price");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Please enter a price");

        let err = schema.validate(&base.clone().with_text("price", "abc")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
        assert_eq!(err.message, "Price must be a number");

        let err = schema.validate(&base.clone().with_text("price", "-0.5")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "Price must be at least 0");

        let valid = schema.validate(&base.with_text("price", " 8.50 ")).unwrap();
        assert_eq!(valid.decimal("price"), Decimal::new(850, 2));
    }

    #[test]
    fn test_first_failing_field_in_declaration_order() {
        let schema = price_schema();
        let err = schema
            .validate(&FormValues::new().with_text("price", "x"))
            .unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_list_gated_by_flag() {
        let schema = price_schema();
        let mut values = FormValues::new()
            .with_text("name", "Latte")
            .with_text("price", "8");
        values.push_row("choices", FormValues::new());

        let valid = schema.validate(&values).unwrap();
        assert!(!valid.contains("choices"));

        values.set_flag("selection", true);
        let err = schema.validate(&values).unwrap_err();
        assert_eq!(err.field, "choices.0.name");
    }

    #[test]
    fn test_text_rules() {
        let schema = FormSchema::new(vec![
            FieldSchema::text("email")
                .required("Email is required")
                .rule(Rule::Email("Invalid email address")),
            FieldSchema::text("role").rule(Rule::OneOf(&["Admin", "Staff"], "bad role")),
            FieldSchema::text("password")
                .required("too short")
                .rule(Rule::MinLength(4, "too short"))
                .rule(Rule::Contains(CharClass::Digit, "needs digit")),
        ]);

        let err = schema
            .validate(&FormValues::new().with_text("email", "nope"))
            .unwrap_err();
        assert_eq!(err.message, "Invalid email address");

        let ok_email = FormValues::new().with_text("email", "a@b.co");
        let err = schema
            .validate(&ok_email.clone().with_text("role", "Chef"))
            .unwrap_err();
        assert_eq!(err.message, "bad role");

        let err = schema
            .validate(&ok_email.clone().with_text("password", "abcd"))
            .unwrap_err();
        assert_eq!(err.message, "needs digit");

        let valid = schema
            .validate(&ok_email.with_text("password", "abc1"))
            .unwrap();
        assert_eq!(valid.text("password"), "abc1");
        assert_eq!(valid.optional_text("role"), None);
    }

    #[test]
    fn test_field_error_from_app_error() {
        let err = AppError::duplicate(ErrorCode::TableNameExists, "name");
        let field = FieldError::from_app_error(&err).unwrap();
        assert_eq!(field.field, "name");
        assert_eq!(field.message, "Table name already exists.");

        assert!(FieldError::from_app_error(&AppError::invalid_request("boom")).is_none());

        let back: AppError = field.into();
        assert_eq!(back.field(), Some("name"));
    }

    #[test]
    fn test_form_values_json_shape() {
        let mut values = FormValues::new()
            .with_text("name", "Latte")
            .with_flag("selection", true);
        values.push_row("choices", FormValues::new().with_text("name", "Large"));

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["selection"], true);
        assert_eq!(json["choices"][0]["name"], "Large");

        let back: FormValues = serde_json::from_value(json).unwrap();
        assert_eq!(back, values);
    }
}
