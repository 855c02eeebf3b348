//! Input validation and normalization for item payloads.
//!
//! Raw JSON records from HTTP bodies or import files are checked field by
//! field and normalized into an [`ItemInput`] whose quantity is already in
//! grams. Nothing reaches a repository without passing through here.

use std::fmt;

use serde_json::{Map, Value};

use crate::domain::{ItemType, NewItem, Unit};
use crate::ports::CoreError;

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Largest gram quantity the store can hold (signed 64-bit column).
#[allow(clippy::cast_sign_loss)]
pub const MAX_GRAMS: u64 = i64::MAX as u64;

const NAME: &str = "name";
const QUANTITY: &str = "quantity";
const TYPE: &str = "type";
const UNIT: &str = "unit";
const REQUIRED_FIELDS: [&str; 4] = [NAME, QUANTITY, TYPE, UNIT];

const MISSING: &str = "This field is missing.";
const BLANK: &str = "This value should not be blank.";
const NOT_STRING: &str = "This value should be of type string.";
const NOT_INTEGER: &str = "This value should be of type integer.";
const NEGATIVE: &str = "This value should be greater than or equal to 0.";
const TOO_LONG: &str = "This value is too long. It should have 100 characters or less.";
const TOO_LARGE: &str = "This value is too large.";
const INVALID_CHOICE: &str = "The value you selected is not a valid choice.";
const UNEXPECTED: &str = "This field was not expected.";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub reason: &'static str,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every field-level violation found in one payload.
///
/// Displays as `<field>: <reason>` entries joined by `; `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` is among the violations.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A validated, normalized item payload.
///
/// The quantity is stored in grams regardless of the submitted unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    name: String,
    quantity: u64,
    item_type: ItemType,
    submitted_unit: Unit,
}

impl ItemInput {
    /// Validate an arbitrary JSON value.
    ///
    /// Anything other than a JSON object is malformed input; an object with
    /// bad fields is a validation error.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let Value::Object(map) = value else {
            return Err(CoreError::MalformedInput(
                "Expected a JSON object with name, quantity, type and unit.".to_string(),
            ));
        };
        Ok(Self::from_map(map)?)
    }

    /// Validate the fields of a JSON object.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let name = check_name(map.get(NAME));
        let quantity = check_quantity(map.get(QUANTITY));
        let item_type = check_choice(map.get(TYPE), ItemType::parse);
        let unit = check_choice(map.get(UNIT), Unit::parse);

        // Conversion can only be checked once both quantity and unit are known.
        let grams = match (&quantity, &unit) {
            (Ok(amount), Ok(unit)) => match unit.to_grams(*amount) {
                Some(grams) if grams <= MAX_GRAMS => Ok(grams),
                _ => Err(TOO_LARGE),
            },
            (Err(reason), _) => Err(*reason),
            (Ok(amount), Err(_)) => Ok(*amount),
        };

        let mut violations = Vec::new();
        let mut record = |field: &str, result: Result<(), &'static str>| {
            if let Err(reason) = result {
                violations.push(FieldViolation {
                    field: field.to_string(),
                    reason,
                });
            }
        };
        record(NAME, name.as_ref().map(|_| ()).map_err(|r| *r));
        record(QUANTITY, grams.map(|_| ()));
        record(TYPE, item_type.map(|_| ()));
        record(UNIT, unit.map(|_| ()));

        let mut unexpected: Vec<&String> = map
            .keys()
            .filter(|key| !REQUIRED_FIELDS.contains(&key.as_str()))
            .collect();
        unexpected.sort();
        for key in unexpected {
            record(key.as_str(), Err(UNEXPECTED));
        }

        match (name, grams, item_type, unit) {
            (Ok(name), Ok(quantity), Ok(item_type), Ok(submitted_unit))
                if violations.is_empty() =>
            {
                Ok(Self {
                    name,
                    quantity,
                    item_type,
                    submitted_unit,
                })
            }
            _ => Err(ValidationError { violations }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity in grams.
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    pub const fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Unit of the normalized quantity.
    ///
    /// Always the canonical storage unit: kilogram input has already been
    /// converted, so it is reported as grams.
    pub const fn unit(&self) -> Unit {
        match self.submitted_unit {
            Unit::Grams | Unit::Kilograms => Unit::Grams,
        }
    }

    /// Unit the caller originally submitted.
    pub const fn submitted_unit(&self) -> Unit {
        self.submitted_unit
    }

    /// Build the record to persist.
    pub fn into_new_item(self) -> NewItem {
        let unit = self.unit();
        NewItem {
            name: self.name,
            quantity: self.quantity,
            item_type: self.item_type,
            unit,
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(true) | Value::Number(_) => false,
    }
}

fn present(value: Option<&Value>) -> Result<&Value, &'static str> {
    let value = value.ok_or(MISSING)?;
    if is_blank(value) {
        return Err(BLANK);
    }
    Ok(value)
}

fn check_name(value: Option<&Value>) -> Result<String, &'static str> {
    let Value::String(name) = present(value)? else {
        return Err(NOT_STRING);
    };
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(TOO_LONG);
    }
    Ok(name.clone())
}

fn check_quantity(value: Option<&Value>) -> Result<u64, &'static str> {
    let Value::Number(number) = present(value)? else {
        return Err(NOT_INTEGER);
    };
    if let Some(amount) = number.as_u64() {
        return Ok(amount);
    }
    if number.is_i64() {
        return Err(NEGATIVE);
    }
    Err(NOT_INTEGER)
}

fn check_choice<T>(value: Option<&Value>, parse: fn(&str) -> Option<T>) -> Result<T, &'static str> {
    let Value::String(raw) = present(value)? else {
        return Err(NOT_STRING);
    };
    parse(raw).ok_or(INVALID_CHOICE)
}
