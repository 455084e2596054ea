/// Structural schema checks for token records and the published list.
///
/// The schemas are enforced directly against raw `serde_json` values so the
/// validator can report every violation in a document, including type
/// mismatches that would make a typed parse bail at the first error.
use chrono::{ DateTime, NaiveDate };
use serde_json::Value;
use url::Url;

// =============================================================================
// SCHEMA CONSTANTS
// =============================================================================

/// Fields every token record must provide.
pub const RECORD_REQUIRED_KEYS: &[&str] = &[
    "name",
    "symbol",
    "address",
    "decimals",
    "description",
    "logo",
];

/// The full enumerated key set of a token record. Anything else is rejected
/// (closed schema).
pub const RECORD_ALLOWED_KEYS: &[&str] = &[
    "name",
    "symbol",
    "address",
    "decimals",
    "description",
    "logo",
    "website",
    "twitter",
    "discord",
    "telegram",
    "tags",
    "verified",
    "verifiedBy",
    "verificationDate",
];

/// Fields every published list entry must provide.
pub const ENTRY_REQUIRED_KEYS: &[&str] = &["name", "symbol", "address", "decimals", "verified"];

/// Top-level fields of the published list.
pub const LIST_REQUIRED_KEYS: &[&str] = &["name", "version", "timestamp", "tokens"];

/// Minimum character length of a token address.
pub const ADDRESS_MIN_LENGTH: usize = 32;

// =============================================================================
// VIOLATIONS
// =============================================================================

/// A single schema violation: the JSON path of the offending field and the
/// constraint it breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

// =============================================================================
// TOKEN RECORD SCHEMA
// =============================================================================

/// Validate a raw token record against the full record schema.
///
/// Returns every violation found; an empty vector means the record is valid.
pub fn validate_token_record(value: &Value) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    let Some(object) = value.as_object() else {
        violations.push(SchemaViolation::new("", "must be a JSON object"));
        return violations;
    };

    for key in RECORD_REQUIRED_KEYS {
        if !object.contains_key(*key) {
            violations.push(SchemaViolation::new(*key, "required field is missing"));
        }
    }

    for key in object.keys() {
        if !RECORD_ALLOWED_KEYS.contains(&key.as_str()) {
            violations.push(SchemaViolation::new(key, "unexpected property (schema is closed)"));
        }
    }

    if let Some(v) = object.get("name") {
        check_non_empty_string(&mut violations, "name", v);
    }
    if let Some(v) = object.get("symbol") {
        check_non_empty_string(&mut violations, "symbol", v);
    }
    if let Some(v) = object.get("address") {
        check_min_length(&mut violations, "address", v, ADDRESS_MIN_LENGTH);
    }
    if let Some(v) = object.get("decimals") {
        check_whole_number(&mut violations, "decimals", v, Some(0));
    }
    if let Some(v) = object.get("description") {
        check_string(&mut violations, "description", v);
    }
    for field in ["logo", "website", "twitter", "discord", "telegram"] {
        if let Some(v) = object.get(field) {
            check_uri(&mut violations, field, v);
        }
    }
    if let Some(v) = object.get("tags") {
        check_string_array(&mut violations, "tags", v);
    }
    if let Some(v) = object.get("verified") {
        check_bool(&mut violations, "verified", v);
    }
    if let Some(v) = object.get("verifiedBy") {
        check_string(&mut violations, "verifiedBy", v);
    }
    if let Some(v) = object.get("verificationDate") {
        check_date(&mut violations, "verificationDate", v);
    }

    violations
}

// =============================================================================
// TOKEN LIST SCHEMA
// =============================================================================

/// Validate the published token list document.
///
/// The list schema is open: only the enumerated fields are type-checked,
/// extra keys are tolerated. Address uniqueness is a cross-entry invariant
/// and is checked separately by the validator pipeline, not here.
pub fn validate_token_list(value: &Value) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    let Some(object) = value.as_object() else {
        violations.push(SchemaViolation::new("", "must be a JSON object"));
        return violations;
    };

    for key in LIST_REQUIRED_KEYS {
        if !object.contains_key(*key) {
            violations.push(SchemaViolation::new(*key, "required field is missing"));
        }
    }

    if let Some(v) = object.get("name") {
        check_string(&mut violations, "name", v);
    }
    if let Some(v) = object.get("version") {
        validate_version(&mut violations, v);
    }
    if let Some(v) = object.get("timestamp") {
        check_date_time(&mut violations, "timestamp", v);
    }
    if let Some(v) = object.get("tokens") {
        match v.as_array() {
            Some(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    validate_list_entry(&mut violations, index, entry);
                }
            }
            None => violations.push(SchemaViolation::new("tokens", "must be an array")),
        }
    }

    violations
}

fn validate_version(violations: &mut Vec<SchemaViolation>, value: &Value) {
    let Some(object) = value.as_object() else {
        violations.push(SchemaViolation::new("version", "must be a JSON object"));
        return;
    };

    for key in ["major", "minor", "patch"] {
        let path = format!("version.{}", key);
        match object.get(key) {
            Some(v) => check_whole_number(violations, &path, v, Some(0)),
            None => violations.push(SchemaViolation::new(path, "required field is missing")),
        }
    }
}

fn validate_list_entry(violations: &mut Vec<SchemaViolation>, index: usize, value: &Value) {
    let entry_path = format!("tokens[{}]", index);

    let Some(object) = value.as_object() else {
        violations.push(SchemaViolation::new(entry_path, "must be a JSON object"));
        return;
    };

    for key in ENTRY_REQUIRED_KEYS {
        if !object.contains_key(*key) {
            violations.push(
                SchemaViolation::new(format!("{}.{}", entry_path, key), "required field is missing")
            );
        }
    }

    for field in ["name", "symbol", "address", "logo", "verifiedBy"] {
        if let Some(v) = object.get(field) {
            check_string(violations, &format!("{}.{}", entry_path, field), v);
        }
    }
    if let Some(v) = object.get("decimals") {
        check_whole_number(violations, &format!("{}.decimals", entry_path), v, None);
    }
    if let Some(v) = object.get("tags") {
        check_string_array(violations, &format!("{}.tags", entry_path), v);
    }
    if let Some(v) = object.get("verified") {
        check_bool(violations, &format!("{}.verified", entry_path), v);
    }
}

// =============================================================================
// FIELD CHECKS
// =============================================================================

fn check_string(violations: &mut Vec<SchemaViolation>, path: &str, value: &Value) {
    if !value.is_string() {
        violations.push(SchemaViolation::new(path, "must be a string"));
    }
}

fn check_non_empty_string(violations: &mut Vec<SchemaViolation>, path: &str, value: &Value) {
    match value.as_str() {
        None => violations.push(SchemaViolation::new(path, "must be a string")),
        Some("") => violations.push(SchemaViolation::new(path, "must not be empty")),
        Some(_) => {}
    }
}

fn check_min_length(
    violations: &mut Vec<SchemaViolation>,
    path: &str,
    value: &Value,
    min: usize
) {
    match value.as_str() {
        None => violations.push(SchemaViolation::new(path, "must be a string")),
        Some(s) if s.chars().count() < min => {
            violations.push(
                SchemaViolation::new(
                    path,
                    format!("must be at least {} characters, got {}", min, s.chars().count())
                )
            );
        }
        Some(_) => {}
    }
}

/// Integer check matching JSON Schema `type: integer`: whole-number floats
/// pass, fractional numbers and non-numbers do not.
fn check_whole_number(
    violations: &mut Vec<SchemaViolation>,
    path: &str,
    value: &Value,
    minimum: Option<i64>
) {
    let Some(n) = as_whole_number(value) else {
        violations.push(SchemaViolation::new(path, "must be an integer"));
        return;
    };

    if let Some(min) = minimum {
        if n < min {
            violations.push(SchemaViolation::new(path, format!("must be at least {}", min)));
        }
    }
}

fn as_whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= (i64::MIN as f64) && f <= (i64::MAX as f64) => {
            Some(f as i64)
        }
        _ => None,
    }
}

fn check_bool(violations: &mut Vec<SchemaViolation>, path: &str, value: &Value) {
    if !value.is_boolean() {
        violations.push(SchemaViolation::new(path, "must be a boolean"));
    }
}

fn check_string_array(violations: &mut Vec<SchemaViolation>, path: &str, value: &Value) {
    let Some(items) = value.as_array() else {
        violations.push(SchemaViolation::new(path, "must be an array"));
        return;
    };

    for (index, item) in items.iter().enumerate() {
        if !item.is_string() {
            violations.push(
                SchemaViolation::new(format!("{}[{}]", path, index), "must be a string")
            );
        }
    }
}

fn check_uri(violations: &mut Vec<SchemaViolation>, path: &str, value: &Value) {
    match value.as_str() {
        None => violations.push(SchemaViolation::new(path, "must be a string")),
        Some(s) => {
            if Url::parse(s).is_err() {
                violations.push(SchemaViolation::new(path, "must be a valid URI"));
            }
        }
    }
}

fn check_date(violations: &mut Vec<SchemaViolation>, path: &str, value: &Value) {
    match value.as_str() {
        None => violations.push(SchemaViolation::new(path, "must be a string")),
        Some(s) => {
            if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
                violations.push(
                    SchemaViolation::new(path, "must be a date in YYYY-MM-DD format")
                );
            }
        }
    }
}

fn check_date_time(violations: &mut Vec<SchemaViolation>, path: &str, value: &Value) {
    match value.as_str() {
        None => violations.push(SchemaViolation::new(path, "must be a string")),
        Some(s) => {
            if DateTime::parse_from_rfc3339(s).is_err() {
                violations.push(
                    SchemaViolation::new(path, "must be an RFC 3339 date-time")
                );
            }
        }
    }
}
