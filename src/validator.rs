/// Validation pipeline.
///
/// Checks every record against the record schema, the published list against
/// the list schema, and the address uniqueness invariant across list entries.
/// Findings are printed as they are discovered and accumulated in a
/// run-scoped [`ValidationReport`]; no failure stops the run early, except
/// that a document that fails to parse skips its own remaining checks.
use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::errors::TokenListError;
use crate::logger::Logger;
use crate::tokens::schema;
use crate::tokens::store;

// =============================================================================
// RUN-SCOPED REPORT
// =============================================================================

/// Outcome of a validation run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub records_checked: usize,
    pub records_failed: usize,
    pub duplicate_addresses: usize,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn record_error(&mut self, message: String) {
        Logger::error(&message);
        self.errors.push(message);
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Run every check: per-record schemas, the list schema, and address
/// uniqueness. Errors only when the tokens directory itself cannot be
/// listed; all findings land in the returned report.
pub fn validate_all(
    tokens_dir: &Path,
    list_path: &Path
) -> Result<ValidationReport, TokenListError> {
    let mut report = ValidationReport::default();
    validate_records(tokens_dir, &mut report)?;
    validate_list(list_path, &mut report);
    Ok(report)
}

/// Validate every record file in the tokens directory against the record
/// schema, accumulating findings without stopping at the first failure.
pub fn validate_records(
    tokens_dir: &Path,
    report: &mut ValidationReport
) -> Result<(), TokenListError> {
    Logger::info("Validating individual token files...");

    for path in store::list_record_files(tokens_dir)? {
        let file = store::file_label(&path);
        report.records_checked += 1;

        let value = match store::load_record_value(&path) {
            Ok(value) => value,
            Err(e) => {
                report.records_failed += 1;
                report.record_error(e.to_string());
                continue;
            }
        };

        let violations = schema::validate_token_record(&value);
        if violations.is_empty() {
            Logger::success(&format!("{} is valid", file));
        } else {
            report.records_failed += 1;
            for violation in violations {
                report.record_error(format!("{} validation failed: {}", file, violation));
            }
        }
    }

    Ok(())
}

/// Validate the published list. A parse failure records an error and skips
/// the uniqueness pass, since there is no listing to check.
pub fn validate_list(list_path: &Path, report: &mut ValidationReport) {
    Logger::info("Validating main token list...");

    let value = match store::load_list_value(list_path) {
        Ok(value) => value,
        Err(e) => {
            report.record_error(e.to_string());
            return;
        }
    };

    let file = store::file_label(list_path);
    let violations = schema::validate_token_list(&value);
    if !violations.is_empty() {
        for violation in violations {
            report.record_error(format!("{} validation failed: {}", file, violation));
        }
        return;
    }

    Logger::success(&format!("{} is valid", file));
    check_unique_addresses(&value, report);
}

/// Cross-entry invariant: one duplicate error per repeated occurrence of an
/// address beyond the first.
fn check_unique_addresses(list: &Value, report: &mut ValidationReport) {
    let Some(entries) = list.get("tokens").and_then(Value::as_array) else {
        return;
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for entry in entries {
        let Some(address) = entry.get("address").and_then(Value::as_str) else {
            continue;
        };
        if seen.contains(address) {
            let symbol = entry
                .get("symbol")
                .and_then(Value::as_str)
                .unwrap_or("<unknown>");
            report.duplicate_addresses += 1;
            report.record_error(
                format!("Duplicate token address found: {} ({})", address, symbol)
            );
        } else {
            seen.insert(address);
        }
    }

    if report.duplicate_addresses == 0 {
        Logger::success("All token addresses are unique");
    }
}
