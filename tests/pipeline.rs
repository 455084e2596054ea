/// End-to-end build + validate over temporary directories.
use std::fs;
use std::path::Path;

use serde_json::{ json, Value };

use tokenlist::builder;
use tokenlist::global::{ LIST_VERSION, TOKEN_LIST_NAME };
use tokenlist::tokens::types::TokenList;
use tokenlist::validator;

fn write_record(dir: &Path, file: &str, symbol: &str, address: &str) {
    let record = json!({
        "name": format!("{} Token", symbol),
        "symbol": symbol,
        "address": address,
        "decimals": 9,
        "description": format!("The {} token", symbol),
        "logo": format!("https://example.org/logos/{}.png", symbol),
        "website": "https://example.org",
        "verified": true,
        "verifiedBy": "Example Foundation"
    });
    fs::write(dir.join(file), serde_json::to_string_pretty(&record).unwrap()).unwrap();
}

#[test]
fn test_build_sorts_by_symbol_and_keeps_cardinality() {
    let workspace = tempfile::tempdir().unwrap();
    let tokens_dir = workspace.path().join("tokens");
    fs::create_dir(&tokens_dir).unwrap();
    let output = workspace.path().join("tokens.json");

    write_record(&tokens_dir, "zzz.json", "ZZZ", "ZzzAddress111111111111111111111111111111111");
    write_record(&tokens_dir, "aaa.json", "AAA", "AaaAddress111111111111111111111111111111111");
    write_record(&tokens_dir, "mmm.json", "MMM", "MmmAddress111111111111111111111111111111111");

    let list = builder::build_token_list(&tokens_dir, &output).unwrap();

    assert_eq!(list.name, TOKEN_LIST_NAME);
    assert_eq!(list.version, LIST_VERSION);
    assert_eq!(list.tokens.len(), 3);

    let symbols: Vec<&str> = list.tokens
        .iter()
        .map(|entry| entry.symbol.as_deref().unwrap())
        .collect();
    assert_eq!(symbols, vec!["AAA", "MMM", "ZZZ"]);

    // The written document matches what was returned.
    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["tokens"].as_array().unwrap().len(), 3);
    assert_eq!(written["version"], json!({ "major": 1, "minor": 0, "patch": 0 }));
}

#[test]
fn test_build_output_has_no_private_fields() {
    let workspace = tempfile::tempdir().unwrap();
    let tokens_dir = workspace.path().join("tokens");
    fs::create_dir(&tokens_dir).unwrap();
    let output = workspace.path().join("tokens.json");

    write_record(&tokens_dir, "exm.json", "EXM", "ExmAddress111111111111111111111111111111111");

    builder::build_token_list(&tokens_dir, &output).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let entry = written["tokens"][0].as_object().unwrap();
    assert!(!entry.contains_key("description"));
    assert!(!entry.contains_key("website"));
    assert_eq!(entry["tags"], json!([]));
}

#[test]
fn test_unparsable_record_aborts_without_output() {
    let workspace = tempfile::tempdir().unwrap();
    let tokens_dir = workspace.path().join("tokens");
    fs::create_dir(&tokens_dir).unwrap();
    let output = workspace.path().join("tokens.json");

    write_record(&tokens_dir, "good.json", "GOOD", "GoodAddress11111111111111111111111111111111");
    fs::write(tokens_dir.join("broken.json"), "{ not json").unwrap();

    let result = builder::build_token_list(&tokens_dir, &output);
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_build_then_validate_is_clean() {
    let workspace = tempfile::tempdir().unwrap();
    let tokens_dir = workspace.path().join("tokens");
    fs::create_dir(&tokens_dir).unwrap();
    let output = workspace.path().join("tokens.json");

    write_record(&tokens_dir, "aaa.json", "AAA", "AaaAddress111111111111111111111111111111111");
    write_record(&tokens_dir, "bbb.json", "BBB", "BbbAddress111111111111111111111111111111111");

    builder::build_token_list(&tokens_dir, &output).unwrap();

    let report = validator::validate_all(&tokens_dir, &output).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.records_checked, 2);
    assert_eq!(report.duplicate_addresses, 0);
}

#[test]
fn test_duplicate_addresses_fail_validation() {
    let workspace = tempfile::tempdir().unwrap();
    let tokens_dir = workspace.path().join("tokens");
    fs::create_dir(&tokens_dir).unwrap();
    let output = workspace.path().join("tokens.json");

    let shared = "SharedAddress111111111111111111111111111111";
    write_record(&tokens_dir, "aaa.json", "AAA", shared);
    write_record(&tokens_dir, "bbb.json", "BBB", shared);

    builder::build_token_list(&tokens_dir, &output).unwrap();

    let report = validator::validate_all(&tokens_dir, &output).unwrap();
    assert!(!report.is_clean());
    assert_eq!(report.duplicate_addresses, 1);
    assert_eq!(report.records_failed, 0);
}

#[test]
fn test_list_round_trip_preserves_structure() {
    let workspace = tempfile::tempdir().unwrap();
    let tokens_dir = workspace.path().join("tokens");
    fs::create_dir(&tokens_dir).unwrap();
    let output = workspace.path().join("tokens.json");

    write_record(&tokens_dir, "exm.json", "EXM", "ExmAddress111111111111111111111111111111111");

    let list = builder::build_token_list(&tokens_dir, &output).unwrap();

    let serialized = serde_json::to_string_pretty(&list).unwrap();
    let reparsed: TokenList = serde_json::from_str(&serialized).unwrap();
    assert_eq!(reparsed, list);

    // Field order survives a serialize/parse/serialize cycle.
    assert_eq!(serde_json::to_string_pretty(&reparsed).unwrap(), serialized);
}
