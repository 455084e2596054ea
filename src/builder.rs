/// Token list aggregation.
///
/// Reads every record in the tokens directory, projects each into its
/// published entry, sorts by symbol, and writes the single index document.
/// A single malformed record aborts the whole build before anything is
/// written.
use std::cmp::Ordering;
use std::path::Path;

use chrono::Utc;

use crate::errors::TokenListError;
use crate::global::{ LIST_VERSION, TOKEN_LIST_NAME };
use crate::logger::Logger;
use crate::tokens::store;
use crate::tokens::types::{ TokenList, TokenListEntry };

/// Build the aggregate token list from `tokens_dir` and write it to
/// `output`, overwriting any previous list.
pub fn build_token_list(tokens_dir: &Path, output: &Path) -> Result<TokenList, TokenListError> {
    let files = store::list_record_files(tokens_dir)?;

    Logger::info("Building token list from individual token files...");

    let mut entries: Vec<TokenListEntry> = Vec::with_capacity(files.len());
    for path in &files {
        let record = store::load_record(path)?;
        let entry = TokenListEntry::from(record);
        Logger::success(&format!("Added {} to token list", entry.display_symbol()));
        entries.push(entry);
    }

    sort_entries(&mut entries);

    let list = TokenList {
        name: TOKEN_LIST_NAME.to_string(),
        version: LIST_VERSION,
        timestamp: Utc::now(),
        tokens: entries,
    };

    store::write_token_list(output, &list)?;
    Logger::success(&format!("Token list built successfully with {} tokens", list.tokens.len()));

    Ok(list)
}

/// Stable sort of entries ascending by symbol. Entries with equal symbols
/// keep their encounter order.
pub fn sort_entries(entries: &mut [TokenListEntry]) {
    entries.sort_by(|a, b| {
        symbol_ordering(a.symbol.as_deref().unwrap_or(""), b.symbol.as_deref().unwrap_or(""))
    });
}

/// Locale-style symbol comparison: case-insensitive primary ordering, with
/// lowercase sorting before uppercase on a case-only tie.
pub fn symbol_ordering(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str, address: &str) -> TokenListEntry {
        TokenListEntry {
            name: Some(format!("{} Token", symbol)),
            symbol: Some(symbol.to_string()),
            address: Some(address.to_string()),
            decimals: Some(9),
            logo: None,
            tags: Vec::new(),
            verified: Some(true),
            verified_by: None,
        }
    }

    fn symbols(entries: &[TokenListEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.symbol.as_deref().unwrap()).collect()
    }

    #[test]
    fn test_sort_ascending_by_symbol() {
        let mut entries = vec![entry("ZZZ", "a1"), entry("AAA", "a2"), entry("MMM", "a3")];
        sort_entries(&mut entries);
        assert_eq!(symbols(&entries), vec!["AAA", "MMM", "ZZZ"]);
    }

    #[test]
    fn test_sort_is_case_insensitive_first() {
        let mut entries = vec![entry("ABD", "a1"), entry("abc", "a2")];
        sort_entries(&mut entries);
        assert_eq!(symbols(&entries), vec!["abc", "ABD"]);
    }

    #[test]
    fn test_case_only_tie_puts_lowercase_first() {
        let mut entries = vec![entry("AAA", "a1"), entry("aaa", "a2")];
        sort_entries(&mut entries);
        assert_eq!(symbols(&entries), vec!["aaa", "AAA"]);
    }

    #[test]
    fn test_equal_symbols_keep_encounter_order() {
        let mut entries = vec![entry("SAME", "first"), entry("SAME", "second")];
        sort_entries(&mut entries);
        assert_eq!(entries[0].address.as_deref(), Some("first"));
        assert_eq!(entries[1].address.as_deref(), Some("second"));
    }

    #[test]
    fn test_missing_symbol_sorts_first() {
        let mut entries = vec![entry("AAA", "a1"), entry("", "a2")];
        entries[1].symbol = None;
        sort_entries(&mut entries);
        assert_eq!(entries[0].symbol, None);
    }
}
