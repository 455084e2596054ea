/// Core types for the token list system
use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

// ============================================================================
// TOKEN RECORD - One per file in the tokens directory
// ============================================================================

/// A single per-token record as authored in the tokens directory.
///
/// Every field is optional at parse time. Whether a field is *required* is a
/// schema concern and is checked by the validator against the raw JSON, so a
/// record with missing fields still parses here and the build carries the
/// absent fields through as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub address: Option<String>,
    pub decimals: Option<u32>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub discord: Option<String>,
    pub telegram: Option<String>,
    pub tags: Option<Vec<String>>,
    pub verified: Option<bool>,
    pub verified_by: Option<String>,
    pub verification_date: Option<String>,
}

// ============================================================================
// TOKEN LIST ENTRY - Reduced projection published in the list
// ============================================================================

/// The reduced projection of a [`TokenRecord`] inside the published list.
///
/// Carries only the public fields. `description`, social links and the
/// verification date are dropped during projection. Absent fields serialize
/// as absent keys, never as `null`; `tags` always serializes, defaulting to
/// an empty array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,
}

impl From<TokenRecord> for TokenListEntry {
    fn from(record: TokenRecord) -> Self {
        Self {
            name: record.name,
            symbol: record.symbol,
            address: record.address,
            decimals: record.decimals,
            logo: record.logo,
            tags: record.tags.unwrap_or_default(),
            verified: record.verified,
            verified_by: record.verified_by,
        }
    }
}

impl TokenListEntry {
    /// Symbol for display in progress output.
    pub fn display_symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or("<unknown>")
    }
}

// ============================================================================
// TOKEN LIST - The single published document
// ============================================================================

/// Semantic version stamped on the published list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl std::fmt::Display for ListVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The aggregate token list combining all records into one sorted index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenList {
    pub name: String,
    pub version: ListVersion,
    pub timestamp: DateTime<Utc>,
    pub tokens: Vec<TokenListEntry>,
}
