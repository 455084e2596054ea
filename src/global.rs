use crate::tokens::types::ListVersion;

/// Directory containing the per-token record files, relative to the
/// repository root.
pub const TOKENS_DIR: &str = "tokens";

/// Published token list, relative to the repository root.
pub const TOKEN_LIST_FILE: &str = "tokens.json";

/// File extension of per-token record files.
pub const RECORD_EXTENSION: &str = "json";

/// Display name embedded in the published token list.
pub const TOKEN_LIST_NAME: &str = "Verified Token List";

/// Version stamped on every build of the token list.
pub const LIST_VERSION: ListVersion = ListVersion {
    major: 1,
    minor: 0,
    patch: 0,
};
