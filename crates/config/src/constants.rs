//! Centralized constants for the `.tide` format.
//!
//! Keeps the literal tokens of the grammar in one place so the scanner,
//! import resolver and validator agree on them.

// =============================================================================
// File & Import Syntax
// =============================================================================

/// File extension of the format, without the leading dot.
pub const FILE_EXTENSION: &str = "tide";

/// Leading token of an import directive.
pub const IMPORT_KEYWORD: &str = "import";

/// Suffix that marks a block-open line (`name {`).
pub const BLOCK_OPEN_SUFFIX: &str = " {";

/// A block-close line consists of exactly this text.
pub const BLOCK_CLOSE: &str = "}";

/// First non-whitespace character of a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Separator between segments of a dotted key.
pub const KEY_SEPARATOR: char = '.';

// =============================================================================
// Type Tags
// =============================================================================

/// Tag for free-form text values.
pub const TAG_STRING: &str = "string";

/// Tag for base-10 integer values.
pub const TAG_INTEGER: &str = "integer";

/// Tag for boolean values.
pub const TAG_BOOL: &str = "bool";

/// Tag for arrays; optionally followed by `[elementType]`.
pub const TAG_ARRAY: &str = "array";

/// Tag recorded for array values produced by an environment override.
pub const TAG_STRING_ARRAY: &str = "array[string]";

// =============================================================================
// Environment
// =============================================================================

/// Key-name substring that makes an environment override an array under
/// [`ArrayOverride::KeyName`](crate::ArrayOverride::KeyName).
pub const ARRAY_KEY_MARKER: &str = "array";

/// Separator between elements of an array-valued environment override.
pub const ENV_ARRAY_SEPARATOR: char = ',';

/// Setting this variable to `1` or `true` disables `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
