//! Centralized constants for file discovery and parsing.

// =============================================================================
// File Discovery
// =============================================================================

/// Extension (without the dot, compared case-insensitively) that selects the JSON parser.
pub const JSON_EXTENSION: &str = "json";

// =============================================================================
// Dotenv Syntax
// =============================================================================

/// Separator between key and value on an assignment line.
pub const ASSIGNMENT_SEPARATOR: char = '=';

/// Marker that introduces a full-line comment.
pub const COMMENT_MARKER: char = '#';

/// Marker that introduces a variable reference inside a value.
pub const EXPANSION_MARKER: char = '$';

/// Quote characters recognised around a whole value.
pub const QUOTE_CHARS: [char; 2] = ['\'', '"'];

// =============================================================================
// JSON Stringification
// =============================================================================

/// Rendering of JSON `true` at the top level of an object.
pub const JSON_TRUE: &str = "True";

/// Rendering of JSON `false` at the top level of an object.
pub const JSON_FALSE: &str = "False";

/// Rendering of JSON `null` at the top level of an object.
pub const JSON_NULL: &str = "None";
