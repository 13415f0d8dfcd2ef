//! Format constants for PCK archives.
//!
//! These values are part of the archive contract shared with the binary
//! codec and must not change once published.

/// Property key holding the archive's XML version marker.
pub const XML_VERSION_KEY: &str = "XMLVERSION";

/// Canonical path separator inside entry names.
pub const PATH_SEPARATOR: char = '/';

/// Separator rewritten to [`PATH_SEPARATOR`] on every name assignment.
pub const FOREIGN_PATH_SEPARATOR: char = '\\';

/// Highest asset kind discriminant defined by the format.
pub const MAX_ASSET_KIND: u32 = 14;

/// Format tag used when a container is built without an explicit one.
pub const DEFAULT_PCK_TYPE: i32 = 3;

/// Property keys documented as carrying a single value per entry.
pub const SINGLE_VALUED_KEYS: &[&str] = &[
    XML_VERSION_KEY,
    "DISPLAYNAME",
    "DISPLAYNAMEID",
    "THEMENAME",
    "THEMENAMEID",
    "ANIM",
    "GAME_FLAGS",
    "FREE",
    "CAPEPATH",
    "PACKID",
];
