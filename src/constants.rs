//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers and placeholder strings so they are discoverable.

/// Number of body characters copied into the preview of a submitted draft.
pub const PREVIEW_LENGTH: usize = 120;

/// Subject used when a draft is submitted without one.
pub const NO_SUBJECT: &str = "(No subject)";

/// Preview used when a draft is submitted with an empty body.
pub const EMPTY_PREVIEW: &str = "Empty message";

/// Tag applied to submitted drafts that carry no tags of their own.
pub const DEFAULT_OUTBOUND_TAG: &str = "outbound";

/// Error message display duration in seconds before auto-dismiss.
pub const ERROR_TTL_SECS: u64 = 5;

/// Input poll interval for the event loop in milliseconds.
pub const INPUT_POLL_MS: u64 = 200;

// === UI Constants ===

/// Minimum terminal width to show the detail pane next to the list.
pub const MIN_SPLIT_VIEW_WIDTH: u16 = 80;

/// Fixed width of the folder sidebar pane in columns.
pub const FOLDER_SIDEBAR_WIDTH: u16 = 20;

/// Minimum terminal width to show the folder sidebar with split view.
pub const MIN_SIDEBAR_VIEW_WIDTH: u16 = 100;

/// Minimum split ratio percentage for the list/detail split.
pub const SPLIT_RATIO_MIN: u16 = 30;

/// Maximum split ratio percentage for the list/detail split.
pub const SPLIT_RATIO_MAX: u16 = 70;

/// Lines the detail pane moves per scroll keypress.
pub const DETAIL_SCROLL_STEP: u16 = 3;

/// Target scroll position as fraction of visible area (1/N from top).
pub const SCROLL_TARGET_FRACTION: usize = 4;

/// Width of the compose drawer as a percentage of the terminal width.
pub const COMPOSE_DRAWER_PERCENT: u16 = 55;

/// Minimum width of the compose drawer in columns.
pub const COMPOSE_DRAWER_MIN_WIDTH: u16 = 40;
