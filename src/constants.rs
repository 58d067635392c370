//! Statechart-wide constants.
//!
//! Centralizes magic strings and tool defaults so descriptors, settings and
//! tools agree on them.

// ============================================================================
// Paths
// ============================================================================

/// Separator between ids in a transition path (`"select.translating"`)
pub const PATH_SEPARATOR: char = '.';

/// `from` id reported to `on_enter` when the parent had no previous child
pub const INITIAL_FROM_ID: &str = "initial";

// ============================================================================
// Tool Tree Ids
// ============================================================================

/// Root of the editor tool tree
pub const EDITOR_STATE_ID: &str = "editor";

/// Select tool and its sub-states
pub const SELECT_TOOL_ID: &str = "select";
pub const POINTING_STATE_ID: &str = "pointing";
pub const TRANSLATING_STATE_ID: &str = "translating";

/// Pen tool and its sub-states
pub const PEN_TOOL_ID: &str = "pen";
pub const DRAWING_STATE_ID: &str = "drawing";

/// Resting sub-state shared by every tool
pub const IDLE_STATE_ID: &str = "idle";

// ============================================================================
// Keyboard
// ============================================================================

/// Shortcut that activates the select tool
pub const SELECT_TOOL_SHORTCUT: &str = "v";

/// Shortcut that activates the pen tool
pub const PEN_TOOL_SHORTCUT: &str = "p";

/// Key that abandons the current tool gesture
pub const ESCAPE_KEY: &str = "Escape";

// ============================================================================
// Pen Defaults
// ============================================================================

/// Interval between flushes of buffered pen samples, in milliseconds
pub const PEN_FLUSH_INTERVAL_MS: f64 = 50.0;

/// Distance below which consecutive stroke points are merged on finish
pub const PEN_SIMPLIFY_TOLERANCE: f64 = 1.5;

/// Default stroke color
pub const DEFAULT_STROKE_COLOR: &str = "#2196F3";

/// Default stroke thickness
pub const DEFAULT_STROKE_THICKNESS: f64 = 3.0;

// ============================================================================
// Select Defaults
// ============================================================================

/// Minimum pointer travel before a press turns into a translation
pub const SELECT_DRAG_THRESHOLD: f64 = 4.0;
