//! Policy constants and runtime configuration defaults

// Line placement policy
/// Canvas width is divided by this to derive the stroke width
pub const STROKE_DIVISOR: i32 = 50;
/// Lower bound on the derived stroke width
pub const MIN_STROKE_WIDTH: i32 = 1;
/// Multiple of the stroke width kept clear around each line
pub const SPACING_FACTOR: i32 = 5;
/// Visible horizontal lines guaranteed when enough lines are requested
pub const MIN_HORIZONTAL_LINES: usize = 3;
/// Visible vertical lines guaranteed when enough lines are requested
pub const MIN_VERTICAL_LINES: usize = 2;

// Coloring policy
/// Inclusive range of cells that receive a fill color
pub const COLORED_CELL_RANGE: (usize, usize) = (3, 5);
/// Black fills are restricted to cells below canvas area / this
pub const BLACK_AREA_DIVISOR: i64 = 16;

// Safety cap so pathological inputs fail instead of hanging
/// Maximum rejection-sampling attempts per placement decision
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

// Default values for configurable parameters
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: i32 = 1080;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: i32 = 1920;
/// Inclusive range the visible line count is drawn from when unspecified
pub const DEFAULT_LINE_RANGE: (usize, usize) = (3, 7);
