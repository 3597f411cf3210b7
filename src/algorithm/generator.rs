//! End-to-end picture generation and policy configuration

use crate::algorithm::coloring::assign_colors;
use crate::algorithm::lines::LineGenerator;
use crate::algorithm::random::RandomSource;
use crate::algorithm::subdivision::subdivide;
use crate::geometry::{Line, Rect};
use crate::io::configuration::{
    BLACK_AREA_DIVISOR, COLORED_CELL_RANGE, MAX_PLACEMENT_ATTEMPTS, MIN_HORIZONTAL_LINES,
    MIN_VERTICAL_LINES, SPACING_FACTOR, STROKE_DIVISOR,
};
use crate::io::error::Result;

/// Policy parameters controlling line placement and coloring
///
/// The defaults come from [`crate::io::configuration`]; every field is a
/// tunable policy choice, not a fixed law of the algorithm.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Canvas width is divided by this to derive the stroke width
    pub stroke_divisor: i32,
    /// Multiple of the stroke width kept clear around each line
    pub spacing_factor: i32,
    /// Visible horizontal lines guaranteed when enough lines are requested
    pub min_horizontal_lines: usize,
    /// Visible vertical lines guaranteed when enough lines are requested
    pub min_vertical_lines: usize,
    /// Inclusive range of cells that receive a fill color
    pub colored_cell_range: (usize, usize),
    /// Black fills are restricted to cells below canvas area / this
    pub black_area_divisor: i64,
    /// Retry cap for rejection-sampled placement decisions
    pub max_placement_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            stroke_divisor: STROKE_DIVISOR,
            spacing_factor: SPACING_FACTOR,
            min_horizontal_lines: MIN_HORIZONTAL_LINES,
            min_vertical_lines: MIN_VERTICAL_LINES,
            colored_cell_range: COLORED_CELL_RANGE,
            black_area_divisor: BLACK_AREA_DIVISOR,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Result of one generation run
///
/// The cells partition the canvas exactly; `lines` holds the visible lines
/// only, in generation order, ready to be stroked over the filled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// Canvas cells, a subset of which carry a fill color
    pub rectangles: Vec<Rect>,
    /// Visible dividing lines
    pub lines: Vec<Line>,
}

/// One-shot generator for Mondrian-style pictures
///
/// Owns the seeded random source, so a fixed seed reproduces the same
/// picture exactly. Each call is self-contained; nothing is shared across
/// invocations.
pub struct PictureGenerator {
    config: GeneratorConfig,
    random: RandomSource,
}

impl PictureGenerator {
    /// Create a generator with the default policy
    pub fn new(seed: u64) -> Self {
        Self::with_config(GeneratorConfig::default(), seed)
    }

    /// Create a generator with an explicit policy
    pub fn with_config(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            random: RandomSource::from_seed(seed),
        }
    }

    /// Draw a visible line count from an inclusive range
    ///
    /// Callers that do not fix the count use this so the draw flows through
    /// the same seeded source as the rest of the run.
    pub fn line_count_in(&mut self, range: (usize, usize)) -> usize {
        self.random.between(range.0, range.1)
    }

    /// Generate the line layout alone
    ///
    /// Returns the four invisible boundary lines followed by
    /// `visible_lines` visible lines.
    ///
    /// # Errors
    ///
    /// Returns an error if a canvas dimension is not positive, or if line
    /// placement cannot satisfy the spacing or anchor constraints within
    /// the attempt budget.
    pub fn generate_lines(
        &mut self,
        width: i32,
        height: i32,
        visible_lines: usize,
    ) -> Result<Vec<Line>> {
        LineGenerator::with_config(width, height, self.config)?
            .generate(visible_lines, &mut self.random)
    }

    /// Generate a complete picture
    ///
    /// Runs the full pipeline: line layout, subdivision into cells, and
    /// constrained color assignment.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as
    /// [`Self::generate_lines`]; subdivision and coloring cannot fail.
    pub fn generate_picture(
        &mut self,
        width: i32,
        height: i32,
        visible_lines: usize,
    ) -> Result<Picture> {
        let lines = self.generate_lines(width, height, visible_lines)?;

        let mut rectangles = subdivide(width, height, &lines);
        let canvas_area = i64::from(width) * i64::from(height);
        assign_colors(&mut rectangles, canvas_area, &self.config, &mut self.random);

        let lines = lines.into_iter().filter(|line| line.visible).collect();

        Ok(Picture { rectangles, lines })
    }
}
