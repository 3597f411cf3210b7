//! Line layout generation with spacing and distribution constraints

use crate::algorithm::generator::GeneratorConfig;
use crate::algorithm::random::RandomSource;
use crate::geometry::{Line, Orientation};
use crate::io::configuration::MIN_STROKE_WIDTH;
use crate::io::error::{GenerationError, Result, invalid_parameter};

/// Produces the dividing lines of one composition
///
/// The output always starts with the four invisible boundary lines (left,
/// top, right, bottom, in that order) followed by the requested number of
/// visible lines in generation order. Every visible line keeps a minimum
/// distance from its parallel neighbors and spans exactly between two
/// existing perpendicular lines, so the layout never contains a floating
/// segment.
pub struct LineGenerator {
    width: i32,
    height: i32,
    stroke_width: i32,
    config: GeneratorConfig,
}

impl LineGenerator {
    /// Create a generator with the default policy
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_config(width, height, GeneratorConfig::default())
    }

    /// Create a generator with an explicit policy
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas dimension is not positive.
    pub fn with_config(width: i32, height: i32, config: GeneratorConfig) -> Result<Self> {
        if width <= 0 {
            return Err(invalid_parameter(
                "width",
                &width,
                &"canvas width must be positive",
            ));
        }
        if height <= 0 {
            return Err(invalid_parameter(
                "height",
                &height,
                &"canvas height must be positive",
            ));
        }

        let stroke_width = (width / config.stroke_divisor).max(MIN_STROKE_WIDTH);

        Ok(Self {
            width,
            height,
            stroke_width,
            config,
        })
    }

    /// Stroke width shared by every line of the picture
    pub const fn stroke_width(&self) -> i32 {
        self.stroke_width
    }

    /// Generate the boundary lines plus `count` visible lines
    ///
    /// # Errors
    ///
    /// Returns an error when rejection sampling exhausts its attempt budget
    /// before finding a position that honors the spacing constraint, or
    /// when fewer than two perpendicular anchors cross a chosen position.
    pub fn generate(&self, count: usize, random: &mut RandomSource) -> Result<Vec<Line>> {
        let mut lines = self.boundary_lines();

        for placed in 0..count {
            let remaining = count - placed;
            let orientation = self.next_orientation(&lines, remaining, random);
            let position = self.next_position(&lines, orientation, random)?;
            let span = self.next_span(&lines, orientation, position, random)?;

            lines.push(Line::new(orientation, position, span, self.stroke_width, true));
        }

        Ok(lines)
    }

    // Left, top, right, bottom; the subdivision and anchor logic rely on
    // this fixed order and on the full-canvas spans.
    fn boundary_lines(&self) -> Vec<Line> {
        vec![
            Line::new(
                Orientation::Vertical,
                0,
                (0, self.height),
                self.stroke_width,
                false,
            ),
            Line::new(
                Orientation::Horizontal,
                0,
                (0, self.width),
                self.stroke_width,
                false,
            ),
            Line::new(
                Orientation::Vertical,
                self.width,
                (0, self.height),
                self.stroke_width,
                false,
            ),
            Line::new(
                Orientation::Horizontal,
                self.height,
                (0, self.width),
                self.stroke_width,
                false,
            ),
        ]
    }

    /// Choose the next line's orientation
    ///
    /// Near the end of generation an orientation still below its minimum
    /// count is forced, horizontal checked first; otherwise a fair coin
    /// decides. This keeps a composition with enough lines from ending up
    /// all-horizontal or all-vertical.
    fn next_orientation(
        &self,
        lines: &[Line],
        remaining: usize,
        random: &mut RandomSource,
    ) -> Orientation {
        let visible = |orientation: Orientation| {
            lines
                .iter()
                .filter(|line| line.visible && line.orientation == orientation)
                .count()
        };

        if remaining <= self.config.min_horizontal_lines
            && visible(Orientation::Horizontal) < self.config.min_horizontal_lines
        {
            return Orientation::Horizontal;
        }

        if remaining <= self.config.min_vertical_lines
            && visible(Orientation::Vertical) < self.config.min_vertical_lines
        {
            return Orientation::Vertical;
        }

        if random.coin_flip() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Rejection-sample a fixed coordinate honoring the spacing constraint
    fn next_position(
        &self,
        lines: &[Line],
        orientation: Orientation,
        random: &mut RandomSource,
    ) -> Result<i32> {
        let extent = match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        };

        let taken: Vec<i32> = lines
            .iter()
            .filter(|line| line.orientation == orientation)
            .map(|line| line.position)
            .collect();

        let min_spacing = self.stroke_width * self.config.spacing_factor;

        for _ in 0..self.config.max_placement_attempts {
            let candidate = random.below(extent);
            if taken
                .iter()
                .all(|&position| (position - candidate).abs() >= min_spacing)
            {
                return Ok(candidate);
            }
        }

        Err(GenerationError::LinePlacement {
            orientation,
            attempts: self.config.max_placement_attempts,
        })
    }

    /// Span the new line between two distinct perpendicular anchors
    ///
    /// Anchors are existing opposite-orientation lines whose span contains
    /// the chosen position. With the boundary lines present there are
    /// always at least two; the error path covers pathological inputs
    /// rather than looping forever.
    fn next_span(
        &self,
        lines: &[Line],
        orientation: Orientation,
        position: i32,
        random: &mut RandomSource,
    ) -> Result<(i32, i32)> {
        let anchors: Vec<i32> = lines
            .iter()
            .filter(|line| line.orientation != orientation && line.spans(position))
            .map(|line| line.position)
            .collect();

        if anchors.len() < 2 {
            return Err(GenerationError::AnchorSelection {
                orientation,
                position,
                available: anchors.len(),
            });
        }

        let first = random.pick(&anchors).copied().unwrap_or(0);
        for _ in 0..self.config.max_placement_attempts {
            let second = random.pick(&anchors).copied().unwrap_or(first);
            if second != first {
                return Ok((first.min(second), first.max(second)));
            }
        }

        Err(GenerationError::AnchorSelection {
            orientation,
            position,
            available: anchors.len(),
        })
    }
}
