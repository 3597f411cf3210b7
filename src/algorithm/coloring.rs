//! Constrained color assignment over subdivided cells

use crate::algorithm::generator::GeneratorConfig;
use crate::algorithm::random::RandomSource;
use crate::geometry::{Color, Rect};

/// Colors every cell may receive; black is gated on cell size
const PRIMARY_PALETTE: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

/// Assign fill colors to a random subset of cells
///
/// Draws a target count from the configured range, then colors one
/// candidate at a time. A candidate must be uncolored, must not share an
/// edge with any colored cell, and must not cover the whole canvas. Black
/// joins the palette only for cells below the configured fraction of the
/// canvas area. Each assignment picks uniformly among the currently
/// least-used allowed colors, keeping the classes balanced across the
/// picture.
///
/// Running out of candidates before the target is reached is expected, not
/// an error; the pass simply stops early.
pub fn assign_colors(
    cells: &mut [Rect],
    canvas_area: i64,
    config: &GeneratorConfig,
    random: &mut RandomSource,
) {
    let (low, high) = config.colored_cell_range;
    let target = random.between(low, high);

    for _ in 0..target {
        let candidates = color_candidates(cells, canvas_area);
        let Some(&index) = random.pick(&candidates) else {
            break;
        };

        let area = cells.get(index).map_or(0, Rect::area);
        let allowed = allowed_palette(area, canvas_area, config.black_area_divisor);
        let color = least_used_color(cells, &allowed, random);

        if let Some(cell) = cells.get_mut(index) {
            cell.color = color;
        }
    }
}

// A cell spanning the entire canvas is never colored; that only happens in
// the no-subdivision case, which must stay a plain white field.
fn color_candidates(cells: &[Rect], canvas_area: i64) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.is_colored() && cell.area() < canvas_area)
        .filter(|(_, cell)| {
            !cells
                .iter()
                .any(|other| other.is_colored() && cell.has_common_edge_with(other))
        })
        .map(|(index, _)| index)
        .collect()
}

fn allowed_palette(area: i64, canvas_area: i64, black_area_divisor: i64) -> Vec<Color> {
    let mut palette = PRIMARY_PALETTE.to_vec();
    if area < canvas_area / black_area_divisor {
        palette.push(Color::Black);
    }
    palette
}

/// Uniform pick among the allowed colors with minimum current usage
fn least_used_color(cells: &[Rect], allowed: &[Color], random: &mut RandomSource) -> Color {
    let usage =
        |color: Color| cells.iter().filter(|cell| cell.color == color).count();

    let minimum = allowed.iter().map(|&color| usage(color)).min().unwrap_or(0);
    let least_used: Vec<Color> = allowed
        .iter()
        .copied()
        .filter(|&color| usage(color) == minimum)
        .collect();

    random.pick(&least_used).copied().unwrap_or(Color::Red)
}
