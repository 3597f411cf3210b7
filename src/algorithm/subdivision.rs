//! Canvas subdivision by iterative cropping

use crate::geometry::{Line, Rect};

/// Split the canvas into cells along the given lines
///
/// Starts from a single full-canvas cell and applies every line exactly
/// once, in list order, boundary lines first. During one line's pass only
/// the pre-existing cells are tested; pieces cropped off join the working
/// set after the pass, so no cell meets the same line twice. Degenerate
/// pieces are dropped immediately.
///
/// The result is a lossless partition: cell areas always sum to
/// `width * height`.
pub fn subdivide(width: i32, height: i32, lines: &[Line]) -> Vec<Rect> {
    let mut cells = vec![Rect::new(0, 0, width, height)];

    for line in lines {
        let mut pieces = Vec::new();

        for cell in &mut cells {
            if let Some(piece) = cell.crop(line) {
                if !piece.is_empty() {
                    pieces.push(piece);
                }
            }
        }

        cells.append(&mut pieces);
        cells.retain(|cell| !cell.is_empty());
    }

    cells
}
