//! Raster rendering and PNG export for generated pictures

use crate::algorithm::generator::Picture;
use crate::geometry::{Color, Line, Orientation};
use crate::io::error::{GenerationError, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

// Fill values match the classic palette: pure primaries plus black on a
// white ground.
const fn color_rgba(color: Color) -> Rgba<u8> {
    match color {
        Color::Red => Rgba([255, 0, 0, 255]),
        Color::Yellow => Rgba([255, 255, 0, 255]),
        Color::Blue => Rgba([0, 0, 255, 255]),
        Color::Black => Rgba([0, 0, 0, 255]),
        Color::White => Rgba([255, 255, 255, 255]),
    }
}

/// Rasterize a picture onto a white canvas
///
/// Colored cells are filled first, then the visible lines are stroked in
/// black on top, each centered on its fixed coordinate and clamped to the
/// canvas. White cells are left as background.
pub fn render(picture: &Picture, width: i32, height: i32) -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(
        width.max(0) as u32,
        height.max(0) as u32,
        color_rgba(Color::White),
    );

    for cell in &picture.rectangles {
        if cell.is_colored() {
            fill_region(
                &mut img,
                (cell.left, cell.top, cell.right, cell.bottom),
                color_rgba(cell.color),
            );
        }
    }

    for line in &picture.lines {
        if line.visible {
            fill_region(&mut img, stroke_region(line), color_rgba(Color::Black));
        }
    }

    img
}

// Stroke box centered on the fixed coordinate, butt-capped at the span
// ends, matching a stroked segment of the line's width.
const fn stroke_region(line: &Line) -> (i32, i32, i32, i32) {
    let near = line.position - line.stroke_width / 2;
    let far = near + line.stroke_width;

    match line.orientation {
        Orientation::Vertical => (near, line.span.0, far, line.span.1),
        Orientation::Horizontal => (line.span.0, near, line.span.1, far),
    }
}

fn fill_region(img: &mut RgbaImage, region: (i32, i32, i32, i32), pixel: Rgba<u8>) {
    let (left, top, right, bottom) = region;

    let x_start = left.max(0) as u32;
    let y_start = top.max(0) as u32;
    let x_end = (right.max(0) as u32).min(img.width());
    let y_end = (bottom.max(0) as u32).min(img.height());

    for y in y_start..y_end {
        for x in x_start..x_end {
            img.put_pixel(x, y, pixel);
        }
    }
}

/// Render a picture and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(picture: &Picture, width: i32, height: i32, output_path: &Path) -> Result<()> {
    let img = render(picture, width, height);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| GenerationError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
