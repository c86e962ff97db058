//! Software rasterizer for headless pattern rendering.
//!
//! Executes a `DisplayList` to an RGBA pixel buffer.
//!
//! # Architecture
//!
//! The rasterizer is the final stage of the pipeline:
//!
//! ```text
//! Properties → Paint → Render
//!                ↓        ↓
//!          DisplayList → Pixels
//! ```
//!
//! The rasterizer knows nothing about paint sources or properties. It simply
//! executes drawing commands from the display list: translucent fills are
//! source-over composited, which is what makes the overlapping full-height
//! stripes of the circles-in-squares pattern build up their layered look.

use anyhow::Result;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use stipple_paint::{ColorValue, DisplayCommand, DisplayList};

/// Software renderer that executes a display list to a pixel buffer.
///
/// Stateless with respect to the paint model - it only knows how to fill
/// rectangles and circles with alpha blending.
pub struct Renderer {
    /// RGBA pixel buffer
    buffer: RgbaImage,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl Renderer {
    /// Create a renderer with a white canvas of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, &ColorValue::WHITE)
    }

    /// Create a renderer with a solid background color.
    #[must_use]
    pub fn with_background(width: u32, height: u32, background: &ColorValue) -> Self {
        let pixel = Rgba([background.r, background.g, background.b, background.a]);
        Self {
            buffer: ImageBuffer::from_pixel(width, height, pixel),
            width,
            height,
        }
    }

    /// Get the pixel buffer.
    #[must_use]
    pub const fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Execute a display list, drawing all commands to the pixel buffer.
    ///
    /// Commands are executed in order (back to front), which is the painting
    /// order established by the painter.
    pub fn render(&mut self, display_list: &DisplayList) {
        for command in display_list.commands() {
            self.execute_command(command);
        }
    }

    /// Execute a single display command.
    fn execute_command(&mut self, command: &DisplayCommand) {
        match command {
            DisplayCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                self.fill_rect(*x, *y, *width, *height, color);
            }
            DisplayCommand::FillCircle {
                cx,
                cy,
                radius,
                color,
            } => {
                self.fill_circle(*cx, *cy, *radius, color);
            }
        }
    }

    /// Fill a rectangle, alpha-blending onto the buffer.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &ColorValue) {
        let x = x as i32;
        let y = y as i32;
        let width = width as u32;
        let height = height as u32;

        for dy in 0..height {
            for dx in 0..width {
                let px = x + dx as i32;
                let py = y + dy as i32;
                if px >= 0 && py >= 0 && (px as u32) < self.width && (py as u32) < self.height {
                    self.blend_pixel(px as u32, py as u32, color);
                }
            }
        }
    }

    /// Fill a circle, alpha-blending onto the buffer.
    ///
    /// A pixel is inside when its center lies within `radius` of the circle
    /// center (no antialiasing).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss
    )]
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &ColorValue) {
        if radius <= 0.0 {
            return;
        }

        let min_x = (cx - radius).floor() as i32;
        let max_x = (cx + radius).ceil() as i32;
        let min_y = (cy - radius).floor() as i32;
        let max_y = (cy + radius).ceil() as i32;
        let radius_sq = radius * radius;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                if px < 0 || py < 0 || (px as u32) >= self.width || (py as u32) >= self.height {
                    continue;
                }
                let dx = (px as f32 + 0.5) - cx;
                let dy = (py as f32 + 0.5) - cy;
                if dx * dx + dy * dy <= radius_sq {
                    self.blend_pixel(px as u32, py as u32, color);
                }
            }
        }
    }

    /// Source-over blend one pixel.
    fn blend_pixel(&mut self, px: u32, py: u32, color: &ColorValue) {
        let fg = Rgba([color.r, color.g, color.b, color.a]);
        if color.a == 255 {
            self.buffer.put_pixel(px, py, fg);
        } else if color.a > 0 {
            let bg = *self.buffer.get_pixel(px, py);
            self.buffer.put_pixel(px, py, alpha_blend(fg, bg, color.a));
        }
    }

    /// Save the rendered image to a file (format from the extension).
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be saved to the given path.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer
            .save(path)
            .map_err(|e| anyhow::anyhow!("failed to save pattern to '{}': {e}", path.display()))?;
        Ok(())
    }
}

/// Alpha blend a foreground color onto a background color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_blend(fg: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = f32::from(alpha) / 255.0;
    let inv_a = 1.0 - a;

    Rgba([
        f32::from(fg[0]).mul_add(a, f32::from(bg[0]) * inv_a) as u8,
        f32::from(fg[1]).mul_add(a, f32::from(bg[1]) * inv_a) as u8,
        f32::from(fg[2]).mul_add(a, f32::from(bg[2]) * inv_a) as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use stipple_paint::DisplayCommand;

    fn opaque(r: u8, g: u8, b: u8) -> ColorValue {
        ColorValue { r, g, b, a: 255 }
    }

    #[test]
    fn test_fill_rect_writes_pixels() {
        let mut renderer = Renderer::new(100, 100);
        let mut list = DisplayList::new();
        list.push(DisplayCommand::FillRect {
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 20.0,
            color: opaque(255, 0, 0),
        });
        renderer.render(&list);

        assert_eq!(renderer.buffer().get_pixel(15, 15).0, [255, 0, 0, 255]);
        // Outside the rect stays the white background
        assert_eq!(renderer.buffer().get_pixel(50, 50).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_fill_circle_covers_center_not_corners() {
        let mut renderer = Renderer::new(100, 100);
        let mut list = DisplayList::new();
        list.push(DisplayCommand::FillCircle {
            cx: 50.0,
            cy: 50.0,
            radius: 20.0,
            color: opaque(0, 0, 255),
        });
        renderer.render(&list);

        assert_eq!(renderer.buffer().get_pixel(50, 50).0, [0, 0, 255, 255]);
        // The bounding-box corner lies outside the disc
        assert_eq!(renderer.buffer().get_pixel(31, 31).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_translucent_fill_blends_with_background() {
        let mut renderer = Renderer::new(10, 10);
        let mut list = DisplayList::new();
        // 50% black over white ≈ mid gray
        list.push(DisplayCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            color: ColorValue { r: 0, g: 0, b: 0, a: 128 },
        });
        renderer.render(&list);

        let [r, g, b, a] = renderer.buffer().get_pixel(5, 5).0;
        assert!((126..=128).contains(&r));
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut renderer = Renderer::new(10, 10);
        let mut list = DisplayList::new();
        list.push(DisplayCommand::FillRect {
            x: -5.0,
            y: -5.0,
            width: 100.0,
            height: 100.0,
            color: opaque(0, 255, 0),
        });
        list.push(DisplayCommand::FillCircle {
            cx: 12.0,
            cy: 5.0,
            radius: 4.0,
            color: opaque(255, 0, 0),
        });
        renderer.render(&list);

        // Every in-bounds pixel of the rect got painted, nothing panicked
        assert_eq!(renderer.buffer().get_pixel(0, 0).0, [0, 255, 0, 255]);
        // The in-bounds sliver of the circle got painted
        assert_eq!(renderer.buffer().get_pixel(9, 5).0, [255, 0, 0, 255]);
    }
}
