//! Display List - a sequence of drawing commands
//!
//! [CSS Painting API Level 1 § 6](https://www.w3.org/TR/css-paint-api-1/#paint-notation)
//!
//! The display list is the output of a paint invocation. The host (or the
//! software rasterizer) executes the commands in order to produce the paint
//! image; tests inspect them directly.

use serde::Serialize;

use crate::color::ColorValue;

/// A single drawing command.
///
/// Commands are added to the display list in painting order (back to front).
/// The circles-in-squares source issues exactly two commands per grid cell:
/// a translucent stripe rectangle followed by an opaque circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid (possibly translucent) color.
    ///
    /// The `fillRect(x, y, w, h)` half of the paint contract.
    FillRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle in pixels.
        width: f32,
        /// Height of the rectangle in pixels.
        height: f32,
        /// Fill color.
        color: ColorValue,
    },

    /// Fill a full circle.
    ///
    /// The `beginPath` / `arc(cx, cy, r, 0, 2π)` / `fill` half of the paint
    /// contract, collapsed into one command since the source only ever draws
    /// complete circles.
    FillCircle {
        /// X coordinate of the circle's center.
        cx: f32,
        /// Y coordinate of the circle's center.
        cy: f32,
        /// Circle radius in pixels.
        radius: f32,
        /// Fill color.
        color: ColorValue,
    },
}

/// A list of drawing commands in painting order.
///
/// Commands are stored in back-to-front order, so an executor can simply
/// iterate and execute each command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
