//! Grid painter - the circles-in-squares paint source
//!
//! [CSS Painting API Level 1 § 6](https://www.w3.org/TR/css-paint-api-1/#paint-definition)
//!
//! "The paint function is invoked with the rendering context, the size of
//! the area being painted, and the computed values of the input properties."
//!
//! The painter partitions the canvas into a column×row grid and, per cell,
//! emits a translucent colored stripe rectangle followed by an opaque circle.
//! Hue and opacity come from a Mulberry32 sequence seeded per invocation, so
//! a pinned seed reproduces the exact same pattern.

use std::time::{SystemTime, UNIX_EPOCH};

use stipple_rng::Mulberry32;

use crate::color::ColorValue;
use crate::display_list::{DisplayCommand, DisplayList};
use crate::properties::{
    COLUMN_COUNT_PROPERTY, PaintConfig, PaintProperties, ROW_COUNT_PROPERTY, SEED_PROPERTY,
};

/// Size of the area being painted, in device-independent pixels.
///
/// [CSS Painting API Level 1 § 6.3](https://www.w3.org/TR/css-paint-api-1/#paint-size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintSize {
    /// Width of the paint area.
    pub width: f32,
    /// Height of the paint area.
    pub height: f32,
}

impl PaintSize {
    /// Create a paint size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Clock yielding the millisecond-of-second (0-999), used to derive the
/// default seed when no `--circle-square-seed` is pinned.
pub type Clock = fn() -> u32;

/// A named procedural image generator pluggable into a style property.
///
/// [CSS Painting API Level 1 § 7](https://www.w3.org/TR/css-paint-api-1/#registering-custom-paint)
///
/// The trait seam between paint sources and the host registry: a source
/// declares its name and input properties and produces a [`DisplayList`] per
/// invocation. Paint is infallible by contract - malformed inputs degrade to
/// defaults, never to an error the host would see.
pub trait PaintSource {
    /// Identifier style sheets reference this source by.
    fn name(&self) -> &'static str;

    /// Custom properties the paint output depends on.
    fn input_properties(&self) -> &'static [&'static str];

    /// Paint one invocation, returning the drawing commands in order.
    fn paint(&self, size: PaintSize, properties: &PaintProperties) -> DisplayList;
}

/// The circles-in-squares paint source.
///
/// Draws a `column_count × row_count` grid; each cell gets a stripe
/// rectangle at `hsl(hue 100% 50% / opacity)` and a circle at
/// `hsl(hue 100% 50% / 1)`, with `hue` and `opacity` drawn pairwise from a
/// Mulberry32 sequence in column-major cell order.
///
/// Unseeded paints take their seed from the clock's millisecond field, so
/// output is intentionally "random unless pinned": supply
/// `--circle-square-seed` to reproduce a pattern.
///
/// Two geometry quirks of the pattern are deliberate and load-bearing for
/// pixel-identical output: stripe rectangles span the full canvas height
/// (not one row), and the circle radius derives from the stripe *height*
/// even for non-square cells.
#[derive(Debug, Clone)]
pub struct CirclesInSquares {
    /// Source of the default seed; injected so tests can pin it.
    clock: Clock,
}

impl CirclesInSquares {
    /// Registry identifier for this source.
    pub const NAME: &'static str = "circlesInSquares";

    /// Create the paint source with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: system_millis,
        }
    }

    /// Create the paint source with an injected clock (tests).
    #[must_use]
    pub const fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for CirclesInSquares {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSource for CirclesInSquares {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn input_properties(&self) -> &'static [&'static str] {
        &[ROW_COUNT_PROPERTY, COLUMN_COUNT_PROPERTY, SEED_PROPERTY]
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    fn paint(&self, size: PaintSize, properties: &PaintProperties) -> DisplayList {
        let fallback_seed = (self.clock)() as i32;
        let config = PaintConfig::from_properties(properties, fallback_seed);

        let stripe_width = size.width / config.column_count as f32;
        let stripe_height = size.height / config.row_count as f32;

        let mut rng = Mulberry32::new(config.seed);
        let mut display_list = DisplayList::new();

        // Column-major: which (hue, opacity) pair lands on which cell is part
        // of the seeded-output contract.
        for i in 0..config.column_count {
            for j in 0..config.row_count {
                let hue = (rng.next_f64() * 360.0).round();
                let opacity = rng.next_f64() * 0.5;

                let x = i as f32 * stripe_width;
                let y = j as f32 * stripe_height;

                // Stripe spans the full canvas height, so stripes from later
                // rows composite over earlier ones.
                display_list.push(DisplayCommand::FillRect {
                    x,
                    y,
                    width: stripe_width,
                    height: size.height,
                    color: ColorValue::from_hsla(hue, 1.0, 0.5, opacity),
                });

                // Radius from the stripe height, same hue, fully opaque.
                display_list.push(DisplayCommand::FillCircle {
                    cx: x + stripe_width / 2.0,
                    cy: y + 0.5 * stripe_height,
                    radius: stripe_height / 2.0,
                    color: ColorValue::from_hsla(hue, 1.0, 0.5, 1.0),
                });
            }
        }

        display_list
    }
}

/// Millisecond field of the current wall-clock second (0-999).
fn system_millis() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.subsec_millis())
}
