//! Procedural paint sources and the grid painter for Stipple.
//!
//! # Scope
//!
//! This crate implements:
//! - **Paint Properties** ([CSS Painting API Level 1 § 5](https://www.w3.org/TR/css-paint-api-1/#input-properties))
//!   - Read-only property map handed to a paint function
//!   - JavaScript-`parseInt`-style numeric coercion with truthy fallback
//!   - Clock-derived default seed ("random unless pinned")
//!
//! - **Color Values** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - `hsl(hue 100% 50% / alpha)` construction via HSL→RGB conversion
//!   - Hex notation parsing for tooling
//!
//! - **Display List**
//!   - `FillRect` / `FillCircle` drawing commands in painting order
//!
//! - **Grid Painter** ([CSS Painting API Level 1 § 6](https://www.w3.org/TR/css-paint-api-1/#paint-definition))
//!   - The `circlesInSquares` paint source: column-major grid of translucent
//!     stripes and opaque inscribed circles, colored from a seeded
//!     Mulberry32 sequence
//!
//! - **Paint Worklet Registry** ([§ 7](https://www.w3.org/TR/css-paint-api-1/#registering-custom-paint))
//!   - Name → paint source registration and lookup
//!
//! # Not Implemented
//!
//! - Animation scheduling and invalidation (host concerns)
//! - `paint()` function arguments and `<image>` input properties
//! - Arbitrary path drawing (the source only fills rects and full circles)

/// CSS color values per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Drawing commands in painting order.
pub mod display_list;
/// The circles-in-squares grid painter and the paint source trait.
pub mod painter;
/// Input property map and paint configuration per [CSS Painting API Level 1 § 5](https://www.w3.org/TR/css-paint-api-1/#input-properties).
pub mod properties;
/// Deduplicated terminal warnings for degraded inputs.
pub mod warning;
/// Paint source registry per [CSS Painting API Level 1 § 7](https://www.w3.org/TR/css-paint-api-1/#registering-custom-paint).
pub mod worklet;

// Re-exports for convenience
pub use color::ColorValue;
pub use display_list::{DisplayCommand, DisplayList};
pub use painter::{CirclesInSquares, Clock, PaintSize, PaintSource};
pub use properties::{
    COLUMN_COUNT_PROPERTY, DEFAULT_GRID_COUNT, PaintConfig, PaintProperties, ROW_COUNT_PROPERTY,
    SEED_PROPERTY,
};
pub use worklet::{PaintWorklet, WorkletError};
