//! 2D affine transforms with an SVG-style transform-list parser.
//!
//! The crate sits in row-vector convention: a point transforms as
//! `p' = (xx*x + xy*y + x0, yx*x + yy*y + y0)`, and [`Matrix2D::then`]
//! composes so that the receiver applies first. On top of the matrix
//! type there are permissive parsers for transform lists
//! ([`parse_transform`]), bare numeric value lists ([`scan_values`]) and
//! unit-suffixed angles ([`parse_angle`]), plus pixel-grid rounding
//! helpers ([`GridRect`], [`Vec2Ext`]) and a 26.6 fixed-point type for
//! font-metric interchange ([`Fixed26_6`]).
//!
//! ```
//! use affine2d::{Matrix2D, parse_transform};
//! use glam::vec2;
//!
//! let m = parse_transform("rotate(90) scale(2)").strict()?;
//! let p = m.transform_point(vec2(1.0, 0.0));
//! assert!((p - vec2(0.0, 2.0)).length() < 1e-5);
//! # Ok::<(), affine2d::TransformError>(())
//! ```

use pest_derive::Parser;

/// Pest parser for the numeric micro-grammars: loose value lists and
/// unit-suffixed angles. The transform-list walk itself is a hand-rolled
/// cursor loop in [`transform`]; only its leaves go through the grammar.
#[derive(Parser)]
#[grammar = "transform.pest"]
pub struct ValueParser;

pub mod angle;
pub mod errors;
pub mod grid;
mod log;
pub mod matrix;
pub mod scan;
pub mod transform;
pub mod vector;

pub use angle::{degrees, parse_angle, radians};
pub use errors::TransformError;
pub use grid::{GridGeom, GridRect};
pub use matrix::Matrix2D;
pub use scan::{check_count, scan_values};
pub use transform::{Command, ParseOptions, ParseOutcome, parse_transform, parse_transform_with};
pub use vector::{Axis, Fixed26_6, FixedPoint, Vec2Ext, min_pos};

pub use glam::{IVec2, Vec2, ivec2, vec2};
