//! Integer pixel-grid rectangles.
//!
//! Rounding a continuous rectangle onto the grid goes one of two ways and
//! the direction matters: a dirty region must not miss a partially-covered
//! pixel (round outward), a clip region must not read outside guaranteed
//! bounds (round inward). The asymmetry between position and size rounding
//! in [`GridRect::covering`] and [`GridRect::contained`] is what makes
//! each guarantee hold.

use glam::IVec2;
use glam::Vec2;

use crate::vector::Vec2Ext;

/// A half-open integer rectangle: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl GridRect {
    pub const fn new(min: IVec2, max: IVec2) -> GridRect {
        GridRect { min, max }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> GridRect {
        GridRect {
            min: pos,
            max: pos + size,
        }
    }

    /// Smallest grid rectangle fully covering the continuous
    /// `(position, size)` rectangle: floor the position, ceil the size.
    pub fn covering(pos: Vec2, size: Vec2) -> GridRect {
        GridRect::from_pos_size(pos.to_grid_floor(), size.to_grid_ceil())
    }

    /// Largest grid rectangle fully contained in the continuous
    /// `(position, size)` rectangle: ceil the position, floor the size.
    pub fn contained(pos: Vec2, size: Vec2) -> GridRect {
        GridRect::from_pos_size(pos.to_grid_ceil(), size.to_grid_floor())
    }

    pub fn size(self) -> IVec2 {
        self.max - self.min
    }

    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub fn contains_point(self, p: IVec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// True if `other` lies entirely inside `self`. Empty rectangles are
    /// contained everywhere.
    pub fn contains_rect(self, other: GridRect) -> bool {
        other.is_empty()
            || (self.min.x <= other.min.x
                && self.min.y <= other.min.y
                && other.max.x <= self.max.x
                && other.max.y <= self.max.y)
    }
}

/// Integer position + size, kept separate rather than as min/max, for
/// cases where the two are updated independently (a viewport moves without
/// resizing and resizes without moving).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridGeom {
    pub pos: IVec2,
    pub size: IVec2,
}

impl GridGeom {
    pub const fn new(pos: IVec2, size: IVec2) -> GridGeom {
        GridGeom { pos, size }
    }

    /// The equivalent rectangle.
    pub fn bounds(self) -> GridRect {
        GridRect::from_pos_size(self.pos, self.size)
    }

    /// The size as a rectangle at the origin.
    pub fn size_rect(self) -> GridRect {
        GridRect::from_pos_size(IVec2::ZERO, self.size)
    }

    pub fn from_rect(r: GridRect) -> GridGeom {
        GridGeom {
            pos: r.min,
            size: r.size(),
        }
    }
}
