// Copyright 2025 the Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the axis-aligned rectangle used for hitboxes and level geometry.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::Vec2;

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// This is the hitbox primitive of the level simulation: every body, the
/// player, and every static platform is tested through this type.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Rect {
    /// The corner with the smallest coordinates on both axes.
    pub min: Vec2,
    /// The corner with the largest coordinates on both axes.
    pub max: Vec2,
}

impl Rect {
    /// Creates a new `Rect` from two corner points.
    ///
    /// The `min` field is guaranteed to hold the component-wise minimum and
    /// `max` the component-wise maximum, regardless of argument order.
    #[inline]
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a new `Rect` from a top-left corner and a size.
    ///
    /// Negative sizes are normalized away.
    #[inline]
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_min_max(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    /// Creates a new `Rect` from a center point and its half-extents.
    ///
    /// The provided `half_extents` are made non-negative.
    #[inline]
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        let safe = half_extents.abs();
        Self {
            min: center - safe,
            max: center + safe,
        }
    }

    /// Creates a degenerate `Rect` containing a single point.
    #[inline]
    pub fn from_point(point: Vec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Calculates the center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Calculates the full size (width, height) of the rectangle.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Calculates the half-extents of the rectangle.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Checks if the rectangle is valid (`min <= max` on both axes).
    /// Degenerate rectangles where `min == max` are considered valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Checks if a point is contained within or on the boundary.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if this rectangle intersects another.
    ///
    /// Rectangles that only touch at the boundary are considered to be
    /// intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        (self.min.x <= other.max.x && self.max.x >= other.min.x)
            && (self.min.y <= other.max.y && self.max.y >= other.min.y)
    }

    /// Computes the overlapping region of two rectangles.
    ///
    /// Returns `None` when the rectangles do not intersect. Boundary-touching
    /// rectangles yield a degenerate (zero-area) region.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        Some(Rect {
            min: Vec2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Vec2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        })
    }

    /// Computes the per-axis penetration depths of two overlapping rectangles.
    ///
    /// Returns `None` unless the rectangles overlap with strictly positive
    /// area on both axes, so boundary contact produces no response. The
    /// returned components are the distances required to separate the
    /// rectangles along x and y respectively; collision response picks the
    /// shallower of the two.
    #[inline]
    pub fn overlap_depth(&self, other: &Rect) -> Option<Vec2> {
        let x = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let y = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        if x > 0.0 && y > 0.0 {
            Some(Vec2::new(x, y))
        } else {
            None
        }
    }

    /// Creates a new `Rect` that encompasses both this rectangle and another.
    #[inline]
    pub fn merge(&self, other: &Rect) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Returns this rectangle shifted by `offset`.
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}
