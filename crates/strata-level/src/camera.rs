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

//! The view transform everything in the level is rendered through.

use strata_core::math::{Rect, Rgba, Vec2};
use strata_core::renderer::{DrawSurface, RenderError};

/// A 2D camera that projects world-space rectangles onto a borrowed
/// [`DrawSurface`].
///
/// The camera holds the surface exclusively for the duration of a frame;
/// everything that renders does so by going through [`Camera::fill_rect`].
pub struct Camera<'a> {
    position: Vec2,
    viewport: Vec2,
    surface: &'a mut dyn DrawSurface,
}

impl<'a> Camera<'a> {
    /// Creates a camera centered on the world origin.
    pub fn new(surface: &'a mut dyn DrawSurface, viewport: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport,
            surface,
        }
    }

    /// The world-space point the camera is centered on.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Re-centers the camera on a world-space point.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Projects a world-space rectangle into screen space.
    pub fn world_to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.viewport * 0.5 - self.position)
    }

    /// Fills a world-space rectangle through the view transform.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<(), RenderError> {
        let screen = self.world_to_screen(rect);
        self.surface.fill_rect(screen, color)
    }
}
