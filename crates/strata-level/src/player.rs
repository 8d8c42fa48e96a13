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

//! The player entity and the contact seam the box population resolves
//! against.

use crate::body::resolve_against;
use crate::camera::Camera;
use crate::platforms::Platforms;
use strata_core::math::{Rect, Rgba, Vec2};
use strata_core::physics::{UpdateError, GRAVITY};
use strata_core::renderer::RenderError;

/// Interface contract for an entity the box population contests space with.
///
/// [`crate::boxes::Boxes::collide_with_player`] is generic over this seam:
/// it queries the hitbox exactly once per call and pushes every box's
/// hitbox through `collide_with_rect`.
pub trait PlayerContact {
    /// The entity's current hitbox, computed without mutation.
    fn hitbox(&self) -> Rect;

    /// Resolves the entity against an obstacle rectangle.
    fn collide_with_rect(&mut self, rect: Rect);
}

/// The movable player entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    rect: Rect,
    velocity: Vec2,
    color: Rgba,
}

impl Player {
    /// Creates a player at rest.
    pub fn new(rect: Rect, color: Rgba) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            color,
        }
    }

    /// The player's current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Applies a horizontal movement impulse, in world units per second.
    pub fn move_horizontally(&mut self, speed: f32) {
        self.velocity.x = speed;
    }

    /// Launches the player upward.
    pub fn jump(&mut self, speed: f32) {
        self.velocity.y = -speed.abs();
    }

    /// Advances the player's physics state by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Result<(), UpdateError> {
        self.velocity += GRAVITY * dt;
        self.rect = self.rect.translate(self.velocity * dt);

        if !self.velocity.is_finite() {
            return Err(UpdateError::NonFiniteState { detail: "velocity" });
        }
        if !self.rect.min.is_finite() || !self.rect.max.is_finite() {
            return Err(UpdateError::NonFiniteState { detail: "position" });
        }
        Ok(())
    }

    /// Resolves the player against the full static platform set.
    pub fn collide_with_platforms(&mut self, platforms: &Platforms) {
        for obstacle in platforms.rects() {
            resolve_against(&mut self.rect, &mut self.velocity, obstacle);
        }
    }

    /// Draws the player through the camera's view transform.
    pub fn render(&self, camera: &mut Camera<'_>) -> Result<(), RenderError> {
        camera.fill_rect(self.rect, self.color)
    }
}

impl PlayerContact for Player {
    fn hitbox(&self) -> Rect {
        self.rect
    }

    fn collide_with_rect(&mut self, rect: Rect) {
        resolve_against(&mut self.rect, &mut self.velocity, &rect);
    }
}
