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

//! The per-body contract the box population orchestrates, and the concrete
//! gravity-affected rigid rectangle implementing it.

use crate::camera::Camera;
use crate::platforms::Platforms;
use std::io::BufRead;
use strata_core::math::{Rect, Rgba, Vec2};
use strata_core::parse::{LoadError, TokenReader};
use strata_core::physics::{UpdateError, GRAVITY};
use strata_core::renderer::RenderError;

/// Interface contract for a simulated body owned by the box population.
///
/// A body owns its whole physics state. Its hitbox must be computable at
/// any time without mutation, and collision responses mutate only the body
/// they are called on.
pub trait Body: Sized {
    /// Parses one body record from the token stream.
    fn from_stream<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self, LoadError>;

    /// Advances the body's physics state by `dt` seconds, reading only its
    /// own state.
    fn update(&mut self, dt: f32) -> Result<(), UpdateError>;

    /// Draws the body through the camera's view transform.
    fn render(&self, camera: &mut Camera<'_>) -> Result<(), RenderError>;

    /// The rectangle used for collision testing against this body.
    fn hitbox(&self) -> Rect;

    /// Resolves this body against an obstacle rectangle. Only `self` moves.
    fn collide_with_rect(&mut self, rect: Rect);

    /// Resolves this body against the full static platform set.
    fn collide_with_platforms(&mut self, platforms: &Platforms);
}

/// Pushes `rect` out of `obstacle` along the shallower penetration axis and
/// kills the velocity component along that axis. Boundary contact produces
/// no response.
pub(crate) fn resolve_against(rect: &mut Rect, velocity: &mut Vec2, obstacle: &Rect) {
    let Some(depth) = rect.overlap_depth(obstacle) else {
        return;
    };
    if depth.x < depth.y {
        let dir = if rect.center().x < obstacle.center().x {
            -1.0
        } else {
            1.0
        };
        *rect = rect.translate(Vec2::new(dir * depth.x, 0.0));
        velocity.x = 0.0;
    } else {
        let dir = if rect.center().y < obstacle.center().y {
            -1.0
        } else {
            1.0
        };
        *rect = rect.translate(Vec2::new(0.0, dir * depth.y));
        velocity.y = 0.0;
    }
}

/// A gravity-affected axis-aligned rectangular body.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidRect {
    rect: Rect,
    velocity: Vec2,
    color: Rgba,
}

impl RigidRect {
    /// Creates a body at rest.
    pub fn new(rect: Rect, color: Rgba) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            color,
        }
    }

    /// The body's current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// The body's fill color.
    pub fn color(&self) -> Rgba {
        self.color
    }
}

impl Body for RigidRect {
    /// Record grammar: `x y w h r g b`.
    fn from_stream<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self, LoadError> {
        let x = tokens.next_f32()?;
        let y = tokens.next_f32()?;
        let w = tokens.next_f32()?;
        let h = tokens.next_f32()?;
        let r = tokens.next_f32()?;
        let g = tokens.next_f32()?;
        let b = tokens.next_f32()?;
        Ok(Self::new(Rect::from_xywh(x, y, w, h), Rgba::rgb(r, g, b)))
    }

    fn update(&mut self, dt: f32) -> Result<(), UpdateError> {
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

    fn render(&self, camera: &mut Camera<'_>) -> Result<(), RenderError> {
        camera.fill_rect(self.rect, self.color)
    }

    fn hitbox(&self) -> Rect {
        self.rect
    }

    fn collide_with_rect(&mut self, rect: Rect) {
        resolve_against(&mut self.rect, &mut self.velocity, &rect);
    }

    fn collide_with_platforms(&mut self, platforms: &Platforms) {
        for obstacle in platforms.rects() {
            resolve_against(&mut self.rect, &mut self.velocity, obstacle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::BufReader;

    fn tokens(input: &str) -> TokenReader<BufReader<&[u8]>> {
        TokenReader::new(BufReader::new(input.as_bytes()))
    }

    #[test]
    fn test_from_stream_parses_rect_and_color() {
        let mut stream = tokens("10 20 30 40 1 0 0");
        let body = RigidRect::from_stream(&mut stream).unwrap();
        assert_eq!(body.hitbox(), Rect::from_xywh(10.0, 20.0, 30.0, 40.0));
        assert_eq!(body.color(), Rgba::RED);
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_from_stream_rejects_short_record() {
        let mut stream = tokens("10 20 30");
        assert!(matches!(
            RigidRect::from_stream(&mut stream),
            Err(LoadError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_update_applies_gravity() {
        let mut body = RigidRect::new(Rect::from_xywh(0.0, 0.0, 10.0, 10.0), Rgba::WHITE);
        let dt = 0.1;
        body.update(dt).unwrap();

        assert_relative_eq!(body.velocity().y, GRAVITY.y * dt);
        assert_relative_eq!(body.hitbox().min.y, GRAVITY.y * dt * dt);
        // Gravity has no horizontal component.
        assert_relative_eq!(body.hitbox().min.x, 0.0);
    }

    #[test]
    fn test_update_detects_non_finite_state() {
        let mut body = RigidRect::new(
            Rect::from_xywh(f32::MAX, 0.0, 10.0, 10.0),
            Rgba::WHITE,
        );
        // Push the position into overflow territory.
        body.velocity = Vec2::new(f32::MAX, 0.0);
        let err = body.update(1.0).unwrap_err();
        assert!(matches!(err, UpdateError::NonFiniteState { .. }));
    }

    #[test]
    fn test_collide_with_rect_pushes_out_shallow_axis() {
        // Body overlaps an obstacle on its right edge; x penetration (0.5)
        // is shallower than y (2.0), so it resolves leftward.
        let mut body = RigidRect::new(Rect::from_xywh(0.0, 0.0, 2.0, 2.0), Rgba::WHITE);
        body.velocity = Vec2::new(5.0, 3.0);
        body.collide_with_rect(Rect::from_xywh(1.5, 0.0, 2.0, 2.0));

        assert_eq!(body.hitbox(), Rect::from_xywh(-0.5, 0.0, 2.0, 2.0));
        assert_eq!(body.velocity(), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_collide_with_rect_landing_zeroes_fall() {
        // Body sunk into a floor from above resolves upward and stops falling.
        let mut body = RigidRect::new(Rect::from_xywh(0.0, 9.5, 2.0, 2.0), Rgba::WHITE);
        body.velocity = Vec2::new(1.0, 20.0);
        body.collide_with_rect(Rect::from_xywh(-10.0, 11.0, 30.0, 5.0));

        assert_eq!(body.hitbox(), Rect::from_xywh(0.0, 9.0, 2.0, 2.0));
        assert_eq!(body.velocity(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_collide_with_rect_ignores_separated_and_touching() {
        let start = Rect::from_xywh(0.0, 0.0, 2.0, 2.0);
        let mut body = RigidRect::new(start, Rgba::WHITE);
        body.velocity = Vec2::new(1.0, 1.0);

        body.collide_with_rect(Rect::from_xywh(10.0, 10.0, 2.0, 2.0));
        assert_eq!(body.hitbox(), start);

        // Exact edge contact is not a penetration.
        body.collide_with_rect(Rect::from_xywh(2.0, 0.0, 2.0, 2.0));
        assert_eq!(body.hitbox(), start);
        assert_eq!(body.velocity(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_collide_with_platforms_resolves_each_in_order() {
        let platforms = Platforms::new(vec![
            Rect::from_xywh(-10.0, 11.0, 30.0, 5.0),
            Rect::from_xywh(100.0, 0.0, 5.0, 5.0),
        ]);
        let mut body = RigidRect::new(Rect::from_xywh(0.0, 10.0, 2.0, 2.0), Rgba::WHITE);
        body.velocity = Vec2::new(0.0, 30.0);
        body.collide_with_platforms(&platforms);

        assert_eq!(body.hitbox(), Rect::from_xywh(0.0, 9.0, 2.0, 2.0));
        assert_eq!(body.velocity(), Vec2::ZERO);
    }
}
