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

//! The box population: a fixed-size sequence of independently-simulated
//! bodies orchestrated per frame.
//!
//! The collection owns its bodies. It never reorders or resizes them after
//! construction; every per-frame operation walks them in ascending index
//! order so behavior is deterministic for a given collection state.

use crate::body::{Body, RigidRect};
use crate::camera::Camera;
use crate::platforms::Platforms;
use crate::player::PlayerContact;
use std::io::BufRead;
use strata_core::parse::{LoadError, TokenReader};
use strata_core::physics::UpdateError;
use strata_core::renderer::RenderError;

/// An ordered, fixed-length population of simulated bodies.
///
/// The length is fixed by the count token read at load time and never
/// revised. Individual bodies are freely mutated by the per-frame passes,
/// but the sequence itself is immutable. Dropping the collection releases
/// every owned body.
#[derive(Debug)]
pub struct Boxes<B: Body = RigidRect> {
    bodies: Vec<B>,
}

impl<B: Body> Boxes<B> {
    /// Loads a box population from a token stream.
    ///
    /// The stream carries a count followed by exactly that many body
    /// records in the body's own grammar. Construction is transactional:
    /// if the count token or any record fails to parse, every body built
    /// so far is dropped before the error is returned and no partial
    /// collection escapes. Record failures are tagged with the failing
    /// index via [`LoadError::BodyRecord`].
    pub fn from_stream<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self, LoadError> {
        let count = tokens.next_usize()?;
        let mut bodies = Vec::with_capacity(count);
        for index in 0..count {
            let body = B::from_stream(tokens).map_err(|source| LoadError::BodyRecord {
                index,
                source: Box::new(source),
            })?;
            bodies.push(body);
        }
        log::debug!("loaded {} boxes", bodies.len());
        Ok(Self { bodies })
    }

    /// Wraps an already-built sequence of bodies.
    pub fn from_bodies(bodies: Vec<B>) -> Self {
        Self { bodies }
    }

    /// The number of owned bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read-only access to the owned bodies, in index order.
    pub fn bodies(&self) -> &[B] {
        &self.bodies
    }

    /// Advances every body by `dt` seconds, then resolves all pairwise
    /// collisions.
    ///
    /// `dt` must be strictly positive; zero or negative values are a
    /// caller bug, not a runtime condition.
    ///
    /// Phase 1 integrates each body in isolation. If any integration
    /// fails, the call aborts before pairwise resolution so the resolution
    /// pass never observes a mix of integrated and un-integrated bodies.
    /// Bodies integrated before the failure keep their new state.
    ///
    /// Phase 2 resolves every ordered pair `(i, j)` with `i != j` —
    /// resolution is directional, so both orderings of each pair are
    /// visited, for `n * (n - 1)` calls total. Each body is resolved
    /// against hitboxes captured after full integration.
    pub fn update(&mut self, dt: f32) -> Result<(), UpdateError> {
        debug_assert!(dt > 0.0, "delta time must be strictly positive");

        for body in &mut self.bodies {
            body.update(dt)?;
        }

        for i in 0..self.bodies.len() {
            for j in 0..self.bodies.len() {
                if i != j {
                    let hitbox = self.bodies[j].hitbox();
                    self.bodies[i].collide_with_rect(hitbox);
                }
            }
        }

        Ok(())
    }

    /// Resolves each body independently against the static platform set.
    /// No body-to-body interaction occurs in this pass.
    pub fn collide_with_platforms(&mut self, platforms: &Platforms) {
        for body in &mut self.bodies {
            body.collide_with_platforms(platforms);
        }
    }

    /// Resolves the player and every body against each other.
    ///
    /// The player's hitbox is captured once at the start of the call and
    /// reused for every body, so all bodies contest the same player
    /// position and resolution order cannot bias which body wins contact.
    /// For each body in index order, the player is resolved against the
    /// body's current hitbox, then the body is resolved against the
    /// captured snapshot.
    pub fn collide_with_player<P: PlayerContact>(&mut self, player: &mut P) {
        let hitbox = player.hitbox();
        for body in &mut self.bodies {
            player.collide_with_rect(body.hitbox());
            body.collide_with_rect(hitbox);
        }
    }

    /// Draws every body in ascending index order.
    ///
    /// Stops at the first body whose render call fails; bodies already
    /// drawn in this call stay drawn.
    pub fn render(&self, camera: &mut Camera<'_>) -> Result<(), RenderError> {
        for body in &self.bodies {
            body.render(camera)?;
        }
        Ok(())
    }
}
