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

//! # Strata Level
//!
//! The level simulation: a population of rigid rectangular bodies falling
//! through a 2D platformer level, colliding with each other, with the
//! static platform geometry, and with the player.
//!
//! Each frame the game loop drives the simulation synchronously:
//! [`Boxes::update`], [`Boxes::collide_with_platforms`],
//! [`Boxes::collide_with_player`], then [`Boxes::render`], in whatever
//! order the caller prefers.

#![warn(missing_docs)]

pub mod body;
pub mod boxes;
pub mod camera;
pub mod platforms;
pub mod player;

pub use body::{Body, RigidRect};
pub use boxes::Boxes;
pub use camera::Camera;
pub use platforms::Platforms;
pub use player::{Player, PlayerContact};
