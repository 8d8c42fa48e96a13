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

//! # Physics Abstractions
//!
//! Shared physics constants and the integration error taxonomy consumed by
//! the level simulation crate.

use crate::math::Vec2;
use std::fmt;

/// Gravitational acceleration applied to every dynamic body, in world
/// units per second squared. Y grows downward in screen space.
pub const GRAVITY: Vec2 = Vec2::new(0.0, 1500.0);

/// An error produced while integrating a body's physics state.
#[derive(Debug)]
pub enum UpdateError {
    /// Integration drove the body's position or velocity to NaN/infinity.
    NonFiniteState {
        /// Which quantity became non-finite.
        detail: &'static str,
    },
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::NonFiniteState { detail } => {
                write!(f, "Body integrated into a non-finite state: {detail}")
            }
        }
    }
}

impl std::error::Error for UpdateError {}
