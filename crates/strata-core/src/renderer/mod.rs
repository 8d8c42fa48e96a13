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

//! # Rendering Abstractions
//!
//! The back-end seam the level simulation draws through. The simulation
//! never talks to a concrete graphics API; it issues screen-space
//! rectangle fills against a [`DrawSurface`] and propagates whatever the
//! back-end reports.

use crate::math::{Rect, Rgba};
use std::fmt;

/// Interface contract for any rendering back-end implementation.
///
/// Coordinates passed to the surface are already in screen space; the
/// camera performs the world-to-screen projection before delegating here.
pub trait DrawSurface {
    /// Fills a screen-space rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<(), RenderError>;
}

/// An error reported by a rendering back-end.
#[derive(Debug)]
pub enum RenderError {
    /// The underlying surface became unusable (lost device, closed window).
    SurfaceLost {
        /// Back-end specific details.
        details: String,
    },
    /// Any other back-end failure.
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost { details } => {
                write!(f, "Draw surface lost: {details}")
            }
            RenderError::Backend(details) => {
                write!(f, "Rendering back-end failure: {details}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        let err = RenderError::SurfaceLost {
            details: "device removed".into(),
        };
        assert_eq!(err.to_string(), "Draw surface lost: device removed");

        let err = RenderError::Backend("out of memory".into());
        assert_eq!(err.to_string(), "Rendering back-end failure: out of memory");
    }
}
