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

//! Static level geometry.

use crate::camera::Camera;
use std::io::BufRead;
use strata_core::math::{Rect, Rgba};
use strata_core::parse::{LoadError, TokenReader};
use strata_core::renderer::RenderError;

const PLATFORM_COLOR: Rgba = Rgba::rgb(0.2, 0.2, 0.25);

/// The immovable platform set bodies and the player collide against.
#[derive(Debug, Clone, PartialEq)]
pub struct Platforms {
    rects: Vec<Rect>,
}

impl Platforms {
    /// Creates a platform set from pre-built rectangles.
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    /// Loads a platform set from a token stream.
    ///
    /// The grammar is a count followed by `x y w h` per platform. Like
    /// every stream constructor in the level, loading is transactional:
    /// a malformed record drops everything parsed so far and reports the
    /// record's index.
    pub fn from_stream<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self, LoadError> {
        let count = tokens.next_usize()?;
        let mut rects = Vec::with_capacity(count);
        for index in 0..count {
            let rect = Self::rect_from_stream(tokens)
                .map_err(|source| LoadError::BodyRecord {
                    index,
                    source: Box::new(source),
                })?;
            rects.push(rect);
        }
        log::debug!("loaded {} platforms", rects.len());
        Ok(Self { rects })
    }

    fn rect_from_stream<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Rect, LoadError> {
        let x = tokens.next_f32()?;
        let y = tokens.next_f32()?;
        let w = tokens.next_f32()?;
        let h = tokens.next_f32()?;
        Ok(Rect::from_xywh(x, y, w, h))
    }

    /// The platform rectangles, in load order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Draws every platform. Stops at the first failing fill.
    pub fn render(&self, camera: &mut Camera<'_>) -> Result<(), RenderError> {
        for &rect in &self.rects {
            camera.fill_rect(rect, PLATFORM_COLOR)?;
        }
        Ok(())
    }
}
