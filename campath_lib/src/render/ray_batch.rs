/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use std::slice::ChunksExact;

use crate::common::Ray;

/// Shape the consumer asked for. Both shapes hold the same rays in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayLayout {
    /// `[frames, pixels, 6]`
    Stacked,
    /// `[frames * pixels, 6]`
    Flattened,
}

/// Rays of all frames of a path.
///
/// Stored in `(frame, pixel)` order, pixel index being `py * width + px`.
#[derive(Debug, Clone, PartialEq)]
pub struct RayBatch {
    rays: Vec<Ray>,
    frame_count: usize,
    pixels_per_frame: usize,
    layout: RayLayout,
}

impl RayBatch {
    pub(crate) fn new(
        rays: Vec<Ray>,
        frame_count: usize,
        pixels_per_frame: usize,
        layout: RayLayout,
    ) -> RayBatch {
        debug_assert_eq!(rays.len(), frame_count * pixels_per_frame);
        RayBatch {
            rays,
            frame_count,
            pixels_per_frame,
            layout,
        }
    }

    pub fn layout(&self) -> RayLayout {
        self.layout
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn pixels_per_frame(&self) -> usize {
        self.pixels_per_frame
    }

    /// Total number of rays
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Ray of `pixel` in `frame`
    pub fn get(&self, frame: usize, pixel: usize) -> Option<&Ray> {
        if frame >= self.frame_count || pixel >= self.pixels_per_frame {
            return None;
        }
        self.rays.get(frame * self.pixels_per_frame + pixel)
    }

    /// All rays of one frame
    pub fn frame(&self, frame: usize) -> Option<&[Ray]> {
        if frame >= self.frame_count {
            return None;
        }
        let start = frame * self.pixels_per_frame;
        Some(&self.rays[start..start + self.pixels_per_frame])
    }

    /// Stacked view, one slice per frame
    pub fn frames(&self) -> ChunksExact<'_, Ray> {
        // chunks_exact panics on zero chunk size, intrinsics never have zero pixels
        self.rays.chunks_exact(self.pixels_per_frame.max(1))
    }

    /// Flattened view, one pool of rays
    pub fn flattened(&self) -> &[Ray] {
        &self.rays
    }

    pub fn into_rays(self) -> Vec<Ray> {
        self.rays
    }

    /// Shape of [`RayBatch::to_tensor`] in the requested layout
    pub fn shape(&self) -> Vec<usize> {
        match self.layout {
            RayLayout::Stacked => vec![self.frame_count, self.pixels_per_frame, 6],
            RayLayout::Flattened => vec![self.frame_count * self.pixels_per_frame, 6],
        }
    }

    /// Origins and directions concatenated per ray, `[ox, oy, oz, dx, dy, dz]`, row major
    pub fn to_tensor(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.rays.len() * 6);
        for ray in &self.rays {
            data.extend_from_slice(&ray.to_array());
        }
        data
    }
}
