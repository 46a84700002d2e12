//! Geometric primitives tagged with their coordinate space.
//!
//! `Rect` and `Point` carry a zero-sized marker type naming the space their
//! values live in, so model-pixel, model-normalized, and frame-pixel
//! coordinates cannot be mixed by accident. Conversions between spaces live in
//! the mapping module; nothing here changes spaces.

use std::marker::PhantomData;

/// The fixed pixel grid (e.g. 640x640) the network consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelPixel;

/// Coordinates divided by the model input size, nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalized;

/// Pixels of the caller-supplied target frame (e.g. the camera buffer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePixel;

/// Axis-aligned rectangle with a top-left origin in space `S`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<S> {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    space: PhantomData<S>,
}

impl<S> Rect<S> {
    /// Creates a rectangle from its top-left corner and extent.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            space: PhantomData,
        }
    }

    /// Returns `w * h`.
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Returns the area shared with `other`, zero when disjoint.
    pub fn intersection_area(&self, other: &Rect<S>) -> f32 {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.w).min(other.x + other.w);
        let y1 = (self.y + self.h).min(other.y + other.h);
        (x1 - x0).max(0.0) * (y1 - y0).max(0.0)
    }
}

/// Point in space `S`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<S> {
    pub x: f32,
    pub y: f32,
    space: PhantomData<S>,
}

impl<S> Point<S> {
    /// Creates a point.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }
}

/// Width/height pair for model input and target frame sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub(crate) fn has_zero_dim(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelPixel, Rect};

    #[test]
    fn intersection_area_of_overlapping_rects() {
        let a: Rect<ModelPixel> = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(1.0, 1.0, 10.0, 10.0);
        assert!((a.intersection_area(&b) - 81.0).abs() < 1e-6);
    }

    #[test]
    fn intersection_area_of_disjoint_rects_is_zero() {
        let a: Rect<ModelPixel> = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn intersection_area_of_touching_edges_is_zero() {
        let a: Rect<ModelPixel> = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn zero_area_rect_intersects_with_zero_area() {
        let a: Rect<ModelPixel> = Rect::new(5.0, 5.0, 0.0, 0.0);
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.area(), 0.0);
        assert_eq!(a.intersection_area(&b), 0.0);
    }
}
