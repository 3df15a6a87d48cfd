//! Geometry value types shared by every node variant.
//!
//! Coordinates follow the design-tool convention: origin at the top-left,
//! x grows to the right, y grows downwards.

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────────────────────────────────
// Transform
// ───────────────────────────────────────────────────────────────────

/// 2×3 affine matrix `[[a, c, tx], [b, d, ty]]`, row-major.
///
/// Serialized as the bare nested array, which is how design tools export
/// `absoluteTransform`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform(pub [[f64; 3]; 2]);

impl Transform {
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    /// Pure translation.
    pub fn from_translation(x: f64, y: f64) -> Self {
        Self([[1.0, 0.0, x], [0.0, 1.0, y]])
    }

    /// X point on affine space.
    #[inline]
    pub fn translate_x(&self) -> f64 {
        self.0[0][2]
    }

    /// Y point on affine space.
    #[inline]
    pub fn translate_y(&self) -> f64 {
        self.0[1][2]
    }

    /// Rotation encoded by the linear part, in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.0[1][0].atan2(self.0[0][0]).to_degrees()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ───────────────────────────────────────────────────────────────────
// Aabb
// ───────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box stored as min/max corners.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Create from origin + size.
    #[inline]
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) * 0.5
    }

    /// AABB overlap test.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// True when `self` covers `other` entirely, allowing `tolerance` units
    /// of slack on every edge.
    pub fn covers(&self, other: &Aabb, tolerance: f64) -> bool {
        self.min_x <= other.min_x + tolerance
            && self.min_y <= other.min_y + tolerance
            && self.max_x >= other.max_x - tolerance
            && self.max_y >= other.max_y - tolerance
    }
}

// ───────────────────────────────────────────────────────────────────
// Small value types
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Padding of an auto-layout container.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeInsets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn all(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Four independent corner radii.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

/// Resolved corner radius.
///
/// `Mixed` is the normalized "mixed" sentinel: the source reported a mixed
/// scalar but the per-corner values were recoverable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerRadius {
    Uniform(f64),
    Mixed(CornerRadii),
}

impl CornerRadius {
    /// Collapse four radii into `Uniform` when they agree.
    pub fn from_radii(radii: CornerRadii) -> Self {
        if radii.is_uniform() {
            CornerRadius::Uniform(radii.top_left)
        } else {
            CornerRadius::Mixed(radii)
        }
    }

    /// The single radius, if all corners share it.
    pub fn uniform(&self) -> Option<f64> {
        match self {
            CornerRadius::Uniform(r) => Some(*r),
            CornerRadius::Mixed(radii) if radii.is_uniform() => Some(radii.top_left),
            CornerRadius::Mixed(_) => None,
        }
    }

    pub fn radii(&self) -> CornerRadii {
        match *self {
            CornerRadius::Uniform(r) => CornerRadii {
                top_left: r,
                top_right: r,
                bottom_right: r,
                bottom_left: r,
            },
            CornerRadius::Mixed(radii) => radii,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_translation() {
        let t = Transform::from_translation(12.0, -4.0);
        assert_eq!(t.translate_x(), 12.0);
        assert_eq!(t.translate_y(), -4.0);
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    #[test]
    fn test_transform_rotation() {
        let quarter = Transform([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert!((quarter.rotation_degrees() - 90.0).abs() < 1e-9);
        assert_eq!(Transform::IDENTITY.rotation_degrees(), 0.0);
    }

    #[test]
    fn test_transform_serializes_as_matrix() {
        let t = Transform::from_translation(3.0, 4.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[[1.0,0.0,3.0],[0.0,1.0,4.0]]");
    }

    #[test]
    fn test_aabb_covers_with_tolerance() {
        let container = Aabb::from_rect(0.0, 0.0, 100.0, 50.0);
        let inside = Aabb::from_rect(10.0, 10.0, 20.0, 20.0);
        let almost = Aabb::from_rect(0.5, 0.0, 99.0, 50.0);

        assert!(almost.covers(&container, 1.0));
        assert!(!almost.covers(&container, 0.1));
        assert!(container.covers(&inside, 0.0));
        assert!(!inside.covers(&container, 0.0));
        assert!(inside.intersects(&container));
    }

    #[test]
    fn test_corner_radius_collapse() {
        let same = CornerRadii { top_left: 4.0, top_right: 4.0, bottom_right: 4.0, bottom_left: 4.0 };
        assert_eq!(CornerRadius::from_radii(same), CornerRadius::Uniform(4.0));

        let mixed = CornerRadii { top_left: 4.0, ..same };
        let mixed = CornerRadii { bottom_left: 0.0, ..mixed };
        let radius = CornerRadius::from_radii(mixed);
        assert_eq!(radius.uniform(), None);
        assert_eq!(radius.radii().bottom_left, 0.0);
    }
}
