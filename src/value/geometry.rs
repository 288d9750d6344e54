//! Composite float types: 3-component vector and rotation quaternion.

use serde::{Deserialize, Serialize};

/// A 3-component vector, encoded as x, y, z f32 in that order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component, written first.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Components in wire order.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A rotation quaternion, encoded as x, y, z, w f32 in that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// X component, written first.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// Scalar component, written last.
    pub w: f32,
}

impl Quaternion {
    /// The no-rotation quaternion (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Components in wire order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_array_order() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn test_quaternion_default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
        assert_eq!(Quaternion::IDENTITY.to_array(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
        let q: Quaternion = serde_json::from_str(r#"{"x":0.5,"y":0.0,"z":0.0,"w":0.5}"#).unwrap();
        assert_eq!(q, Quaternion::new(0.5, 0.0, 0.0, 0.5));
    }
}
