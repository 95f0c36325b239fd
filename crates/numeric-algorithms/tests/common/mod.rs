//! Shared fixtures for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use numeric_core::{Divisible, NumericCategory, SquaredDeviation};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

pub const EPSILON: f64 = 1e-12;

/// Three-component vector ordered by squared magnitude
///
/// Equal vectors compare `Equal`; distinct vectors of the same magnitude are
/// incomparable, so neither is strictly greater.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vector3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Divisible for Vector3D {
    fn div_count(self, count: usize) -> Self {
        let n = count as f64;
        Self::new(self.x / n, self.y / n, self.z / n)
    }
}

impl SquaredDeviation for Vector3D {
    const CATEGORY: NumericCategory = NumericCategory::Custom;

    fn squared_deviation(&self, center: &Self) -> Self {
        let diff = *self - *center;
        diff * diff
    }
}

impl PartialOrd for Vector3D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.norm_squared().partial_cmp(&other.norm_squared()) {
            Some(Ordering::Equal) => None,
            ordering => ordering,
        }
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Assert two vectors are equal componentwise within tolerance
pub fn assert_vector_eq(actual: Vector3D, expected: Vector3D) {
    assert_relative_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_relative_eq!(actual.y, expected.y, epsilon = EPSILON);
    assert_relative_eq!(actual.z, expected.z, epsilon = EPSILON);
}

/// The canonical 1..=5 float sample
pub fn one_to_five() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0]
}
