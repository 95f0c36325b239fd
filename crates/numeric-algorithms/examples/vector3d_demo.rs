//! Demonstrates every aggregate on primitive and user-defined element types
//!
//! Run with `RUST_LOG=trace` to see the library's empty-input and divisor
//! trace records.

use numeric_algorithms::prelude::*;
use numeric_core::NumericCategory;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Three-component vector, ordered by squared magnitude
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
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

    // Componentwise
    fn squared_deviation(&self, center: &Self) -> Self {
        let (dx, dy, dz) = (self.x - center.x, self.y - center.y, self.z - center.z);
        Self::new(dx * dx, dy * dy, dz * dz)
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

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting aggregate demo");

    // Primitive floats first
    let doubles = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    println!(
        "[f64] sum: {} | mean: {} | variance: {} | max: {}",
        sum(&doubles),
        mean(&doubles),
        variance(&doubles),
        max(&doubles)
    );
    println!(
        "[f64] sample variance: {}",
        variance_with(&doubles, VarianceDivisor::Sample)?
    );

    // User-defined vectors
    let vectors = vec![
        Vector3D::new(1.0, 1.0, 1.0),
        Vector3D::new(2.0, 2.0, 2.0),
        Vector3D::new(0.0, 5.0, 0.0),
    ];
    println!("[Vector3D] sum: {}", sum(&vectors));
    println!("[Vector3D] mean: {}", mean(&vectors));
    println!("[Vector3D] variance: {}", variance(&vectors));
    println!("[Vector3D] max (by magnitude): {}", max(&vectors));

    // Variadic forms
    println!("[variadic] sum (1, 2, 3, 4): {}", sum_variadic!(1, 2, 3, 4));
    println!("[variadic] mean (1.0, 2.0, 3.0): {}", mean_variadic!(1.0, 2.0, 3.0));
    println!("[variadic] max (10, 5, 20, 1): {}", max_variadic!(10, 5, 20, 1));
    println!(
        "[variadic] variance (2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0): {}",
        variance_variadic!(2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0)
    );

    // Map then reduce: sum of squares
    println!(
        "[transform] sum of squares: {}",
        transform_reduce(&doubles, |x| x * x)
    );

    // Configured aggregation
    let config = AggregationConfig::from_json(r#"{"divisor": "sample"}"#)?;
    let summary = Aggregator::new(config).summarize(&doubles)?;
    println!("[summary] {summary:?}");

    let empty: Vec<f64> = Vec::new();
    println!("[empty] mean: {} | max: {}", mean(&empty), max(&empty));
    if let Err(err) = try_max(&empty) {
        println!("[empty] try_max: {err}");
    }

    // These do not compile, each for a missing capability:
    //
    //   let words = vec![String::from("hello"), String::from("world")];
    //   mean(&words);
    //   // `String` is not Addable (no `String + String`) and not Divisible.
    //
    //   #[derive(Clone, Default)]
    //   struct Tally(i32);
    //   impl Add for Tally { ... }
    //   mean(&vec![Tally(1), Tally(2)]);
    //   // `Tally` is not Divisible: there is no division by a count.
    //
    //   struct Opaque(i32);
    //   max(&vec![Opaque(1), Opaque(2)]);
    //   // `Opaque` is not Comparable: there is no `>`.

    info!("Demo finished");
    Ok(())
}
