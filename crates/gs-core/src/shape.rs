//! Shape construction and axis-aligned bounding box computation.
//!
//! A [`Shape`] is an ordered sequence of `(x, y)` offsets relative to an
//! entity's origin. The simulation core only ever consumes a shape through
//! its [`Aabb`] — rotation and exact-polygon overlap are out of scope
//! (§1 Non-goals); the offsets are kept around verbatim only so callers can
//! render or re-derive a shape later.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    points: Vec<(f64, f64)>,
    aabb: Aabb,
}

impl Shape {
    /// Build a shape from an ordered list of offset points, computing and
    /// caching its AABB. Returns [`crate::CoreError::DegenerateShape`] if
    /// fewer than 3 points are given.
    pub fn new(points: Vec<(f64, f64)>) -> crate::CoreResult<Self> {
        if points.len() < 3 {
            return Err(crate::CoreError::DegenerateShape(points.len()));
        }
        let aabb = Aabb::of_points(&points);
        Ok(Self { points, aabb })
    }

    /// The ordered offset points that make up this shape.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The shape's axis-aligned bounding box, relative to its own origin.
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }
}

/// Axis-aligned bounding box, `(min_x, min_y, max_x, max_y)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    fn of_points(points: &[(f64, f64)]) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &(x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Aabb { min_x, min_y, max_x, max_y }
    }

    /// Width along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Translate this AABB by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Aabb {
        Aabb {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

/// Returns the offset points of an axis-aligned rectangle of size
/// `x_len × y_len` centered on the origin, rounded to `round_to` decimal
/// places, ordered counter-clockwise starting from the `(+x, +y)` corner —
/// matches `Shape.rectangle` in the reference implementation exactly.
pub fn rectangle(x_len: f64, y_len: f64, round_to: i32) -> Vec<(f64, f64)> {
    let r = |v: f64| round_to_places(v, round_to);
    vec![
        (r(x_len / 2.0), r(y_len / 2.0)),
        (r(-x_len / 2.0), r(y_len / 2.0)),
        (r(-x_len / 2.0), r(-y_len / 2.0)),
        (r(x_len / 2.0), r(-y_len / 2.0)),
    ]
}

/// Returns the offset points of a regular polygon approximating a circle of
/// the given `radius`, with `points` vertices, rounded to `round_to` decimal
/// places — matches `Shape.circle` in the reference implementation exactly.
pub fn circle(radius: f64, points: usize, round_to: i32) -> Vec<(f64, f64)> {
    (0..points)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI / points as f64 * i as f64;
            (
                round_to_places(radius * theta.cos(), round_to),
                round_to_places(radius * theta.sin(), round_to),
            )
        })
        .collect()
}

fn round_to_places(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (v * factor).round() / factor
}
