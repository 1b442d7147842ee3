//! Tone curves through control points.
//!
//! A [`Curve`] interpolates its control points with a natural cubic spline
//! (zero curvature at both ends). Inputs left of the first point or right of
//! the last are held flat, NaN is held at the first point, and every output
//! is clamped to `[0, 1]`.
//!
//! The text form is `x,y;x,y;...`, which is also what `Display` writes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{CurveError, Result};

type Points = SmallVec<[(f64, f64); 8]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Curve {
    points: Points,
    /// Second derivative of the spline at each point.
    second: SmallVec<[f64; 8]>,
}

impl Curve {
    /// Build a curve from control points in any order.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let mut points: Points = points.into_iter().collect();
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(points.len()));
        }
        for &(x, y) in &points {
            if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
                return Err(CurveError::OutOfRange { x, y });
            }
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in points.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(CurveError::DuplicateX(pair[0].0));
            }
        }

        let second = natural_second_derivatives(&points);
        Ok(Self { points, second })
    }

    /// The straight line from `(0, 0)` to `(1, 1)`.
    pub fn identity() -> Self {
        Self {
            points: SmallVec::from_slice(&[(0.0, 0.0), (1.0, 1.0)]),
            second: SmallVec::from_slice(&[0.0, 0.0]),
        }
    }

    /// Control points sorted by x.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn is_identity(&self) -> bool {
        self.points.iter().all(|&(x, y)| x == y)
            && self.points.first().map(|p| p.0) == Some(0.0)
            && self.points.last().map(|p| p.0) == Some(1.0)
    }

    /// Evaluate the curve at `x`.
    pub fn value(&self, x: f64) -> f64 {
        let pts = &self.points;
        let (first, last) = (pts[0], pts[pts.len() - 1]);
        if x.is_nan() || x <= first.0 {
            return first.1.clamp(0.0, 1.0);
        }
        if x >= last.0 {
            return last.1.clamp(0.0, 1.0);
        }

        // First point strictly right of x; never 0 or len here.
        let hi = pts.partition_point(|p| p.0 <= x);
        let lo = hi - 1;
        let (x0, y0) = pts[lo];
        let (x1, y1) = pts[hi];
        let h = x1 - x0;
        let a = (x1 - x) / h;
        let b = (x - x0) / h;
        let y = a * y0
            + b * y1
            + ((a * a * a - a) * self.second[lo] + (b * b * b - b) * self.second[hi]) * h * h / 6.0;
        y.clamp(0.0, 1.0)
    }

    /// Sample into a table of `size` entries covering `[0, 1]`, scaled to
    /// the full `u16` range.
    pub fn sample_u16(&self, size: usize) -> Vec<u16> {
        let last = size.saturating_sub(1).max(1) as f64;
        (0..size)
            .map(|i| (self.value(i as f64 / last) * u16::MAX as f64).round() as u16)
            .collect()
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::identity()
    }
}

/// Solve the tridiagonal system for a natural spline.
fn natural_second_derivatives(pts: &[(f64, f64)]) -> SmallVec<[f64; 8]> {
    let n = pts.len();
    let mut m: SmallVec<[f64; 8]> = SmallVec::from_elem(0.0, n);
    if n < 3 {
        return m;
    }

    // Forward sweep over the interior points.
    let mut diag: SmallVec<[f64; 8]> = SmallVec::from_elem(0.0, n);
    let mut rhs: SmallVec<[f64; 8]> = SmallVec::from_elem(0.0, n);
    for i in 1..n - 1 {
        let h0 = pts[i].0 - pts[i - 1].0;
        let h1 = pts[i + 1].0 - pts[i].0;
        let r = 6.0 * ((pts[i + 1].1 - pts[i].1) / h1 - (pts[i].1 - pts[i - 1].1) / h0);
        let d = 2.0 * (h0 + h1);
        if i == 1 {
            diag[i] = d;
            rhs[i] = r;
        } else {
            let w = h0 / diag[i - 1];
            diag[i] = d - w * h0;
            rhs[i] = r - w * rhs[i - 1];
        }
    }

    // Back substitution; m[0] and m[n - 1] stay zero.
    for i in (1..n - 1).rev() {
        let h1 = pts[i + 1].0 - pts[i].0;
        m[i] = (rhs[i] - h1 * m[i + 1]) / diag[i];
    }
    m
}

impl TryFrom<Vec<(f64, f64)>> for Curve {
    type Error = CurveError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Curve> for Vec<(f64, f64)> {
    fn from(curve: Curve) -> Self {
        curve.points.into_vec()
    }
}

impl FromStr for Curve {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self> {
        let mut points = Vec::new();
        for pair in s.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| CurveError::Parse(format!("expected x,y but got {pair:?}")))?;
            let x = x
                .trim()
                .parse()
                .map_err(|e| CurveError::Parse(format!("bad x in {pair:?}: {e}")))?;
            let y = y
                .trim()
                .parse()
                .map_err(|e| CurveError::Parse(format!("bad y in {pair:?}: {e}")))?;
            points.push((x, y));
        }
        Self::new(points)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{x},{y}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity() {
        let c = Curve::identity();
        assert!(c.is_identity());
        for x in [0.0, 0.25, 0.5, 1.0] {
            assert!((c.value(x) - x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_passes_through_control_points() {
        let c = Curve::new([(0.0, 0.1), (0.3, 0.6), (0.7, 0.5), (1.0, 0.9)]).unwrap();
        for &(x, y) in c.points() {
            assert!((c.value(x) - y).abs() < 1e-12, "at {x}");
        }
        assert!(!c.is_identity());
    }

    #[test]
    fn test_points_are_sorted() {
        let c = Curve::new([(1.0, 1.0), (0.0, 0.0), (0.5, 0.8)]).unwrap();
        assert_eq!(c.points()[1], (0.5, 0.8));
    }

    #[test]
    fn test_three_point_spline_midsegment() {
        // Symmetric bump: m[1] = 6 * (-1.6 - 1.6) / (2 * 1.0) = -9.6.
        let c = Curve::new([(0.0, 0.0), (0.5, 0.8), (1.0, 0.0)]).unwrap();
        // At x = 0.25: a = b = 0.5, y = 0.4 + (0.125 - 0.5) * -9.6 * 0.25 / 6.
        let expected = 0.4 + (-0.375 * -9.6) * 0.25 / 6.0;
        assert!((c.value(0.25) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_flat_outside_control_range() {
        let c = Curve::new([(0.2, 0.3), (0.8, 0.6)]).unwrap();
        assert_eq!(c.value(0.0), 0.3);
        assert_eq!(c.value(1.0), 0.6);
    }

    #[test]
    fn test_nan_input_holds_first_point() {
        assert_eq!(Curve::identity().value(f64::NAN), 0.0);
        let c = Curve::new([(0.2, 0.3), (0.5, 0.9), (0.8, 0.6)]).unwrap();
        assert_eq!(c.value(f64::NAN), 0.3);
    }

    #[test]
    fn test_rejects_bad_points() {
        assert_eq!(Curve::new([(0.0, 0.0)]), Err(CurveError::TooFewPoints(1)));
        assert_eq!(
            Curve::new([(0.0, 0.0), (1.2, 1.0)]),
            Err(CurveError::OutOfRange { x: 1.2, y: 1.0 })
        );
        assert_eq!(
            Curve::new([(0.0, 0.0), (0.5, 0.2), (0.5, 0.4)]),
            Err(CurveError::DuplicateX(0.5))
        );
        assert!(Curve::new([(f64::NAN, 0.0), (1.0, 1.0)]).is_err());
    }

    #[test]
    fn test_text_form() {
        let c: Curve = "0,0; 0.5,0.25 ;1,1".parse().unwrap();
        assert_eq!(c.points(), &[(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]);
        assert_eq!(c.to_string(), "0,0;0.5,0.25;1,1");
        assert!(matches!("0,0;1".parse::<Curve>(), Err(CurveError::Parse(_))));
        assert!(matches!("0,0;x,1".parse::<Curve>(), Err(CurveError::Parse(_))));
    }

    #[test]
    fn test_serde_as_point_list() {
        let c = Curve::new([(0.0, 0.2), (1.0, 0.8)]).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "[[0.0,0.2],[1.0,0.8]]");
        let back: Curve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Curve>("[[0.0,0.2]]").is_err());
    }

    #[test]
    fn test_sample_u16_endpoints() {
        let table = Curve::identity().sample_u16(256);
        assert_eq!(table.len(), 256);
        assert_eq!(table[0], 0);
        assert_eq!(table[255], 65535);
        assert_eq!(table[51], 13107);
    }

    proptest! {
        #[test]
        fn value_stays_in_unit_range(
            y0 in 0.0f64..=1.0,
            y1 in 0.0f64..=1.0,
            y2 in 0.0f64..=1.0,
            x in -0.5f64..1.5,
        ) {
            let c = Curve::new([(0.0, y0), (0.4, y1), (1.0, y2)]).unwrap();
            let v = c.value(x);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
