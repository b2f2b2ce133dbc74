use super::*;
use crate::Coordinate;

/// A fixed-dimension vector of real coordinates.
///
/// Points read from input are never mutated. The same type doubles as a
/// centroid, and as the running sum while a centroid is being recomputed.
/// Equality is exact and elementwise: `0.1 + 0.2 != 0.3` here, which is
/// what the exact convergence check relies on.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point(Vec<Coordinate>);

impl Point {
    /// The origin in `n` dimensions.
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.; n])
    }
    /// Dimensionality.
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.0.iter()
    }
    /// True when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
    /// Fails unless `other` has the same dimensionality.
    pub fn conform(&self, other: &Self) -> Result<(), ClusterError> {
        match self.n() == other.n() {
            true => Ok(()),
            false => Err(ClusterError::InvalidDimension {
                expected: self.n(),
                found: other.n(),
            }),
        }
    }
    /// Elementwise sum, in place.
    pub fn add(&mut self, other: &Self) -> Result<(), ClusterError> {
        self.conform(other)?;
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a += b);
        Ok(())
    }
    /// Divide every coordinate by `count`.
    /// A zero count is an empty cluster, which the caller names.
    pub fn divide(mut self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let ref d = count as Coordinate;
        self.0.iter_mut().for_each(|x| *x /= d);
        Some(self)
    }
}

impl From<Vec<Coordinate>> for Point {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }
}

impl From<&[Coordinate]> for Point {
    fn from(coordinates: &[Coordinate]) -> Self {
        Self(coordinates.to_vec())
    }
}

impl<const N: usize> From<[Coordinate; N]> for Point {
    fn from(coordinates: [Coordinate; N]) -> Self {
        Self(coordinates.to_vec())
    }
}

impl std::ops::Index<usize> for Point {
    type Output = Coordinate;
    fn index(&self, i: usize) -> &Coordinate {
        &self.0[i]
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut xs = self.0.iter();
        if let Some(x) = xs.next() {
            write!(f, "{}", x)?;
        }
        xs.try_for_each(|x| write!(f, "\t{}", x))
    }
}
