use super::*;

/// Trait for k-means centroid computation via incremental aggregation.
///
/// The "absorb" pattern folds members into an accumulator one at a time,
/// so a single pass over the points can build every cluster's sum and
/// count at once.
///
/// # Invariant
///
/// After absorbing N points, [`Absorb::reveal`] yields the mean of
/// those points, or `None` when N is zero.
pub trait Absorb: Sized {
    /// The finished value.
    type Output;
    /// Returns the identity element (an empty accumulator).
    fn identity(&self) -> Self;
    /// Combines this accumulator with another point.
    fn absorb(self, other: &Point) -> Result<Self, ClusterError>;
    /// Finishes the aggregation.
    fn reveal(self) -> Option<Self::Output>;
}

/// Running sum and member count of one cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Centroid {
    sum: Point,
    count: usize,
}

impl Centroid {
    /// An empty accumulator in `n` dimensions.
    pub fn empty(n: usize) -> Self {
        Self {
            sum: Point::zeros(n),
            count: 0,
        }
    }
    /// Number of absorbed members.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Absorb for Centroid {
    type Output = Point;
    fn identity(&self) -> Self {
        Self::empty(self.sum.n())
    }
    fn absorb(mut self, other: &Point) -> Result<Self, ClusterError> {
        self.sum.add(other)?;
        self.count += 1;
        Ok(self)
    }
    fn reveal(self) -> Option<Point> {
        self.sum.divide(self.count)
    }
}
