use super::*;
use rand::rngs::SmallRng;

/// Chooses the starting centroids of a run.
///
/// Implementations return exactly `k` points, each with the dataset's
/// dimensionality. Callers have already checked `0 < k <= points.len()`.
pub trait Initializer {
    fn init(
        &self,
        points: &[Point],
        k: usize,
        rng: &mut SmallRng,
    ) -> Result<Vec<Point>, ClusterError>;
}

/// Uniform random sample of input points, without replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Initializer for Uniform {
    fn init(
        &self,
        points: &[Point],
        k: usize,
        rng: &mut SmallRng,
    ) -> Result<Vec<Point>, ClusterError> {
        if k > points.len() {
            return Err(ClusterError::InvalidClusterCount {
                k,
                points: points.len(),
            });
        }
        Ok(rand::seq::index::sample(rng, points.len(), k)
            .into_iter()
            .map(|i| points[i].clone())
            .collect())
    }
}

/// Caller-chosen starting centroids, used as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixed(pub Vec<Point>);

impl Initializer for Fixed {
    fn init(
        &self,
        points: &[Point],
        k: usize,
        _: &mut SmallRng,
    ) -> Result<Vec<Point>, ClusterError> {
        if self.0.len() != k {
            return Err(ClusterError::InvalidSeeds {
                expected: k,
                found: self.0.len(),
            });
        }
        if let Some(first) = points.first() {
            self.0.iter().try_for_each(|c| first.conform(c))?;
        }
        Ok(self.0.clone())
    }
}
