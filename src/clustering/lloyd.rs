use super::*;
use crate::Energy;

/// The two alternating passes of Lloyd's algorithm.
///
/// Implementors only expose the dataset, the current centroids and the
/// metric; every step is derived from those.
///
/// # Passes
///
/// - `assign()` — nearest centroid for every point, O(m × k)
/// - `update()` — one fused pass accumulating every cluster's sum and count
///
/// Summation always runs sequentially in point order, so centroids are
/// reproducible bit for bit whether or not assignment runs in parallel.
pub trait Lloyd: Sync {
    /// Returns the data points to cluster.
    fn points(&self) -> &[Point];
    /// Returns current centroid positions.
    fn kmeans(&self) -> &[Point];
    /// Returns the metric used throughout the run.
    fn metric(&self) -> Metric;

    /// Gets point by index.
    fn point(&self, i: usize) -> &Point {
        &self.points()[i]
    }
    /// Gets centroid by index.
    fn kmean(&self, j: usize) -> &Point {
        &self.kmeans()[j]
    }
    fn k(&self) -> usize {
        self.kmeans().len()
    }
    fn distance(&self, a: &Point, b: &Point) -> Energy {
        self.metric().distance(a, b)
    }

    /// Finds the nearest centroid to `x` (O(k) distance calls).
    /// Scans in index order; ties keep the earlier centroid.
    fn neighbor(&self, x: &Point) -> (usize, Energy) {
        self.kmeans()
            .iter()
            .enumerate()
            .map(|(j, c)| (j, self.distance(x, c)))
            .fold((0, Energy::INFINITY), |(j0, d0), (j, d)| match d < d0 {
                true => (j, d),
                false => (j0, d0),
            })
    }

    /// Assignment step: cluster index per point, recomputed from scratch.
    fn assign(&self) -> Vec<usize> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.points()
                .par_iter()
                .map(|x| self.neighbor(x).0)
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.points()
                .iter()
                .map(|x| self.neighbor(x).0)
                .collect()
        }
    }

    /// Folds every point into its cluster's accumulator in one pass.
    fn accumulate(&self, assignments: &[usize]) -> Result<Vec<Centroid>, ClusterError> {
        let n = self.points().first().map(Point::n).unwrap_or_default();
        let k = self.k();
        let mut centroids = vec![Centroid::empty(n); k];
        for (x, &j) in self.points().iter().zip(assignments) {
            let slot = centroids
                .get_mut(j)
                .ok_or(ClusterError::InvalidAssignment { cluster: j, k })?;
            *slot = std::mem::take(slot).absorb(x)?;
        }
        Ok(centroids)
    }

    /// Update step: each centroid becomes the mean of its members.
    /// `None` marks a cluster that received no members. A mean that
    /// overflowed or absorbed a NaN is an error naming its cluster.
    fn update(&self, assignments: &[usize]) -> Result<Vec<Option<Point>>, ClusterError> {
        self.accumulate(assignments)?
            .into_iter()
            .map(Centroid::reveal)
            .enumerate()
            .map(|(j, c)| match c {
                Some(c) if !c.is_finite() => Err(ClusterError::NonFinite(j)),
                c => Ok(c),
            })
            .collect()
    }

    /// How far each centroid would move to reach `news`.
    fn drift(&self, news: &[Point]) -> Vec<Energy> {
        news.iter()
            .zip(self.kmeans())
            .map(|(new, old)| self.distance(new, old))
            .collect()
    }

    /// Sum of squared distances from each point to its assigned centroid.
    fn inertia(&self, assignments: &[usize]) -> Energy {
        inertia(self.points(), self.kmeans(), assignments)
    }
}

/// Sum of squared distances from each point to its assigned centroid.
/// Assignments outside `0..kmeans.len()` contribute nothing.
pub fn inertia(points: &[Point], kmeans: &[Point], assignments: &[usize]) -> Energy {
    points
        .iter()
        .zip(assignments)
        .filter_map(|(x, &j)| kmeans.get(j).map(|c| (x, c)))
        .map(|(x, c)| Metric::Squared.distance(x, c))
        .sum()
}
