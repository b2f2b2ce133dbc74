use super::*;
use crate::Energy;

/// Dissimilarity between two points of equal dimensionality.
///
/// Both variants order neighbors identically, so nearest-centroid
/// assignments do not depend on the choice. The metric is fixed for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    /// Sum of squared coordinate differences.
    #[default]
    Squared,
    /// Square root of [`Metric::Squared`].
    Euclidean,
}

impl Metric {
    /// Distance between `a` and `b`. Callers guarantee equal dimensionality.
    pub fn distance(&self, a: &Point, b: &Point) -> Energy {
        debug_assert_eq!(a.n(), b.n());
        let squared = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| x - y)
            .map(|d| d * d)
            .sum::<Energy>();
        match self {
            Self::Squared => squared,
            Self::Euclidean => squared.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn random(rng: &mut SmallRng) -> Point {
        Point::from((0..3).map(|_| rng.random_range(-50.0..50.0)).collect::<Vec<_>>())
    }

    #[test]
    fn distances_are_symmetric_and_nonnegative() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..256 {
            let a = random(rng);
            let b = random(rng);
            for metric in [Metric::Squared, Metric::Euclidean] {
                assert_eq!(metric.distance(&a, &b), metric.distance(&b, &a));
                assert!(metric.distance(&a, &b) >= 0.);
                assert_eq!(metric.distance(&a, &a), 0.);
            }
        }
    }

    #[test]
    fn three_four_five() {
        let a = Point::from([0., 0.]);
        let b = Point::from([3., 4.]);
        assert_eq!(Metric::Squared.distance(&a, &b), 25.);
        assert_eq!(Metric::Euclidean.distance(&a, &b), 5.);
    }

    #[test]
    fn metrics_agree_on_ordering() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let x = random(rng);
        let ys = (0..64).map(|_| random(rng)).collect::<Vec<_>>();
        let nearest = |metric: Metric| {
            ys.iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    metric
                        .distance(&x, a)
                        .total_cmp(&metric.distance(&x, b))
                })
                .map(|(i, _)| i)
        };
        assert_eq!(nearest(Metric::Squared), nearest(Metric::Euclidean));
    }
}
