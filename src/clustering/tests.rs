use super::*;
use crate::Energy;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Test fixture of seeded random blobs.
///
/// Scatters `M` points in `N` dimensions around `B` random centers so
/// that runs have real structure to find while staying fast.
const M: usize = 512;
const N: usize = 3;
const B: usize = 6;

/// Random points around a handful of centers.
pub struct Blobs(Vec<Point>);

impl Blobs {
    pub fn new(seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let centers = (0..B)
            .map(|_| Self::random(rng, 100.))
            .collect::<Vec<_>>();
        let points = (0..M)
            .map(|i| &centers[i % B])
            .map(|c| {
                let mut x = Self::random(rng, 5.);
                x.add(c).expect("N dimensions");
                x
            })
            .collect();
        Self(points)
    }
    pub fn points(&self) -> &[Point] {
        &self.0
    }
    fn random(rng: &mut SmallRng, scale: f64) -> Point {
        Point::from(
            (0..N)
                .map(|_| rng.random_range(-scale..scale))
                .collect::<Vec<_>>(),
        )
    }
}

#[test]
fn every_k_terminates_with_valid_assignments() {
    let blobs = Blobs::new(0);
    let points = &blobs.points()[..64];
    for k in 1..=points.len() {
        let config = Config::new(k).with_vacancy(Vacancy::Reseed);
        let result = KMeans::new(points, config).unwrap().run().unwrap();
        assert!(result.iterations() <= crate::KMEANS_ITERATIONS);
        assert_eq!(result.assignments().len(), points.len());
        assert_eq!(result.centroids().len(), k);
        assert!(result.assignments().iter().all(|&j| j < k));
        assert!(result.centroids().iter().all(|c| c.n() == N));
    }
}

#[test]
fn converged_state_is_a_fixed_point() {
    let blobs = Blobs::new(1);
    let ref points = blobs.points();
    let config = Config::new(B).with_vacancy(Vacancy::Reseed);
    let mut km = KMeans::new(points, config).unwrap();
    km.init(&Uniform).unwrap();
    while !km.step().unwrap() {
        assert!(km.t() < crate::KMEANS_ITERATIONS, "failed to converge");
    }
    let kmeans = km.kmeans().to_vec();
    let assignments = km.assignments().to_vec();
    assert!(km.step().unwrap());
    assert_eq!(km.kmeans(), kmeans.as_slice());
    assert_eq!(km.assignments(), assignments.as_slice());
}

#[test]
fn runs_are_reproducible_given_a_seed() {
    let blobs = Blobs::new(2);
    let ref points = blobs.points();
    let run = |seed| {
        let config = Config::new(B)
            .with_seed(seed)
            .with_vacancy(Vacancy::Reseed);
        KMeans::new(points, config).unwrap().run().unwrap()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn every_pass_lowers_inertia() {
    let blobs = Blobs::new(3);
    let ref points = blobs.points();
    let mut km = KMeans::new(points, Config::new(B)).unwrap();
    km.init(&Fixed(points[..B].to_vec())).unwrap();
    let mut inertia = Energy::INFINITY;
    loop {
        match km.step() {
            Ok(done) => {
                let next = km.inertia(km.assignments());
                assert!(
                    next <= inertia * (1. + 1e-12),
                    "inertia rose: {} -> {}",
                    inertia,
                    next
                );
                inertia = next;
                if done || km.t() >= crate::KMEANS_ITERATIONS {
                    break;
                }
            }
            Err(ClusterError::EmptyCluster(_)) => break,
            Err(e) => panic!("{}", e),
        }
    }
}

#[test]
fn centroids_stay_finite() {
    let blobs = Blobs::new(4);
    let ref points = blobs.points();
    let config = Config::new(B * 2).with_vacancy(Vacancy::Reseed);
    let result = KMeans::new(points, config).unwrap().run().unwrap();
    assert!(result.centroids().iter().all(Point::is_finite));
}
