use super::*;
use crate::Energy;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Termination {
    /// `k == 0`: nothing to cluster, no iterations.
    Skipped,
    /// An update step changed nothing.
    Converged,
    /// The iteration cap was reached first. The result is still usable.
    Exhausted,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped"),
            Self::Converged => write!(f, "converged"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Final centroids and per-point assignment of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    centroids: Vec<Point>,
    assignments: Vec<usize>,
    termination: Termination,
    iterations: usize,
}

impl Clustering {
    fn skipped() -> Self {
        Self {
            centroids: Vec::new(),
            assignments: Vec::new(),
            termination: Termination::Skipped,
            iterations: 0,
        }
    }
    /// One centroid per cluster, indexed by cluster id.
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }
    /// Cluster id of each input point, in input order.
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }
    pub fn termination(&self) -> Termination {
        self.termination
    }
    /// Assignment/update passes performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    /// Members per cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k()];
        self.assignments.iter().for_each(|&j| sizes[j] += 1);
        sizes
    }
    /// Sum of squared distances from each point to its centroid.
    pub fn inertia(&self, points: &[Point]) -> Energy {
        inertia(points, &self.centroids, &self.assignments)
    }
}

/// Lloyd's k-means over a borrowed, immutable dataset.
///
/// The driver owns the centroids, the assignment array and the random
/// source for the whole run:
///
/// 1. `k == 0` finishes immediately as [`Termination::Skipped`]
/// 2. the [`Initializer`] picks `k` starting centroids
/// 3. [`KMeans::step`] alternates assignment and update until the
///    convergence rule holds or the iteration cap is hit
pub struct KMeans<'a> {
    config: Config,
    points: &'a [Point],
    kmeans: Vec<Point>,
    assignments: Vec<usize>,
    rng: SmallRng,
    t: usize,
}

impl<'a> Lloyd for KMeans<'a> {
    fn points(&self) -> &[Point] {
        self.points
    }
    fn kmeans(&self) -> &[Point] {
        &self.kmeans
    }
    fn metric(&self) -> Metric {
        self.config.metric()
    }
}

impl<'a> KMeans<'a> {
    /// Validates `config` against `points` before any iteration runs.
    pub fn new(points: &'a [Point], config: Config) -> Result<Self, ClusterError> {
        config.validate(points)?;
        Ok(Self {
            rng: SmallRng::seed_from_u64(config.seed()),
            assignments: Vec::new(),
            kmeans: Vec::new(),
            points,
            config,
            t: 0,
        })
    }

    /// Runs to completion from uniformly sampled centroids.
    pub fn run(self) -> Result<Clustering, ClusterError> {
        self.run_with(&Uniform)
    }

    /// Runs to completion from centroids chosen by `init`.
    pub fn run_with<I>(mut self, init: &I) -> Result<Clustering, ClusterError>
    where
        I: Initializer,
    {
        if self.config.k() == 0 {
            log::info!("{:<32}{:<32}", "kmeans skipped", "k = 0");
            return Ok(Clustering::skipped());
        }
        log::info!("{:<32}{:<32}", "kmeans initializing", self.config.k());
        self.init(init)?;
        log::info!("{:<32}{:<32}", "kmeans iterating", self.points.len());
        while self.t < self.config.t() {
            if self.step()? {
                log::info!("{:<32}{:<32}", "kmeans converged", self.t);
                return Ok(self.finish(Termination::Converged));
            }
        }
        log::warn!("{:<32}{:<32}", "kmeans exhausted", self.t);
        Ok(self.finish(Termination::Exhausted))
    }

    /// Seeds the centroids and sizes the assignment array.
    pub fn init<I>(&mut self, init: &I) -> Result<(), ClusterError>
    where
        I: Initializer,
    {
        let k = self.config.k();
        self.kmeans = init.init(self.points, k, &mut self.rng)?;
        self.assignments = vec![0; self.points.len()];
        self.t = 0;
        Ok(())
    }

    /// One assignment pass followed by one update pass.
    /// Returns whether the configured convergence rule holds.
    pub fn step(&mut self) -> Result<bool, ClusterError> {
        let assignments = self.assign();
        let updated = self.update(&assignments)?;
        let (kmeans, reseeded) = self.heal(updated)?;
        let converged = !reseeded && self.converged(&kmeans, &assignments);
        log::debug!(
            "{:<32}{:<32.6}",
            format!("kmeans iteration {:3}", self.t),
            self.inertia(&assignments)
        );
        self.kmeans = kmeans;
        self.assignments = assignments;
        self.t += 1;
        Ok(converged)
    }

    /// Current assignment array.
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Passes performed so far.
    pub fn t(&self) -> usize {
        self.t
    }

    /// Resolves clusters that received no members.
    /// Returns the new centroids and whether any were reseeded.
    fn heal(&mut self, kmeans: Vec<Option<Point>>) -> Result<(Vec<Point>, bool), ClusterError> {
        let mut reseeded = false;
        let mut healed = Vec::with_capacity(kmeans.len());
        for (j, kmean) in kmeans.into_iter().enumerate() {
            match (kmean, self.config.vacancy()) {
                (Some(kmean), _) => healed.push(kmean),
                (None, Vacancy::Fail) => return Err(ClusterError::EmptyCluster(j)),
                (None, Vacancy::Reseed) => {
                    let i = self.rng.random_range(0..self.points.len());
                    log::warn!("{:<32}{:<32}", "kmeans reseeding", j);
                    healed.push(self.points[i].clone());
                    reseeded = true;
                }
            }
        }
        Ok((healed, reseeded))
    }

    fn converged(&self, kmeans: &[Point], assignments: &[usize]) -> bool {
        match self.config.convergence() {
            Convergence::Exact => kmeans == self.kmeans(),
            Convergence::Tolerance(epsilon) => self.drift(kmeans).iter().all(|d| *d <= epsilon),
            Convergence::Assignments => self.t > 0 && assignments == self.assignments.as_slice(),
        }
    }

    fn finish(self, termination: Termination) -> Clustering {
        Clustering {
            centroids: self.kmeans,
            assignments: self.assignments,
            termination,
            iterations: self.t,
        }
    }
}
