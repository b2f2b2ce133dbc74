use super::*;
use crate::Energy;
use crate::KMEANS_ITERATIONS;
use crate::KMEANS_SEED;

/// Stopping rule applied after every update step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Convergence {
    /// Every centroid is bitwise unchanged.
    #[default]
    Exact,
    /// Every centroid moved by at most this distance, in the run's metric.
    /// Under [`Metric::Squared`] that is a squared distance.
    Tolerance(Energy),
    /// The assignment array is unchanged from the previous pass.
    Assignments,
}

/// What to do when an assignment pass leaves a cluster with no members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Vacancy {
    /// Abort with [`ClusterError::EmptyCluster`].
    #[default]
    Fail,
    /// Move the empty centroid onto a randomly drawn input point.
    Reseed,
}

/// Parameters of one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    k: usize,
    iterations: usize,
    seed: u64,
    metric: Metric,
    convergence: Convergence,
    vacancy: Vacancy,
}

impl Config {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            iterations: KMEANS_ITERATIONS,
            seed: KMEANS_SEED,
            metric: Metric::default(),
            convergence: Convergence::default(),
            vacancy: Vacancy::default(),
        }
    }
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }
    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }
    pub fn with_vacancy(mut self, vacancy: Vacancy) -> Self {
        self.vacancy = vacancy;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }
    /// Iteration cap.
    pub fn t(&self) -> usize {
        self.iterations
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn metric(&self) -> Metric {
        self.metric
    }
    pub fn convergence(&self) -> Convergence {
        self.convergence
    }
    pub fn vacancy(&self) -> Vacancy {
        self.vacancy
    }

    /// Checks the run can start on `points`.
    pub fn validate(&self, points: &[Point]) -> Result<(), ClusterError> {
        if self.k > points.len() {
            return Err(ClusterError::InvalidClusterCount {
                k: self.k,
                points: points.len(),
            });
        }
        if self.iterations == 0 {
            return Err(ClusterError::InvalidIterations);
        }
        if let Convergence::Tolerance(epsilon) = self.convergence {
            if !(epsilon >= 0.) {
                return Err(ClusterError::InvalidTolerance(epsilon));
            }
        }
        if let Some(first) = points.first() {
            points.iter().try_for_each(|p| first.conform(p))?;
        }
        Ok(())
    }
}
