/// Errors that can occur while reading points or clustering them.
///
/// Every variant is fatal to the run. Hitting the iteration cap is not
/// an error; see [`Termination::Exhausted`](super::Termination).
#[derive(Debug)]
pub enum ClusterError {
    /// Point arithmetic over operands of different dimensionality.
    InvalidDimension { expected: usize, found: usize },
    /// An input row with fewer than the requested numeric fields.
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// More clusters requested than there are points.
    InvalidClusterCount { k: usize, points: usize },
    /// An iteration cap of zero.
    InvalidIterations,
    /// A convergence tolerance that is negative or NaN.
    InvalidTolerance(f64),
    /// A fixed seeding whose size differs from the requested k.
    InvalidSeeds { expected: usize, found: usize },
    /// An assignment naming a cluster outside `0..k`.
    InvalidAssignment { cluster: usize, k: usize },
    /// A cluster mean with an infinite or NaN coordinate.
    NonFinite(usize),
    /// A cluster lost every member during an assignment pass.
    EmptyCluster(usize),
    /// The input could not be opened or read.
    Io(std::io::Error),
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { expected, found } => {
                write!(f, "invalid dimension: expected {}, found {}", expected, found)
            }
            Self::MalformedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "malformed row at line {}: expected {} numeric fields, found {}",
                line, expected, found
            ),
            Self::InvalidClusterCount { k, points } => {
                write!(f, "invalid cluster count: k = {} with {} points", k, points)
            }
            Self::InvalidIterations => write!(f, "iteration cap must be positive"),
            Self::InvalidTolerance(epsilon) => {
                write!(f, "invalid tolerance: {} is not a non-negative number", epsilon)
            }
            Self::InvalidSeeds { expected, found } => {
                write!(f, "invalid seeding: expected {} centroids, found {}", expected, found)
            }
            Self::InvalidAssignment { cluster, k } => {
                write!(f, "invalid assignment: cluster {} with k = {}", cluster, k)
            }
            Self::NonFinite(j) => write!(f, "cluster {} has a non-finite mean", j),
            Self::EmptyCluster(j) => write!(f, "cluster {} has no assigned points", j),
            Self::Io(e) => write!(f, "i/o failure: {}", e),
        }
    }
}

impl std::error::Error for ClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClusterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn empty_cluster_names_the_cluster() {
        let e = ClusterError::EmptyCluster(3);
        assert_eq!(e.to_string(), "cluster 3 has no assigned points");
    }

    #[test]
    fn non_finite_names_the_cluster() {
        let e = ClusterError::NonFinite(0);
        assert_eq!(e.to_string(), "cluster 0 has a non-finite mean");
    }

    #[test]
    fn io_error_keeps_its_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e = ClusterError::from(inner);
        assert!(matches!(e, ClusterError::Io(_)));
        assert!(e.source().is_some());
        assert!(ClusterError::InvalidIterations.source().is_none());
    }
}
