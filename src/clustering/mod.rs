//! Lloyd's k-means clustering engine.
//!
//! ## Core Types
//!
//! - [`Point`] — Fixed-dimension coordinate vector, also used for centroids
//! - [`Metric`] — Squared or true Euclidean distance
//! - [`Centroid`] — Running sum and count, finished by [`Absorb::reveal`]
//!
//! ## Algorithm
//!
//! - [`Initializer`] — Picks the starting centroids ([`Uniform`], [`Fixed`])
//! - [`Lloyd`] — Assignment and update passes over any dataset
//! - [`KMeans`] — The driver: initialize, iterate, stop on convergence or cap
mod absorb;
mod config;
mod error;
mod init;
mod kmeans;
mod lloyd;
mod metric;
mod point;
#[cfg(test)]
mod tests;

pub use absorb::*;
pub use config::*;
pub use error::*;
pub use init::*;
pub use kmeans::*;
pub use lloyd::*;
pub use metric::*;
pub use point::*;
