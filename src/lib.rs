//! Lloyd's k-means clustering over fixed-dimension numeric points.
//!
//! The [`clustering`] module holds the engine: centroid initialization,
//! nearest-centroid assignment, centroid recomputation and convergence
//! detection. The [`table`] module reads points from header-terminated
//! tabular text and writes the final assignment back out.
pub mod clustering;
pub mod table;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Point coordinates and centroid components.
pub type Coordinate = f64;
/// Distances, tolerances and inertia.
pub type Energy = f64;

// ============================================================================
// K-MEANS CLUSTERING
// Lloyd's algorithm: initialize once, then alternate assignment and update.
// ============================================================================
/// Maximum assignment/update passes before giving up on convergence.
pub const KMEANS_ITERATIONS: usize = 100;
/// Default seed for the centroid initializer.
pub const KMEANS_SEED: u64 = 0x5eed;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. DEBUG when verbose, INFO otherwise.
/// Log lines go to stderr so stdout stays reserved for results.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
