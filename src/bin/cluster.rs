//! Clustering Binary
//!
//! Reads points from a tabular text file, clusters them with Lloyd's
//! k-means and writes each point with its cluster id to stdout.

use anyhow::Context;
use clap::Parser;
use lloyd::clustering::*;
use lloyd::table::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tabular input; the first line is a header
    #[arg(required = true)]
    input: std::path::PathBuf,
    /// Number of leading columns forming each point
    #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..))]
    columns: u64,
    /// Number of clusters; 0 skips clustering
    #[arg(required = true)]
    clusters: usize,
    /// Maximum assignment/update passes
    #[arg(long, default_value_t = lloyd::KMEANS_ITERATIONS)]
    iterations: usize,
    /// Seed for centroid initialization
    #[arg(long, default_value_t = lloyd::KMEANS_SEED)]
    seed: u64,
    /// Stop once no centroid moves farther than this; a squared distance unless --euclidean
    #[arg(long, conflicts_with = "assignments")]
    tolerance: Option<f64>,
    /// Stop once no point changes cluster
    #[arg(long)]
    assignments: bool,
    /// Move empty clusters onto random points instead of failing
    #[arg(long)]
    reseed: bool,
    /// Measure true rather than squared Euclidean distance
    #[arg(long)]
    euclidean: bool,
    /// Emit a JSON document instead of tab-separated text
    #[arg(long)]
    json: bool,
    /// Log every iteration
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        let convergence = match (self.tolerance, self.assignments) {
            (Some(epsilon), _) => Convergence::Tolerance(epsilon),
            (None, true) => Convergence::Assignments,
            (None, false) => Convergence::Exact,
        };
        let vacancy = match self.reseed {
            true => Vacancy::Reseed,
            false => Vacancy::Fail,
        };
        let metric = match self.euclidean {
            true => Metric::Euclidean,
            false => Metric::Squared,
        };
        Config::new(self.clusters)
            .with_iterations(self.iterations)
            .with_seed(self.seed)
            .with_convergence(convergence)
            .with_vacancy(vacancy)
            .with_metric(metric)
    }
    fn format(&self) -> Format {
        match self.json {
            true => Format::Json,
            false => Format::Text,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    lloyd::log(args.verbose);
    let points = open(&args.input, args.columns as usize)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let clustering = KMeans::new(&points, args.config())
        .context("invalid clustering parameters")?
        .run()
        .context("clustering failed")?;
    log::info!(
        "{:<32}{:<32}",
        format!("kmeans {}", clustering.termination()),
        clustering.iterations()
    );
    let stdout = std::io::stdout().lock();
    write(&points, &clustering, args.format(), std::io::BufWriter::new(stdout))
        .context("writing results")?;
    Ok(())
}
