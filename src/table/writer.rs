use crate::clustering::*;
use std::io::Write;

/// Output layout of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One tab-separated line per point ending in its cluster id,
    /// then a blank line and one line per centroid.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

#[derive(serde::Serialize)]
struct Member<'a> {
    point: &'a Point,
    cluster: usize,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    termination: Termination,
    iterations: usize,
    centroids: &'a [Point],
    points: Vec<Member<'a>>,
}

impl<'a> Report<'a> {
    fn new(points: &'a [Point], clustering: &'a Clustering) -> Self {
        Self {
            termination: clustering.termination(),
            iterations: clustering.iterations(),
            centroids: clustering.centroids(),
            points: points
                .iter()
                .zip(clustering.assignments().iter().copied())
                .map(|(point, cluster)| Member { point, cluster })
                .collect(),
        }
    }
}

/// Writes every point with its assigned cluster, plus the centroids.
///
/// When clustering was skipped there are no assignments, so only the
/// points are written.
pub fn write<W>(
    points: &[Point],
    clustering: &Clustering,
    format: Format,
    mut writer: W,
) -> Result<(), ClusterError>
where
    W: Write,
{
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, &Report::new(points, clustering))
                .map_err(std::io::Error::from)?;
            writeln!(writer)?;
        }
        Format::Text => {
            let ref assignments = clustering.assignments();
            for (i, point) in points.iter().enumerate() {
                match assignments.get(i) {
                    Some(j) => writeln!(writer, "{}\t{}", point, j)?,
                    None => writeln!(writer, "{}", point)?,
                }
            }
            if clustering.k() > 0 {
                writeln!(writer)?;
            }
            for (j, centroid) in clustering.centroids().iter().enumerate() {
                writeln!(writer, "centroid {}\t{}", j, centroid)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> (Vec<Point>, Clustering) {
        let points = [[0., 0.], [0., 1.], [10., 10.], [10., 11.]]
            .into_iter()
            .map(Point::from)
            .collect::<Vec<_>>();
        let init = Fixed(vec![points[0].clone(), points[3].clone()]);
        let clustering = KMeans::new(&points, Config::new(2))
            .unwrap()
            .run_with(&init)
            .unwrap();
        (points, clustering)
    }

    #[test]
    fn text_lists_points_then_centroids() {
        let (ref points, ref clustering) = run();
        let mut buffer = Vec::new();
        write(points, clustering, Format::Text, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "0\t0\t0\n0\t1\t0\n10\t10\t1\n10\t11\t1\n\ncentroid 0\t0\t0.5\ncentroid 1\t10\t10.5\n"
        );
    }

    #[test]
    fn skipped_runs_list_bare_points() {
        let points = vec![Point::from([1., 2.])];
        let clustering = KMeans::new(&points, Config::new(0)).unwrap().run().unwrap();
        let mut buffer = Vec::new();
        write(&points, &clustering, Format::Text, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1\t2\n");
    }

    #[test]
    fn json_carries_the_whole_result() {
        let (ref points, ref clustering) = run();
        let mut buffer = Vec::new();
        write(points, clustering, Format::Json, &mut buffer).unwrap();
        let value = serde_json::from_slice::<serde_json::Value>(&buffer).unwrap();
        assert_eq!(value["termination"], "converged");
        assert_eq!(value["iterations"], 2);
        assert_eq!(value["centroids"][1], serde_json::json!([10.0, 10.5]));
        assert_eq!(value["points"][2]["cluster"], 1);
        assert_eq!(value["points"][2]["point"], serde_json::json!([10.0, 10.0]));
    }
}
