use crate::Coordinate;
use crate::clustering::*;
use std::io::BufRead;

/// Reads points from header-terminated tabular text.
///
/// The first line is a header and is discarded. Every other non-blank
/// line contributes one point built from its first `n` whitespace
/// separated fields; trailing fields are ignored. A line whose leading
/// `n` fields do not all parse as finite numbers is rejected.
pub fn read<R>(reader: R, n: usize) -> Result<Vec<Point>, ClusterError>
where
    R: BufRead,
{
    if n == 0 {
        return Err(ClusterError::InvalidDimension {
            expected: 1,
            found: 0,
        });
    }
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate().skip(1) {
        let ref line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let coordinates = line
            .split_whitespace()
            .take(n)
            .map_while(|field| field.parse::<Coordinate>().ok())
            .take_while(|x| x.is_finite())
            .collect::<Vec<_>>();
        if coordinates.len() < n {
            return Err(ClusterError::MalformedRow {
                line: i + 1,
                expected: n,
                found: coordinates.len(),
            });
        }
        points.push(Point::from(coordinates));
    }
    log::info!("{:<32}{:<32}", "points loaded", points.len());
    Ok(points)
}

/// Opens `path` and reads `n` columns from it.
pub fn open<P>(path: P, n: usize) -> Result<Vec<Point>, ClusterError>
where
    P: AsRef<std::path::Path>,
{
    log::info!("{:<32}{:<32}", "reading points", path.as_ref().display());
    let file = std::fs::File::open(path)?;
    read(std::io::BufReader::new(file), n)
}
