//! Waypoint sources: the built-in sponza tour and plain-text waypoint files.
//!
//! A waypoint file holds one point per line as three whitespace-separated
//! numbers. Blank lines and `#` comments are skipped, and an OBJ-style leading
//! `v` is accepted so vertex lines can be pasted straight from a model file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;

use super::Waypoint;

/// Loop through the sponza atrium, starting where the viewer's camera spawns.
pub fn sponza_tour() -> Vec<Waypoint> {
    vec![
        Vec3::new(0.0, 5.0, 20.0),
        Vec3::new(-12.0, 4.0, 14.0),
        Vec3::new(-18.0, 3.0, 2.0),
        Vec3::new(-12.0, 6.0, -10.0),
        Vec3::new(0.0, 9.0, -16.0),
        Vec3::new(12.0, 6.0, -10.0),
        Vec3::new(18.0, 3.0, 2.0),
        Vec3::new(12.0, 4.0, 14.0),
    ]
}

pub fn load_waypoints<P: AsRef<Path>>(path: P) -> Result<Vec<Waypoint>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open waypoint file {}", path.display()))?;
    let waypoints = parse_waypoints(BufReader::new(file))
        .with_context(|| format!("Failed to parse waypoint file {}", path.display()))?;

    log::info!("Loaded {} waypoints from {}", waypoints.len(), path.display());
    Ok(waypoints)
}

pub fn parse_waypoints<R: BufRead>(reader: R) -> Result<Vec<Waypoint>> {
    let mut waypoints = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let content = match line.split_once('#') {
            Some((before, _)) => before,
            None => line.as_str(),
        };

        let mut tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.first() == Some(&"v") {
            tokens.remove(0);
        }
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 3 {
            anyhow::bail!(
                "line {}: expected 3 coordinates, found {}",
                number + 1,
                tokens.len()
            );
        }

        let mut coords = [0.0f32; 3];
        for (coord, token) in coords.iter_mut().zip(&tokens) {
            *coord = token
                .parse::<f32>()
                .with_context(|| format!("line {}: invalid coordinate {:?}", number + 1, token))?;
        }
        waypoints.push(Vec3::from_array(coords));
    }

    Ok(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathAnimator;
    use assert_fs::prelude::*;

    #[test]
    fn test_sponza_tour_is_valid_path() {
        let path = PathAnimator::new(sponza_tour()).unwrap();
        assert!(path.total_length() > 0.0);
        assert_eq!(path.position_at(0.0), Vec3::new(0.0, 5.0, 20.0));
    }

    #[test]
    fn test_parse_comments_and_prefixes() {
        let text = "# atrium loop\n\
                    0 5 20\n\
                    \n\
                    v -12.5 4 14   # west arcade\n\
                    \t1e1 0.0 -3\n";
        let waypoints = parse_waypoints(text.as_bytes()).unwrap();
        assert_eq!(
            waypoints,
            vec![
                Vec3::new(0.0, 5.0, 20.0),
                Vec3::new(-12.5, 4.0, 14.0),
                Vec3::new(10.0, 0.0, -3.0),
            ]
        );
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = parse_waypoints("0 0 0\n1 2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "unexpected error: {}", err);

        let err = parse_waypoints("0 0 0\n1 two 3\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "unexpected error: {}", err);
    }

    #[test]
    fn test_parse_empty_input() {
        let waypoints = parse_waypoints("# nothing here\n\n".as_bytes()).unwrap();
        assert!(waypoints.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("square.path");
        file.write_str("0 0 0\n10 0 0\n10 10 0\n0 10 0\n").unwrap();

        let waypoints = load_waypoints(file.path()).unwrap();
        assert_eq!(waypoints.len(), 4);
        assert_eq!(waypoints[2], Vec3::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let result = load_waypoints(temp.path().join("missing.path"));
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Failed to open waypoint file"));
        }
    }
}
