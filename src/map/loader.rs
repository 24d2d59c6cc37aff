use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use super::grid::TileGrid;
use super::WorldMap;

/// File names for the three draw layers, in draw order.
pub const LAYER_FILES: [&str; 3] = ["map_layer1.csv", "map_layer2.csv", "map_layer3.csv"];

/// File name for the collision grid.
pub const COLLISION_FILE: &str = "map_collision.csv";

/// Error type for CSV map loading
#[derive(Debug)]
pub enum MapError {
    Io(io::Error),
    Empty,
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    BadTile {
        line: usize,
        column: usize,
        source: ParseIntError,
    },
    LayerMismatch {
        file: String,
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl From<io::Error> for MapError {
    fn from(err: io::Error) -> Self {
        MapError::Io(err)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "IO error: {}", e),
            MapError::Empty => write!(f, "Map file contains no rows"),
            MapError::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} columns, expected {}",
                line, found, expected
            ),
            MapError::BadTile {
                line,
                column,
                source,
            } => write!(f, "Bad tile index at row {}, column {}: {}", line, column, source),
            MapError::LayerMismatch {
                file,
                expected,
                found,
            } => write!(
                f,
                "Layer {} is {}x{}, expected {}x{}",
                file, found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            MapError::BadTile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse one CSV layer into a grid. Every row must have the width of the
/// first row; fields may carry surrounding whitespace; blank lines are
/// skipped.
pub fn parse_layer(text: &str) -> Result<TileGrid, MapError> {
    let mut width = 0;
    let mut tiles = Vec::new();
    let mut rows = 0;

    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut row_len = 0;
        for (col_idx, field) in line.split(',').enumerate() {
            let tile = field
                .trim()
                .parse::<i32>()
                .map_err(|source| MapError::BadTile {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    source,
                })?;
            tiles.push(tile);
            row_len += 1;
        }

        if rows == 0 {
            width = row_len;
        } else if row_len != width {
            return Err(MapError::RaggedRow {
                line: line_idx + 1,
                expected: width,
                found: row_len,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(MapError::Empty);
    }

    Ok(TileGrid::from_raw(width, rows, tiles))
}

/// Load one CSV layer from disk.
pub fn load_layer<P: AsRef<Path>>(path: P) -> Result<TileGrid, MapError> {
    let text = fs::read_to_string(path)?;
    parse_layer(&text)
}

/// Load a full map (three draw layers plus collision) from a directory.
/// All four grids must share the dimensions of the first layer.
pub fn load_world_map<P: AsRef<Path>>(dir: P) -> Result<WorldMap, MapError> {
    let dir = dir.as_ref();

    let ground = load_layer(dir.join(LAYER_FILES[0]))?;
    let expected = (ground.width(), ground.height());

    let mut layers = [ground, TileGrid::empty(0, 0), TileGrid::empty(0, 0)];
    for (slot, file) in layers.iter_mut().zip(LAYER_FILES.iter().copied()).skip(1) {
        let layer = load_layer(dir.join(file))?;
        if (layer.width(), layer.height()) != expected {
            return Err(MapError::LayerMismatch {
                file: file.to_string(),
                expected,
                found: (layer.width(), layer.height()),
            });
        }
        *slot = layer;
    }

    let collision = load_layer(dir.join(COLLISION_FILE))?;
    if (collision.width(), collision.height()) != expected {
        return Err(MapError::LayerMismatch {
            file: COLLISION_FILE.to_string(),
            expected,
            found: (collision.width(), collision.height()),
        });
    }

    Ok(WorldMap { layers, collision })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::types::GridPos;

    #[test]
    fn test_parse_simple_layer() {
        let grid = parse_layer("0,1,2\n3,-1,5\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(GridPos::new(0, 0)), Some(0));
        assert_eq!(grid.get(GridPos::new(1, 1)), Some(-1));
        assert_eq!(grid.get(GridPos::new(2, 1)), Some(5));
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_blank_lines() {
        let grid = parse_layer(" 7 , 8 \n\n 9 , 10 \n\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(GridPos::new(1, 1)), Some(10));
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(parse_layer(""), Err(MapError::Empty)));
        assert!(matches!(parse_layer("\n\n"), Err(MapError::Empty)));
    }

    #[test]
    fn test_parse_ragged_row_is_error() {
        let err = parse_layer("0,1,2\n3,4\n").unwrap_err();
        match err {
            MapError::RaggedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_bad_tile_is_error() {
        let err = parse_layer("0,x,2\n").unwrap_err();
        match err {
            MapError::BadTile { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_world_map_checks_dimensions() {
        let dir = std::env::temp_dir().join("forestwalk_loader_test");
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(dir.join(LAYER_FILES[0]), "0,1\n2,3\n").unwrap();
        std::fs::write(dir.join(LAYER_FILES[1]), "-1,-1\n-1,4\n").unwrap();
        std::fs::write(dir.join(LAYER_FILES[2]), "-1,-1\n-1,-1\n").unwrap();
        std::fs::write(dir.join(COLLISION_FILE), "-1,0\n-1,-1\n").unwrap();

        let map = load_world_map(&dir).unwrap();
        assert_eq!(map.width(), 2);
        assert_eq!(map.height(), 2);
        assert!(map.is_blocked(GridPos::new(1, 0)));
        assert!(!map.is_blocked(GridPos::new(0, 1)));

        // A collision grid of the wrong size is rejected
        std::fs::write(dir.join(COLLISION_FILE), "-1,0,0\n-1,-1,0\n").unwrap();
        assert!(matches!(
            load_world_map(&dir),
            Err(MapError::LayerMismatch { .. })
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
