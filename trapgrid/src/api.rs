//! Request and response shapes for the generate and search operations.
//!
//! Grids travel as row-major rows of cell codes; coordinates as `[x, y]`
//! with x the column and y the row.

use serde::{Deserialize, Serialize};
use trapgrid_core::{Grid, Point};
use trapgrid_paths::{Search, SearchStats};

use crate::error::{Error, Result};
use crate::layout::{Layout, corners};
use crate::session::{Session, search_layout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub grid_size: i64,
    pub trap_count: i64,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            grid_size: 10,
            trap_count: 15,
        }
    }
}

impl GenerateRequest {
    /// Checked `(grid_size, trap_count)`.
    pub fn params(&self) -> Result<(i32, usize)> {
        let size = i32::try_from(self.grid_size)
            .ok()
            .filter(|&n| n >= 2 && n <= 1 << 12)
            .ok_or_else(|| {
                Error::InvalidInput(format!("grid_size {} out of range", self.grid_size))
            })?;
        let traps = usize::try_from(self.trap_count).map_err(|_| {
            Error::InvalidInput(format!("trap_count {} is negative", self.trap_count))
        })?;
        Ok((size, traps))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub grid: Vec<Vec<i32>>,
    pub start: [i32; 2],
    pub goal: [i32; 2],
}

impl From<&Layout> for GenerateResponse {
    fn from(layout: &Layout) -> Self {
        Self {
            grid: layout.grid().to_rows(),
            start: layout.start().into(),
            goal: layout.goal().into(),
        }
    }
}

/// A grid to search. Start and goal default to the generator's corners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub grid: Vec<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<[i32; 2]>,
}

impl SearchRequest {
    /// Decode and validate into a searchable layout.
    pub fn into_layout(self) -> Result<Layout> {
        let grid = Grid::from_rows(&self.grid)?;
        let (start, goal) = corners(grid.size());
        Layout::new(
            grid,
            self.start.map_or(start, Point::from),
            self.goal.map_or(goal, Point::from),
        )
    }
}

impl From<GenerateResponse> for SearchRequest {
    fn from(g: GenerateResponse) -> Self {
        Self {
            grid: g.grid,
            start: Some(g.start),
            goal: Some(g.goal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub path: Vec<[i32; 2]>,
    pub visited: Vec<[i32; 2]>,
    pub stats: SearchStats,
}

impl From<Search> for SearchResponse {
    fn from(s: Search) -> Self {
        Self {
            path: s.path.into_iter().map(Into::into).collect(),
            visited: s.visited.into_iter().map(Into::into).collect(),
            stats: s.stats,
        }
    }
}

/// Generate a layout into `session` and describe it.
pub fn generate(session: &mut Session, req: &GenerateRequest) -> Result<GenerateResponse> {
    let (size, traps) = req.params()?;
    session.generate(size, traps).map(GenerateResponse::from)
}

/// Search a caller-supplied grid.
pub fn search(req: SearchRequest) -> Result<SearchResponse> {
    let layout = req.into_layout()?;
    Ok(search_layout(&layout).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    fn session() -> Session {
        Session::new(&GenerationConfig {
            seed: Some(17),
            ..GenerationConfig::default()
        })
    }

    #[test]
    fn generate_request_defaults() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, GenerateRequest::default());
        assert_eq!(req.params().unwrap(), (10, 15));
    }

    #[test]
    fn out_of_range_requests() {
        for (grid_size, trap_count) in [(0, 0), (-5, 0), (1, 0), (4, -1), (i64::MAX, 0)] {
            let req = GenerateRequest {
                grid_size,
                trap_count,
            };
            assert!(matches!(req.params(), Err(Error::InvalidInput(_))));
        }
        let too_many = GenerateRequest {
            grid_size: 4,
            trap_count: 14,
        };
        assert!(matches!(
            generate(&mut session(), &too_many),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn generate_then_search_json() {
        let mut s = session();
        let generated = generate(&mut s, &GenerateRequest::default()).unwrap();
        assert_eq!(generated.start, [0, 0]);
        assert_eq!(generated.goal, [9, 9]);
        assert_eq!(generated.grid.len(), 10);
        let traps: usize = generated
            .grid
            .iter()
            .map(|row| row.iter().filter(|&&c| c == 1).count())
            .sum();
        assert_eq!(traps, 15);

        let json = serde_json::to_string(&generated).unwrap();
        let req: SearchRequest = serde_json::from_str(&json).unwrap();
        let resp = search(req).unwrap();
        assert_eq!(resp.path.first(), Some(&[0, 0]));
        assert_eq!(resp.path.last(), Some(&[9, 9]));
        assert_eq!(resp.stats.path_length, resp.path.len());
        assert_eq!(resp.stats.explored, resp.visited.len());

        let out = serde_json::to_value(&resp).unwrap();
        assert!(out["stats"]["explored"].is_u64());
        assert!(out["stats"]["pruned"].is_u64());
        assert!(out["stats"]["path_length"].is_u64());
        assert!(out["path"][0].is_array());
    }

    #[test]
    fn search_with_grid_only() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"grid": [[0, 0, 0], [1, 1, 0], [0, 0, 0]]}"#).unwrap();
        let resp = search(req).unwrap();
        assert_eq!(resp.path, vec![[0, 0], [1, 0], [2, 0], [2, 1], [2, 2]]);
    }

    #[test]
    fn unsolvable_grid_is_not_an_error() {
        let req = SearchRequest {
            grid: vec![vec![0, 1], vec![1, 0]],
            start: None,
            goal: None,
        };
        let resp = search(req).unwrap();
        assert!(resp.path.is_empty());
        assert_eq!(resp.stats.path_length, 0);
        assert_eq!(resp.stats.explored, 1);
        assert_eq!(resp.stats.pruned, 2);
    }

    #[test]
    fn malformed_grids_are_rejected() {
        let cases = [
            r#"{"grid": []}"#,
            r#"{"grid": [[0, 0], [0]]}"#,
            r#"{"grid": [[0, 3], [0, 0]]}"#,
            r#"{"grid": [[1, 0], [0, 0]]}"#,
            r#"{"grid": [[0, 0], [0, 0]], "goal": [5, 5]}"#,
        ];
        for case in cases {
            let req: SearchRequest = serde_json::from_str(case).unwrap();
            assert!(
                matches!(search(req), Err(Error::InvalidInput(_))),
                "accepted {case}"
            );
        }
    }
}
