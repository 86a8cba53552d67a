use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::heuristic::HeuristicKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseConfigError {
    #[error("unknown search algorithm `{0}`, expected one of: astar, dijkstra, jps")]
    UnknownAlgorithm(String),
    #[error("unknown heuristic `{0}`, expected one of: zero, euclidean, octile")]
    UnknownHeuristic(String),
}

/// Which search expands the open set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Plain A* over the full 8-neighbourhood.
    AStar,
    /// Jump point search.
    #[default]
    Jps,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::AStar => "astar",
            Algorithm::Jps => "jps",
        })
    }
}

impl FromStr for Algorithm {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Algorithm::AStar),
            "jps" => Ok(Algorithm::Jps),
            _ => Err(ParseConfigError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Algorithm and open-set heuristic used by [Pathfinder](crate::Pathfinder). For JPS the heuristic
/// only orders the open set; jump costs are always octile distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub heuristic: HeuristicKind,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, heuristic: HeuristicKind) -> SearchConfig {
        SearchConfig {
            algorithm,
            heuristic,
        }
    }
    /// A* with the zero heuristic.
    pub fn dijkstra() -> SearchConfig {
        SearchConfig::new(Algorithm::AStar, HeuristicKind::Zero)
    }
    pub fn astar_euclidean() -> SearchConfig {
        SearchConfig::new(Algorithm::AStar, HeuristicKind::Euclidean)
    }
    pub fn astar_octile() -> SearchConfig {
        SearchConfig::new(Algorithm::AStar, HeuristicKind::Octile)
    }
    pub fn jps() -> SearchConfig {
        SearchConfig::new(Algorithm::Jps, HeuristicKind::Euclidean)
    }
}

impl FromStr for SearchConfig {
    type Err = ParseConfigError;

    /// Parses `algorithm` or `algorithm:heuristic`, e.g. `jps`, `astar:octile` or `dijkstra`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (algorithm, heuristic) = match s.split_once(':') {
            Some((a, h)) => (a, Some(h)),
            None => (s, None),
        };
        if algorithm.eq_ignore_ascii_case("dijkstra") {
            return match heuristic {
                None => Ok(SearchConfig::dijkstra()),
                Some(h) => Err(ParseConfigError::UnknownHeuristic(h.to_owned())),
            };
        }
        let algorithm: Algorithm = algorithm.parse()?;
        let heuristic = heuristic
            .map(str::parse::<HeuristicKind>)
            .transpose()?
            .unwrap_or_default();
        Ok(SearchConfig::new(algorithm, heuristic))
    }
}
