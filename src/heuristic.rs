//! Distance estimates between two cells. All of them are admissible on a grid where straight moves
//! cost 1 and diagonal moves cost √2, so A* stays optimal whichever one is picked.
use core::f64::consts::SQRT_2;
use core::fmt;
use core::str::FromStr;

use grid_util::point::Point;

use crate::ParseConfigError;

/// Strategy for estimating the remaining distance from `from` to `to`.
pub trait Heuristic {
    fn estimate(&self, from: &Point, to: &Point) -> f64;
}

fn deltas(p1: &Point, p2: &Point) -> (f64, f64) {
    (
        (p1.x - p2.x).abs() as f64,
        (p1.y - p2.y).abs() as f64,
    )
}

/// Always 0, which turns A* into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _: &Point, _: &Point) -> f64 {
        0.0
    }
}

/// Straight-line distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn estimate(&self, from: &Point, to: &Point) -> f64 {
        let (dx, dy) = deltas(from, to);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Octile (diagonal) distance: the length of the path taking as many diagonal steps as possible
/// before going straight. Exact for any two cells joined by an unobstructed straight or diagonal
/// run, which is why jump point search also uses it as the cost of a jump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Octile;

impl Heuristic for Octile {
    fn estimate(&self, from: &Point, to: &Point) -> f64 {
        octile_distance(from, to)
    }
}

pub fn octile_distance(from: &Point, to: &Point) -> f64 {
    let (dx, dy) = deltas(from, to);
    (dx + dy) + (SQRT_2 - 2.0) * dx.min(dy)
}

/// Runtime selection among the heuristics above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    Zero,
    #[default]
    Euclidean,
    Octile,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, from: &Point, to: &Point) -> f64 {
        match self {
            HeuristicKind::Zero => Zero.estimate(from, to),
            HeuristicKind::Euclidean => Euclidean.estimate(from, to),
            HeuristicKind::Octile => Octile.estimate(from, to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::Octile => "octile",
        };
        f.write_str(name)
    }
}

impl FromStr for HeuristicKind {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" | "dijkstra" => Ok(HeuristicKind::Zero),
            "euclidean" => Ok(HeuristicKind::Euclidean),
            "octile" | "diagonal" => Ok(HeuristicKind::Octile),
            _ => Err(ParseConfigError::UnknownHeuristic(s.to_owned())),
        }
    }
}
