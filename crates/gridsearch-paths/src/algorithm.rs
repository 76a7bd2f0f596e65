//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use gridsearch_core::Coord;

use crate::explorer::{Explorer, Step};
use crate::frontier::Discipline;
use crate::traits::Pather;

/// Depth limit used when none is given for [`Algorithm::Dls`].
pub const DEFAULT_DLS_LIMIT: u32 = 20;
/// Iteration bound used when none is given for [`Algorithm::Iddfs`].
pub const DEFAULT_MAX_DEPTH: u32 = 30;

/// One of the six search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dls { limit: u32 },
    Iddfs { max_depth: u32 },
    Bidirectional,
}

impl Algorithm {
    /// All six strategies, numbered order, default limits.
    pub const ALL: [Algorithm; 6] = [
        Self::Bfs,
        Self::Dfs,
        Self::Ucs,
        Self::Dls {
            limit: DEFAULT_DLS_LIMIT,
        },
        Self::Iddfs {
            max_depth: DEFAULT_MAX_DEPTH,
        },
        Self::Bidirectional,
    ];

    /// Select by menu number `1..=6`. Other numbers select nothing.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=6 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }

    /// Menu number, the inverse of [`from_code`](Self::from_code).
    pub const fn code(self) -> u8 {
        match self {
            Self::Bfs => 1,
            Self::Dfs => 2,
            Self::Ucs => 3,
            Self::Dls { .. } => 4,
            Self::Iddfs { .. } => 5,
            Self::Bidirectional => 6,
        }
    }

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
            Self::Dls { .. } => "dls",
            Self::Iddfs { .. } => "iddfs",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-first",
            Self::Dfs => "Depth-first",
            Self::Ucs => "Uniform-cost",
            Self::Dls { .. } => "Depth-limited",
            Self::Iddfs { .. } => "Iterative deepening",
            Self::Bidirectional => "Bidirectional",
        }
    }

    /// The frontier discipline the strategy runs on. Bidirectional runs two
    /// FIFO queues.
    pub const fn discipline(self) -> Discipline {
        match self {
            Self::Bfs | Self::Bidirectional => Discipline::Fifo,
            Self::Dfs => Discipline::Lifo,
            Self::Ucs => Discipline::Priority,
            Self::Dls { .. } | Self::Iddfs { .. } => Discipline::DepthLifo,
        }
    }

    /// Same strategy with every depth bound replaced.
    pub const fn with_bounds(self, limit: u32, max_depth: u32) -> Self {
        match self {
            Self::Dls { .. } => Self::Dls { limit },
            Self::Iddfs { .. } => Self::Iddfs { max_depth },
            other => other,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dls { limit } => write!(f, "dls:{limit}"),
            Self::Iddfs { max_depth } => write!(f, "iddfs:{max_depth}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts a name or alias, optionally followed by `:N` for the
    /// depth-bounded strategies, e.g. `bfs`, `dls:12`, `iddfs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, bound) = match s.split_once(':') {
            Some((n, b)) => (n, Some(b)),
            None => (s, None),
        };
        let bound = bound
            .map(|b| {
                b.trim()
                    .parse::<u32>()
                    .map_err(|_| ParseAlgorithmError::InvalidBound(s.to_string()))
            })
            .transpose()?;

        let algo = match name.trim().to_ascii_lowercase().as_str() {
            "1" | "bfs" | "breadth-first" => Self::Bfs,
            "2" | "dfs" | "depth-first" => Self::Dfs,
            "3" | "ucs" | "uniform-cost" => Self::Ucs,
            "4" | "dls" | "depth-limited" => Self::Dls {
                limit: bound.unwrap_or(DEFAULT_DLS_LIMIT),
            },
            "5" | "iddfs" | "iterative-deepening" => Self::Iddfs {
                max_depth: bound.unwrap_or(DEFAULT_MAX_DEPTH),
            },
            "6" | "bidirectional" | "bidir" => Self::Bidirectional,
            _ => return Err(ParseAlgorithmError::Unknown(s.to_string())),
        };
        if bound.is_some() && !matches!(algo, Self::Dls { .. } | Self::Iddfs { .. }) {
            return Err(ParseAlgorithmError::UnexpectedBound(s.to_string()));
        }
        Ok(algo)
    }
}

/// Errors from parsing an [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAlgorithmError {
    /// No strategy has this name.
    Unknown(String),
    /// The `:N` suffix is not a non-negative integer.
    InvalidBound(String),
    /// A `:N` suffix on a strategy without a depth bound.
    UnexpectedBound(String),
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(f, "unknown algorithm \u{201c}{s}\u{201d}"),
            Self::InvalidBound(s) => write!(f, "invalid depth bound in \u{201c}{s}\u{201d}"),
            Self::UnexpectedBound(s) => {
                write!(f, "algorithm \u{201c}{s}\u{201d} does not take a depth bound")
            }
        }
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl Explorer {
    /// Run `algorithm` from `start` to `target`.
    pub fn run<P, F>(
        &mut self,
        algorithm: Algorithm,
        start: Coord,
        target: Coord,
        grid: &P,
        progress: F,
    ) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
        F: FnMut(Step),
    {
        match algorithm {
            Algorithm::Bfs => self.bfs(start, target, grid, progress),
            Algorithm::Dfs => self.dfs(start, target, grid, progress),
            Algorithm::Ucs => self.ucs(start, target, grid, progress),
            Algorithm::Dls { limit } => self.dls(start, target, grid, limit, progress),
            Algorithm::Iddfs { max_depth } => self.iddfs(start, target, grid, max_depth, progress),
            Algorithm::Bidirectional => self.bidirectional(start, target, grid, progress),
        }
    }
}
