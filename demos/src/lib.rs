//! Interactive exploration session.
//!
//! [`Session`] is the state machine behind a grid explorer front end: it
//! owns the grid, the start and target cells, the agent position and the
//! editing modes, and runs searches on request. It never draws or sleeps;
//! front ends read [`Session::status`], [`Session::report`] and
//! [`Session::render`] after each call.

use std::fmt;
use std::str::FromStr;

use gridsearch_core::Coord;
use gridsearch_env::{ConfigError, EnvConfig, Grid};
use gridsearch_paths::{Algorithm, Explorer, SearchStats, Step};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed used by [`Session::new`].
pub const DEFAULT_SEED: u64 = 42;

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

/// What a click on the grid does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Toggle walls.
    #[default]
    Wall,
    /// Move the start cell.
    Start,
    /// Move the target cell.
    Target,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wall => "WALL",
            Self::Start => "START",
            Self::Target => "TARGET",
        })
    }
}

/// The obstacle layout currently loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    /// Hand-drawn walls.
    #[default]
    Custom,
    /// A generated maze.
    Maze,
    /// A trap around the start cell.
    Trap,
}

impl MapMode {
    /// The layout that follows this one in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Custom => Self::Maze,
            Self::Maze => Self::Trap,
            Self::Trap => Self::Custom,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom Wall",
            Self::Maze => "Auto Maze",
            Self::Trap => "Trap Case",
        }
    }
}

impl FromStr for MapMode {
    type Err = ParseMapModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "custom" | "wall" => Ok(Self::Custom),
            "maze" => Ok(Self::Maze),
            "trap" => Ok(Self::Trap),
            _ => Err(ParseMapModeError(s.to_string())),
        }
    }
}

/// Error from parsing a [`MapMode`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMapModeError(pub String);

impl fmt::Display for ParseMapModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown map mode \u{201c}{}\u{201d} (expected custom, maze or trap)",
            self.0
        )
    }
}

impl std::error::Error for ParseMapModeError {}

/// The one-line status shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Searching,
    TargetReached,
    NoPathFound,
    DrawWalls,
    SetStart,
    SetTarget,
    MazeGenerated,
    TrapGenerated,
    MapCleared,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ready => "Ready",
            Self::Searching => "Searching...",
            Self::TargetReached => "Target Reached!",
            Self::NoPathFound => "No Path Found!",
            Self::DrawWalls => "Mode: Draw Walls",
            Self::SetStart => "Mode: Set Start",
            Self::SetTarget => "Mode: Set Target",
            Self::MazeGenerated => "Maze Generated",
            Self::TrapGenerated => "Trap Generated",
            Self::MapCleared => "Map Cleared",
        })
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Outcome of one [`Session::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// Where the search began.
    pub from: Coord,
    pub path: Option<Vec<Coord>>,
    pub stats: SearchStats,
    /// Explored set from the last progress notification.
    pub explored: Vec<Coord>,
    /// Frontier from the last progress notification.
    pub frontier: Vec<Coord>,
}

impl RunReport {
    /// Number of moves on the path, if one was found.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

pub struct Session {
    config: EnvConfig,
    grid: Grid,
    explorer: Explorer,
    start: Coord,
    target: Coord,
    current: Coord,
    edit_mode: EditMode,
    map_mode: MapMode,
    status: Status,
    report: Option<RunReport>,
    rng: StdRng,
}

impl Session {
    /// Create a session with [`DEFAULT_SEED`] for maze generation.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, DEFAULT_SEED)
    }

    pub fn with_seed(config: EnvConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.build_grid();
        Ok(Self {
            grid,
            explorer: Explorer::new(),
            start: config.start,
            target: config.target,
            current: config.start,
            edit_mode: EditMode::Wall,
            map_mode: MapMode::Custom,
            status: Status::Ready,
            report: None,
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn target(&self) -> Coord {
        self.target
    }

    /// The agent position, where the next search begins.
    pub fn current(&self) -> Coord {
        self.current
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn map_mode(&self) -> MapMode {
        self.map_mode
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The last search, cleared by any map change.
    pub fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Switch to start placement, or back to wall drawing if already there.
    pub fn toggle_start_mode(&mut self) {
        self.switch_mode(EditMode::Start, Status::SetStart);
    }

    /// Switch to target placement, or back to wall drawing if already there.
    pub fn toggle_target_mode(&mut self) {
        self.switch_mode(EditMode::Target, Status::SetTarget);
    }

    fn switch_mode(&mut self, mode: EditMode, status: Status) {
        if self.edit_mode == mode {
            self.edit_mode = EditMode::Wall;
            self.status = Status::DrawWalls;
        } else {
            self.edit_mode = mode;
            self.status = status;
        }
    }

    /// Apply a click on `(row, col)` according to the edit mode. Returns
    /// whether anything changed.
    ///
    /// Walls never cover the start or target, and neither endpoint can be
    /// placed on a wall or on the other endpoint.
    pub fn click(&mut self, row: i32, col: i32) -> bool {
        let p = Coord::new(row, col);
        if !self.grid.contains(p) {
            return false;
        }
        match self.edit_mode {
            EditMode::Start => {
                if p == self.target || self.grid.is_blocked(p) {
                    return false;
                }
                self.start = p;
                self.current = p;
            }
            EditMode::Target => {
                if p == self.start || self.grid.is_blocked(p) {
                    return false;
                }
                self.target = p;
            }
            EditMode::Wall => {
                if p == self.start || p == self.target {
                    return false;
                }
                self.grid.toggle_obstacle(row, col);
            }
        }
        true
    }

    /// Replace the grid, keeping the endpoints. Fails if either endpoint
    /// falls outside the new grid.
    pub fn set_grid(&mut self, grid: Grid) -> Result<(), ConfigError> {
        let config = EnvConfig {
            size: grid.size(),
            start: self.start,
            target: self.target,
            ..self.config.clone()
        };
        config.validate()?;
        self.config.size = grid.size();
        self.grid = grid;
        self.map_mode = MapMode::Custom;
        self.current = self.start;
        self.report = None;
        Ok(())
    }

    /// Drop a transient obstacle on a free cell other than the endpoints.
    pub fn add_dynamic_obstacle(&mut self, p: Coord) -> bool {
        if p == self.start || p == self.target {
            return false;
        }
        self.grid.add_dynamic_obstacle(p)
    }

    /// Remove every transient obstacle.
    pub fn clean_dynamic(&mut self) {
        self.grid.clean_dynamic();
    }

    /// Clear the grid and return the agent to the start.
    pub fn reset(&mut self) {
        self.grid.reset_grid();
        self.map_mode = MapMode::Custom;
        self.current = self.start;
        self.report = None;
    }

    /// Load the next layout: custom walls, then a maze, then a trap
    /// around the start, then an empty grid again.
    pub fn cycle_map(&mut self) {
        self.map_mode = self.map_mode.next();
        match self.map_mode {
            MapMode::Maze => {
                self.grid
                    .generate_maze_with_anchors(&mut self.rng, &[self.start, self.target]);
                self.status = Status::MazeGenerated;
            }
            MapMode::Trap => {
                self.grid.generate_trap(self.start);
                self.status = Status::TrapGenerated;
            }
            MapMode::Custom => {
                self.grid.reset_grid();
                self.status = Status::MapCleared;
            }
        }
        log::info!("map: {}", self.map_mode.label());
        self.current = self.start;
        self.report = None;
    }

    // -----------------------------------------------------------------------
    // Searching
    // -----------------------------------------------------------------------

    /// Run the strategy with menu number `code` using the configured depth
    /// bounds. Unknown codes run nothing and return `None`.
    pub fn run_code<F: FnMut(&Step)>(&mut self, code: u8, progress: F) -> Option<&RunReport> {
        let algorithm = self.config.bounded(Algorithm::from_code(code)?);
        Some(self.run(algorithm, progress))
    }

    /// Search from the agent position to the target, reporting each step
    /// to `progress`. On success the agent moves to the target.
    ///
    /// An agent already on the target starts over from the start cell.
    pub fn run<F: FnMut(&Step)>(&mut self, algorithm: Algorithm, mut progress: F) -> &RunReport {
        self.status = Status::Searching;
        if self.current == self.target {
            self.current = self.start;
        }
        let from = self.current;

        let mut last = None;
        let path = self.explorer.run(algorithm, from, self.target, &self.grid, |step| {
            progress(&step);
            last = Some(step);
        });
        let stats = self.explorer.stats();
        let (explored, frontier) = last.map_or_else(
            || (vec![from], Vec::new()),
            |s| (s.explored, s.frontier),
        );

        match &path {
            Some(p) => {
                log::info!(
                    "{}: {} moves, {} explored",
                    algorithm.label(),
                    p.len() - 1,
                    explored.len()
                );
                self.current = self.target;
                self.status = Status::TargetReached;
            }
            None => {
                log::info!("{}: no path, {} explored", algorithm.label(), explored.len());
                self.status = Status::NoPathFound;
            }
        }
        self.report.insert(RunReport {
            algorithm,
            from,
            path,
            stats,
            explored,
            frontier,
        })
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Draw the grid as text.
    ///
    /// `S` start, `T` target, `@` agent, `#` wall, `%` transient obstacle,
    /// `*` path, `+` frontier, `x` explored, `.` free.
    pub fn render(&self) -> String {
        let (path, frontier, explored): (&[Coord], &[Coord], &[Coord]) = match &self.report {
            Some(r) => (r.path.as_deref().unwrap_or(&[]), &r.frontier, &r.explored),
            None => (&[], &[], &[]),
        };
        self.grid.to_ascii_with(|p, cell| {
            if p == self.start {
                'S'
            } else if p == self.target {
                'T'
            } else if p == self.current {
                '@'
            } else if self.grid.dynamic_obstacles().contains(&p) {
                '%'
            } else if cell.is_blocked() {
                '#'
            } else if path.contains(&p) {
                '*'
            } else if frontier.contains(&p) {
                '+'
            } else if explored.contains(&p) {
                'x'
            } else {
                '.'
            }
        })
    }
}

/// Read an [`EnvConfig`] from JSON. Missing fields take their defaults.
pub fn load_config(json: &str) -> Result<EnvConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    fn small() -> Session {
        Session::new(EnvConfig {
            size: 5,
            start: c(0, 0),
            target: c(4, 4),
            wall: None,
            ..EnvConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn defaults_follow_config() {
        let s = Session::new(EnvConfig::default()).unwrap();
        assert_eq!(s.start(), c(2, 2));
        assert_eq!(s.target(), c(17, 17));
        assert_eq!(s.current(), s.start());
        assert_eq!(s.grid().obstacles().len(), 10);
        assert_eq!(s.status(), Status::Ready);
        assert_eq!(s.edit_mode(), EditMode::Wall);
        assert_eq!(s.map_mode(), MapMode::Custom);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = EnvConfig {
            size: 4,
            ..EnvConfig::default()
        };
        assert!(Session::new(cfg).is_err());
    }

    #[test]
    fn open_grid_run_moves_agent() {
        let mut s = small();
        let mut steps = 0;
        let report = s.run(Algorithm::Bfs, |_| steps += 1);
        assert_eq!(report.moves(), Some(4));
        assert_eq!(report.from, c(0, 0));
        assert_eq!(report.stats.discovered, steps);
        assert!(report.stats.found);
        assert_eq!(s.current(), c(4, 4));
        assert_eq!(s.status(), Status::TargetReached);
        assert_eq!(s.status().to_string(), "Target Reached!");
    }

    #[test]
    fn second_run_restarts_from_start() {
        let mut s = small();
        s.run(Algorithm::Dfs, |_| {});
        assert_eq!(s.current(), s.target());
        let report = s.run(Algorithm::Ucs, |_| {});
        assert_eq!(report.from, c(0, 0));
        assert_eq!(report.moves(), Some(4));
    }

    #[test]
    fn sealed_target_reports_no_path() {
        let mut s = small();
        s.click(3, 4);
        s.click(3, 3);
        s.click(4, 3);
        let report = s.run(Algorithm::Bidirectional, |_| {});
        assert_eq!(report.path, None);
        assert!(!report.stats.found);
        assert_eq!(s.current(), c(0, 0));
        assert_eq!(s.status(), Status::NoPathFound);
    }

    #[test]
    fn run_code_uses_configured_bounds() {
        let mut s = Session::new(EnvConfig {
            size: 5,
            start: c(0, 0),
            target: c(4, 4),
            wall: None,
            dls_limit: 3,
            ..EnvConfig::default()
        })
        .unwrap();
        let report = s.run_code(4, |_| {}).unwrap();
        assert_eq!(report.algorithm, Algorithm::Dls { limit: 3 });
        assert_eq!(report.path, None);
        assert!(s.run_code(0, |_| {}).is_none());
        assert!(s.run_code(7, |_| {}).is_none());
        assert_eq!(s.status(), Status::NoPathFound);
    }

    #[test]
    fn walls_never_cover_endpoints() {
        let mut s = small();
        assert!(!s.click(0, 0));
        assert!(!s.click(4, 4));
        assert!(!s.click(5, 0));
        assert!(s.click(1, 1));
        assert!(s.grid().is_blocked(c(1, 1)));
        assert!(s.click(1, 1));
        assert!(!s.grid().is_blocked(c(1, 1)));
    }

    #[test]
    fn endpoint_placement_rules() {
        let mut s = small();
        s.click(2, 2);
        s.toggle_start_mode();
        assert_eq!(s.edit_mode(), EditMode::Start);
        assert_eq!(s.status(), Status::SetStart);
        assert!(!s.click(2, 2));
        assert!(!s.click(4, 4));
        assert!(s.click(1, 0));
        assert_eq!(s.start(), c(1, 0));
        assert_eq!(s.current(), c(1, 0));

        s.toggle_target_mode();
        assert_eq!(s.edit_mode(), EditMode::Target);
        assert!(!s.click(1, 0));
        assert!(s.click(3, 3));
        assert_eq!(s.target(), c(3, 3));

        s.toggle_target_mode();
        assert_eq!(s.edit_mode(), EditMode::Wall);
        assert_eq!(s.status().to_string(), "Mode: Draw Walls");
    }

    #[test]
    fn map_cycle() {
        let mut s = Session::with_seed(EnvConfig::default(), 7).unwrap();
        s.cycle_map();
        assert_eq!(s.map_mode(), MapMode::Maze);
        assert_eq!(s.status(), Status::MazeGenerated);
        assert!(!s.grid().is_blocked(s.start()));
        assert!(!s.grid().is_blocked(s.target()));
        assert!(s.run(Algorithm::Bfs, |_| {}).path.is_some());

        s.cycle_map();
        assert_eq!(s.map_mode(), MapMode::Trap);
        assert_eq!(s.status(), Status::TrapGenerated);
        assert_eq!(s.current(), s.start());
        assert!(s.report().is_none());
        assert_eq!(s.grid().obstacles().len(), 7);
        assert!(!s.grid().is_blocked(c(2, 1)));

        s.cycle_map();
        assert_eq!(s.map_mode(), MapMode::Custom);
        assert_eq!(s.status(), Status::MapCleared);
        assert!(s.grid().obstacles().is_empty());
    }

    #[test]
    fn trap_escape_goes_through_opening() {
        let mut s = Session::new(EnvConfig::default()).unwrap();
        s.cycle_map();
        s.cycle_map();
        let path = s.run(Algorithm::Bfs, |_| {}).path.clone().unwrap();
        assert_eq!(path[1], c(2, 1));
    }

    #[test]
    fn dynamic_obstacles() {
        let mut s = small();
        assert!(!s.add_dynamic_obstacle(c(0, 0)));
        assert!(s.add_dynamic_obstacle(c(2, 2)));
        assert!(s.render().contains('%'));
        s.clean_dynamic();
        assert!(s.grid().dynamic_obstacles().is_empty());
        assert!(!s.render().contains('%'));
    }

    #[test]
    fn reset_clears_grid_and_report() {
        let mut s = Session::new(EnvConfig::default()).unwrap();
        s.run(Algorithm::Bfs, |_| {});
        s.reset();
        assert!(s.grid().obstacles().is_empty());
        assert_eq!(s.current(), s.start());
        assert!(s.report().is_none());
    }

    #[test]
    fn render_overlays() {
        let mut s = Session::new(EnvConfig {
            size: 3,
            start: c(0, 0),
            target: c(2, 2),
            wall: None,
            ..EnvConfig::default()
        })
        .unwrap();
        assert_eq!(s.render(), "S..\n...\n..T");
        s.click(0, 1);
        assert_eq!(s.render(), "S#.\n...\n..T");
        s.run(Algorithm::Bfs, |_| {});
        // The agent sits on the target after a successful run.
        assert_eq!(s.render().lines().nth(1).map(|l| &l[1..2]), Some("*"));
    }

    #[test]
    fn loaded_layout_replaces_grid() {
        let mut s = small();
        let room = Grid::from_ascii(".....\n.###.\n.....\n.....\n.....").unwrap();
        s.set_grid(room).unwrap();
        assert_eq!(s.grid().obstacles().len(), 3);
        assert!(s.run(Algorithm::Bfs, |_| {}).path.is_some());

        let tiny = Grid::from_ascii("..\n..").unwrap();
        assert!(s.set_grid(tiny).is_err());
        assert_eq!(s.grid().size(), 5);
    }

    #[test]
    fn map_mode_names() {
        assert_eq!("maze".parse(), Ok(MapMode::Maze));
        assert_eq!(" Trap ".parse(), Ok(MapMode::Trap));
        assert_eq!("custom".parse(), Ok(MapMode::Custom));
        assert!("cave".parse::<MapMode>().is_err());
        assert_eq!(MapMode::Trap.next(), MapMode::Custom);
    }

    #[test]
    fn config_from_json() {
        let cfg = load_config(r#"{"size": 8, "target": {"row": 6, "col": 6}}"#).unwrap();
        assert_eq!(cfg.size, 8);
        assert_eq!(cfg.target, c(6, 6));
        assert_eq!(cfg.dls_limit, 20);
        assert!(load_config("{").is_err());
    }
}
