use crate::geometry::GridGeometry;
use crate::pattern;
use ahash::AHashSet;

const RANDOM_FILL_RATE: f64 = 0.5;

/// Initial contents of the board, chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// No alive cells.
    Blank,
    /// Every internal cell alive with probability 0.5.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    Random { seed: Option<u64> },
    /// A glider placed at a fixed offset from the padded origin,
    /// diagonally reflected on narrow viewports.
    Pattern,
}

/// Owns the active-cell set and the pause/edit state machine.
///
/// Alive cells are kept as a sparse set of linear hashes: after a few
/// generations most of the grid is dead, so a set of hashes beats a dense
/// table for the steady state of real patterns.
pub struct LifeEngine {
    geometry: GridGeometry,
    alive: AHashSet<u64>,
    paused: bool,
    generation: u64,
}

impl LifeEngine {
    pub fn new(geometry: GridGeometry, seed: Seed) -> Self {
        let alive = match seed {
            Seed::Blank => AHashSet::new(),
            Seed::Random { seed } => Self::random_cells(&geometry, seed),
            Seed::Pattern => pattern::glider(geometry.narrow)
                .into_iter()
                .map(|(row, col)| geometry.hash(row, col))
                .collect(),
        };
        Self {
            geometry,
            alive,
            paused: false,
            generation: 0,
        }
    }

    /// Creates an engine from explicit internal coordinates.
    pub fn from_cells(geometry: GridGeometry, cells: &[(usize, usize)]) -> Self {
        let mut engine = Self::new(geometry, Seed::Blank);
        for &(row, col) in cells {
            assert!(geometry.contains(row as i64, col as i64));
            engine.alive.insert(geometry.hash(row, col));
        }
        engine
    }

    fn random_cells(geometry: &GridGeometry, seed: Option<u64>) -> AHashSet<u64> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        // the full padded space is seeded, so creatures straddling the
        // padding border are represented correctly on the first generation
        let mut alive = AHashSet::new();
        for row in 0..geometry.total_rows {
            for col in 0..geometry.total_cols {
                if rng.gen_bool(RANDOM_FILL_RATE) {
                    alive.insert(geometry.hash(row, col));
                }
            }
        }
        alive
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// State of a single internal cell.
    pub fn get_cell(&self, row: usize, col: usize) -> bool {
        self.alive.contains(&self.geometry.hash(row, col))
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Sets the cell at a visible-space coordinate alive.
    ///
    /// Accepted only while paused; a no-op otherwise. Coordinates outside
    /// the visible rectangle are ignored. Edits only add life, there is no
    /// kill behavior.
    pub fn edit_cell(&mut self, visible_row: usize, visible_col: usize) {
        if !self.paused {
            return;
        }
        if visible_row >= self.geometry.visible_rows || visible_col >= self.geometry.visible_cols {
            return;
        }
        let (row, col) = self.geometry.visible_to_internal(visible_row, visible_col);
        self.alive.insert(self.geometry.hash(row, col));
    }

    fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for dr in [-1, 0, 1] {
            for dc in [-1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (row as i64 + dr, col as i64 + dc);
                // hard boundary, out-of-bounds neighbors are not counted
                if !self.geometry.contains(nr, nc) {
                    continue;
                }
                if self
                    .alive
                    .contains(&self.geometry.hash(nr as usize, nc as usize))
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation; a no-op while paused.
    pub fn advance_generation(&mut self) {
        if self.paused {
            return;
        }
        self.step_once();
    }

    /// Advances one generation regardless of the pause flag.
    pub fn step_once(&mut self) {
        // the next generation is built into a fresh set and swapped in
        // wholesale, so every transition reads the frozen current state
        let mut next = AHashSet::with_capacity(self.alive.len());
        for row in 0..self.geometry.total_rows {
            for col in 0..self.geometry.total_cols {
                let neighbors = self.alive_neighbors(row, col);
                let hash = self.geometry.hash(row, col);
                let alive = if self.alive.contains(&hash) {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
                if alive {
                    next.insert(hash);
                }
            }
        }
        self.alive = next;
        self.generation += 1;
    }

    /// Visible-space coordinates of all alive cells inside the visible
    /// rectangle; the read surface for the renderer.
    pub fn alive_visible_cells(&self) -> Vec<(usize, usize)> {
        self.alive
            .iter()
            .filter_map(|&hash| {
                let (row, col) = self.geometry.unhash(hash);
                self.geometry.internal_to_visible(row, col)
            })
            .collect()
    }
}
