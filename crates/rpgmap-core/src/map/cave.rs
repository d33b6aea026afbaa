//! Cave generation with a cellular automaton
//!
//! Random noise is seeded over the grid and then smoothed: a cell becomes
//! room when at least five of the nine cells in its 3x3 block are room.
//! Every pass reads the previous generation and writes a fresh one.

use crate::rng::MapRng;

use super::cell::AreaType;
use super::grid::Grid;

/// Default seeding limit for caves (45% room)
pub const CAVE_SEED_LIMIT: u32 = 55;

/// Seeding limit for the annealed noise pattern (20% room)
const ANNEAL_SEED_LIMIT: u32 = 80;

/// Room threshold over the 3x3 block, centre included
const BIRTH_THRESHOLD: usize = 5;

impl Grid {
    /// Fill the grid with noise
    ///
    /// Every cell draws from `1..=100` and becomes room when the draw exceeds
    /// `limit`, otherwise `Nothing`. A higher limit means fewer rooms.
    pub fn generate_random_cells(&mut self, limit: u32, rng: &mut MapRng) {
        for col in &mut self.cells {
            for cell in col.iter_mut() {
                cell.area = if rng.rnd(100) > limit {
                    AreaType::Room
                } else {
                    AreaType::Nothing
                };
            }
        }
    }

    /// Sparse noise with isolated cells removed
    ///
    /// Seeds at limit 80, then clears interior room cells whose four
    /// orthogonal neighbours are all empty.
    pub fn generate_annealed_random_cells(&mut self, rng: &mut MapRng) {
        self.generate_random_cells(ANNEAL_SEED_LIMIT, rng);

        let mut next = self.cells.clone();
        for x in 1..self.width().saturating_sub(1) {
            for y in 1..self.height().saturating_sub(1) {
                let alone = self.cells[x - 1][y].is_empty()
                    && self.cells[x + 1][y].is_empty()
                    && self.cells[x][y - 1].is_empty()
                    && self.cells[x][y + 1].is_empty();
                if alone {
                    next[x][y].area = AreaType::Nothing;
                }
            }
        }
        self.cells = next;
    }

    /// Whether a cell is room in the next generation
    ///
    /// Edge cells never are.
    pub fn cave_anneal_cell(&self, x: usize, y: usize) -> bool {
        if self.on_edge(x, y) {
            return false;
        }
        let mut count = 0;
        for cx in x - 1..=x + 1 {
            for cy in y - 1..=y + 1 {
                if self.is_room_at(cx, cy) {
                    count += 1;
                }
            }
        }
        count >= BIRTH_THRESHOLD
    }

    /// One smoothing pass over the whole grid
    pub fn generate_cave_iteration(&mut self) {
        let mut next = self.cells.clone();
        for (x, col) in next.iter_mut().enumerate() {
            for (y, cell) in col.iter_mut().enumerate() {
                cell.area = if self.cave_anneal_cell(x, y) {
                    AreaType::Room
                } else {
                    AreaType::Nothing
                };
            }
        }
        self.cells = next;
    }

    /// Seed, smooth `iterations` times, then drop orphan rooms
    pub fn generate_cave(&mut self, iterations: usize, seed_limit: u32, rng: &mut MapRng) {
        self.generate_random_cells(seed_limit, rng);
        for _ in 0..iterations {
            self.generate_cave_iteration();
        }
        let removed = self.remove_orphans();
        log::debug!(
            "cave after {iterations} passes: {} room cells, {removed} orphans removed",
            self.count_area(AreaType::Room)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Cell;

    #[test]
    fn test_limit_100_gives_no_rooms() {
        let mut grid = Grid::new(40, 40);
        let mut rng = MapRng::new(42);
        grid.generate_random_cells(100, &mut rng);
        assert_eq!(grid.count_area(AreaType::Room), 0);
    }

    #[test]
    fn test_limit_0_gives_all_rooms() {
        let mut grid = Grid::new(20, 20);
        let mut rng = MapRng::new(42);
        grid.generate_random_cells(0, &mut rng);
        assert_eq!(grid.count_area(AreaType::Room), 400);
    }

    #[test]
    fn test_limit_1_probability() {
        let mut grid = Grid::new(1, 1);
        let mut rng = MapRng::new(42);
        let trials = 100_000;
        let mut rooms = 0;
        for _ in 0..trials {
            grid.generate_random_cells(1, &mut rng);
            if grid.get((0, 0)).unwrap().is_room() {
                rooms += 1;
            }
        }
        let fraction = rooms as f64 / trials as f64;
        assert!((fraction - 0.99).abs() < 0.005, "fraction was {fraction}");
    }

    #[test]
    fn test_seeding_overwrites_previous_rooms() {
        let mut grid = Grid::new(10, 10);
        grid.place_room((0, 0), (10, 10)).unwrap();
        let mut rng = MapRng::new(42);
        grid.generate_random_cells(100, &mut rng);
        assert_eq!(grid.count_area(AreaType::Room), 0);
    }

    #[test]
    fn test_full_grid_smoothing() {
        let mut grid = Grid::new(8, 6);
        grid.place_room((0, 0), (8, 6)).unwrap();
        grid.generate_cave_iteration();

        for x in 0..8 {
            for y in 0..6 {
                let room = grid.get((x as i32, y as i32)).unwrap().is_room();
                assert_eq!(room, !grid.on_edge(x, y), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_smoothing_reads_previous_generation() {
        // Plus shape: only the centre block holds 5 rooms. Scanning in place
        // would clear the left and top arms first and lose the centre too.
        let mut grid = Grid::new(7, 7);
        for p in [(3, 2), (2, 3), (3, 3), (4, 3), (3, 4)] {
            grid.set(p, Cell::room()).unwrap();
        }
        grid.generate_cave_iteration();

        assert!(grid.get((3, 3)).unwrap().is_room());
        assert_eq!(grid.count_area(AreaType::Room), 1);
    }

    #[test]
    fn test_anneal_threshold() {
        let mut grid = Grid::new(5, 5);
        for p in [(1, 1), (2, 1), (3, 1), (1, 2)] {
            grid.set(p, Cell::room()).unwrap();
        }
        assert!(!grid.cave_anneal_cell(2, 2));
        grid.set((3, 3), Cell::room()).unwrap();
        assert!(grid.cave_anneal_cell(2, 2));
        assert!(!grid.cave_anneal_cell(0, 2));
    }

    #[test]
    fn test_generate_cave_has_no_small_components() {
        let mut grid = Grid::new(60, 40);
        let mut rng = MapRng::new(42);
        grid.generate_cave(4, CAVE_SEED_LIMIT, &mut rng);

        for region in grid.partition_regions() {
            assert!(region.len() >= 15);
        }
        for x in 0..60 {
            assert!(!grid.get((x, 0)).unwrap().is_room());
            assert!(!grid.get((x, 39)).unwrap().is_room());
        }
    }

    #[test]
    fn test_generate_cave_is_deterministic() {
        let mut a = Grid::new(50, 30);
        let mut b = Grid::new(50, 30);
        a.generate_cave(3, CAVE_SEED_LIMIT, &mut MapRng::new(99));
        b.generate_cave(3, CAVE_SEED_LIMIT, &mut MapRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_annealed_cells_have_no_isolated_interior_rooms() {
        let mut grid = Grid::new(30, 30);
        let mut rng = MapRng::new(3);
        grid.generate_annealed_random_cells(&mut rng);
        for x in 1..29usize {
            for y in 1..29usize {
                if grid.cells[x][y].is_room() {
                    let lonely = grid.cells[x - 1][y].is_empty()
                        && grid.cells[x + 1][y].is_empty()
                        && grid.cells[x][y - 1].is_empty()
                        && grid.cells[x][y + 1].is_empty();
                    assert!(!lonely, "isolated room at ({x}, {y})");
                }
            }
        }
    }
}
