//! Whole-map generators
//!
//! Build on the placement and connectivity passes: scatter rooms or grow a
//! cave, then link the disconnected regions with hallways.

use crate::config::DungeonConfig;
use crate::rng::MapRng;

use super::grid::Grid;
use super::route::RouteKind;

impl Grid {
    /// Link every pair of regions whose nearest cells are close enough
    ///
    /// Regions are measured once up front; a hallway is carved between the
    /// nearest cells of each pair closer than `max_distance2` (squared).
    /// Returns how many hallways were carved.
    pub fn link_regions(
        &mut self,
        max_distance2: u64,
        width: u32,
        route: RouteKind,
        rng: &mut MapRng,
    ) -> usize {
        let regions = self.partition_regions();
        let mut carved = 0;

        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                let Some((from, to)) = a.nearest_cells(b) else {
                    continue;
                };
                if from.distance2(&to) >= max_distance2 {
                    continue;
                }
                if self.place_hallway(from, to, width, route, rng).is_ok() {
                    carved += 1;
                }
            }
        }

        carved
    }

    /// Scatter random rooms, then link until everything is one region
    ///
    /// The link distance starts at `link_distance2` and grows by
    /// `link_distance2_step` after each pass that leaves regions apart.
    pub fn generate_dungeon(&mut self, config: &DungeonConfig, rng: &mut MapRng) {
        self.clear();
        for _ in 0..config.room_count {
            if let Err(err) = self.place_random_room(config.room_scale, false, rng) {
                log::debug!("skipped room: {err}");
            }
        }

        let step = config.link_distance2_step.max(1);
        let mut distance2 = config.link_distance2;
        let mut passes = 0;
        while self.partition_regions().len() > 1 {
            passes += 1;
            self.link_regions(distance2, config.hallway_width, config.route, rng);
            distance2 = distance2.saturating_add(step);
        }
        log::debug!("dungeon linked after {passes} passes");
    }

    /// Grow a cave, then link caves that lie close together
    pub fn generate_linked_cave(&mut self, config: &DungeonConfig, rng: &mut MapRng) {
        self.generate_random_cells(config.cave_seed_limit, rng);
        for _ in 0..config.cave_iterations {
            self.generate_cave_iteration();
        }
        self.remove_orphans_smaller_than(config.min_room_size);
        let links = self.link_regions(
            config.link_distance2,
            config.hallway_width,
            config.route,
            rng,
        );
        log::debug!("linked caves with {links} hallways");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::AreaType;

    #[test]
    fn test_link_regions_respects_distance() {
        let mut grid = Grid::new(30, 10);
        grid.place_room((0, 0), (3, 3)).unwrap();
        grid.place_room((6, 0), (9, 3)).unwrap();
        grid.place_room((25, 0), (28, 3)).unwrap();
        let mut rng = MapRng::new(42);

        // 3..6 gap: nearest cells (2, y) and (6, y) are 16 apart
        let carved = grid.link_regions(36, 1, RouteKind::Manhattan, &mut rng);
        assert_eq!(carved, 1);
        assert_eq!(grid.partition_regions().len(), 2);
    }

    #[test]
    fn test_generate_dungeon_is_connected() {
        let mut grid = Grid::new(40, 30);
        let mut rng = MapRng::new(42);
        let config = DungeonConfig::default();
        grid.generate_dungeon(&config, &mut rng);

        assert!(grid.count_area(AreaType::Room) > 0);
        assert_eq!(grid.partition_regions().len(), 1);
    }

    #[test]
    fn test_regenerate_dungeon_terminates() {
        let mut grid = Grid::new(25, 25);
        let mut rng = MapRng::new(5);
        let config = DungeonConfig::default();
        for _ in 0..10 {
            grid.generate_dungeon(&config, &mut rng);
            assert!(grid.partition_regions().len() <= 1);
        }
    }

    #[test]
    fn test_linked_cave_keeps_large_regions() {
        let mut grid = Grid::new(60, 40);
        let mut rng = MapRng::new(11);
        let config = DungeonConfig::default();
        grid.generate_linked_cave(&config, &mut rng);
        for region in grid.partition_regions() {
            assert!(region.len() >= config.min_room_size);
        }
    }
}
