use ndarray::Array2;

use super::*;

/// Seeds every game from a single `u64`, one independent Bernoulli draw per
/// cell: a uniform draw in `[0, 1)` lights the cell when it falls strictly
/// below the configured chance. Same seed and config, same grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GameConfig) -> Grid {
        use rand::prelude::*;

        let size = config.size();

        // chance is validated at config construction, but stay total for
        // unchecked configs too
        if config.lit_chance <= 0.0 {
            log::debug!("lit chance {} leaves the board unlit", config.lit_chance);
            return Grid::from_lit_mask(Array2::default(size.to_nd_index()));
        }
        if config.lit_chance >= 1.0 {
            log::debug!("lit chance {} lights the whole board", config.lit_chance);
            return Grid::from_lit_mask(Array2::from_elem(size.to_nd_index(), true));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let lights = Array2::from_shape_simple_fn(size.to_nd_index(), || {
            rng.random::<f64>() < config.lit_chance
        });

        let grid = Grid::from_lit_mask(lights);
        log::debug!(
            "generated {}x{} board, {} of {} cells lit",
            config.rows,
            config.cols,
            grid.lit_count(),
            grid.total_cells()
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_grid_matches_the_config_shape() {
        let config = GameConfig::new(5, 8, 0.25).unwrap();

        let grid = RandomGridGenerator::new(42).generate(config);

        assert_eq!(grid.size(), (5, 8));
        assert_eq!(grid.total_cells(), 40);
    }

    #[test]
    fn same_seed_reproduces_the_same_grid() {
        let config = GameConfig::new(6, 6, 0.5).unwrap();

        let first = RandomGridGenerator::new(1234).generate(config);
        let second = RandomGridGenerator::new(1234).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn zero_chance_produces_a_cleared_board() {
        let config = GameConfig::new(4, 4, 0.0).unwrap();

        let grid = RandomGridGenerator::new(9).generate(config);

        assert!(grid.is_cleared());
    }

    #[test]
    fn full_chance_lights_every_cell() {
        let config = GameConfig::new(4, 4, 1.0).unwrap();

        let grid = RandomGridGenerator::new(9).generate(config);

        assert_eq!(grid.lit_count(), grid.total_cells());
    }
}
