use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
}

impl GameState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Holds the current grid snapshot and replaces it on every toggle. The state
/// is always derived from the grid; winning never locks the board, deciding
/// when to stop forwarding input is the caller's business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    state: GameState,
}

impl BoardState {
    pub fn new(grid: Grid) -> Self {
        let state = Self::state_of(&grid);
        Self { grid, state }
    }

    pub fn from_config(config: GameConfig, generator: impl GridGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn has_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.grid.is_lit(coords)
    }

    pub fn toggle(&mut self, coords: Coord2) -> ToggleOutcome {
        use ToggleOutcome::*;

        let next = self.grid.toggled(coords);
        let outcome = if next == self.grid {
            NoChange
        } else if next.is_cleared() {
            Cleared
        } else {
            Toggled
        };

        log::debug!(
            "toggle at {:?}: {:?}, {} cells lit",
            coords,
            outcome,
            next.lit_count()
        );

        self.grid = next;
        self.state = Self::state_of(&self.grid);
        outcome
    }

    fn state_of(grid: &Grid) -> GameState {
        if grid.is_cleared() {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, lit: &[Coord2]) -> BoardState {
        BoardState::new(Grid::from_lit_coords(size, lit).unwrap())
    }

    #[test]
    fn board_with_no_lit_cells_starts_won() {
        let board = board((3, 3), &[]);

        assert_eq!(board.state(), GameState::Won);
        assert!(board.has_won());
    }

    #[test]
    fn clearing_the_last_lights_wins() {
        let mut board = board((3, 3), &[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
        assert_eq!(board.state(), GameState::InProgress);

        let outcome = board.toggle((1, 1));

        assert_eq!(outcome, ToggleOutcome::Cleared);
        assert!(board.has_won());
        assert!(board.grid().is_cleared());
    }

    #[test]
    fn toggle_stays_callable_after_the_win() {
        let mut board = board((3, 3), &[(0, 0), (1, 0), (0, 1)]);

        assert_eq!(board.toggle((0, 0)), ToggleOutcome::Cleared);
        assert_eq!(board.toggle((2, 2)), ToggleOutcome::Toggled);
        assert_eq!(board.state(), GameState::InProgress);
    }

    #[test]
    fn toggle_without_in_bounds_cells_reports_no_change() {
        let mut board = board((2, 2), &[(0, 0)]);
        let before = board.grid().clone();

        let outcome = board.toggle((7, 7));

        assert_eq!(outcome, ToggleOutcome::NoChange);
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn center_past_the_edge_still_flips_its_in_bounds_neighbor() {
        let mut board = board((2, 2), &[(1, 0)]);

        let outcome = board.toggle((2, 0));

        assert_eq!(outcome, ToggleOutcome::Cleared);
        assert!(board.has_won());
    }

    #[test]
    fn from_config_uses_the_generator() {
        let config = GameConfig::new(4, 6, 0.25).unwrap();

        let board = BoardState::from_config(config, RandomGridGenerator::new(7));

        assert_eq!(board.size(), (4, 6));
        assert_eq!(board.has_won(), board.grid().is_cleared());
    }

    #[test]
    fn board_state_survives_a_serde_json_round_trip() {
        let before = board((2, 3), &[(1, 1)]);

        let encoded = serde_json::to_string(&before).unwrap();
        let decoded: BoardState = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, before);
    }
}
