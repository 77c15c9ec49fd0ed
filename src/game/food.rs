use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Playfield, Position};

/// The single piece of food on the board
///
/// Placement is uniform over every cell of the playfield. Cells occupied by
/// the snake are not excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Place food on a random cell
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, field: &Playfield) -> Self {
        Self::at(random_cell(rng, field))
    }

    /// Move to a new random cell after being eaten
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, field: &Playfield) {
        self.position = random_cell(rng, field);
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, field: &Playfield) -> Position {
    let columns = field.width / field.block_size;
    let rows = field.height / field.block_size;
    Position::new(
        rng.gen_range(0..columns) * field.block_size,
        rng.gen_range(0..rows) * field.block_size,
    )
}
