use std::fmt;

use super::{Board, Coordinate};

impl Board {
    /// Renders the grid with `x` across and `y` down, marking the last stone
    /// placed with brackets.
    pub fn to_ascii(&self) -> String {
        let size = self.size();
        let last_move = self.last_move();
        let mut out = String::with_capacity((size + 1) * (size * 3 + 4));

        out.push_str("   ");
        for x in 0..size {
            out.push_str(&format!("{:>3}", x));
        }
        out.push('\n');

        for y in 0..size {
            out.push_str(&format!("{:>3}", y));
            for x in 0..size {
                let coordinate = Coordinate::new(x, y);
                let stone = self.get(coordinate).map_or('.', |player| player.stone_char());
                if last_move == Some(coordinate) {
                    out.push_str(&format!("[{}]", stone));
                } else {
                    out.push_str(&format!("  {}", stone));
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}
