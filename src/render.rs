//! Text rendering of path nodes.
//!
//! A row is drawn in a seven-wide frame: `-` marks for the positions the row
//! has slid away from, then its five tiles.
//!
//! ```text
//! 0. [ - 1 2 0 6 7 - ]
//!    [ - 5 9 3 4 8 - ]
//! ```

use std::fmt;

use crate::puzzle::Alignment;
use crate::search::PathNode;

struct Row<'a> {
    values: &'a [u8],
    shift: u8,
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for _ in 0..self.shift {
            write!(f, " -")?;
        }
        for value in self.values {
            write!(f, " {}", value)?;
        }
        for _ in self.shift..Alignment::MAX_SHIFT {
            write!(f, " -")?;
        }
        write!(f, " ]")
    }
}

fn top_row(node: &PathNode) -> Row<'_> {
    Row {
        values: node.arrangement.top(),
        shift: node.alignment.top(),
    }
}

fn bottom_row(node: &PathNode) -> Row<'_> {
    Row {
        values: node.arrangement.bottom(),
        shift: node.alignment.bottom(),
    }
}

/// A single node as two rows, optionally numbered.
pub struct Grid<'a> {
    pub count: Option<usize>,
    pub node: &'a PathNode,
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            Some(count) => write!(f, "{}. ", count)?,
            None => write!(f, "   ")?,
        }
        writeln!(f, "{}", top_row(self.node))?;
        writeln!(f, "   {}", bottom_row(self.node))
    }
}

/// One flip: the rows slid into place on the left, the turned wheel on the
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip {
    pub count: usize,
    pub from: PathNode,
    pub to: PathNode,
}

impl fmt::Display for Flip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}. {}   /- {}",
            self.count,
            top_row(&self.from),
            top_row(&self.to)
        )?;
        writeln!(
            f,
            "   {} -/   {}",
            bottom_row(&self.from),
            bottom_row(&self.to)
        )
    }
}

/// Pairs consecutive path nodes into numbered flips. The left side of each
/// flip shows the earlier arrangement already slid to the later alignment.
pub fn flips(path: &[PathNode]) -> impl Iterator<Item = Flip> + '_ {
    path.windows(2).enumerate().map(|(index, pair)| Flip {
        count: index + 1,
        from: PathNode {
            arrangement: pair[0].arrangement,
            alignment: pair[1].alignment,
        },
        to: pair[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::puzzle::Arrangement;

    fn root() -> PathNode {
        PathNode {
            arrangement: Arrangement::DEFAULT_SCRAMBLE,
            alignment: Alignment::INITIAL,
        }
    }

    #[test]
    fn grid_for_numbered_root() {
        let grid = Grid {
            count: Some(0),
            node: &root(),
        };
        assert_eq!(
            grid.to_string(),
            "0. [ - 1 2 0 6 7 - ]\n   [ - 5 9 3 4 8 - ]\n"
        );
    }

    #[test]
    fn grid_without_number_shows_shifts() {
        let node = PathNode {
            arrangement: Arrangement::SOLVED,
            alignment: Alignment::new(2, 0),
        };
        let grid = Grid {
            count: None,
            node: &node,
        };
        assert_eq!(
            grid.to_string(),
            "   [ - - 0 1 2 3 4 ]\n   [ 5 6 7 8 9 - - ]\n"
        );
    }

    #[test]
    fn flip_uses_the_later_alignment_on_both_sides() {
        let movement = Move::ALL[8];
        let (arrangement, alignment) = Arrangement::SOLVED.apply(movement);
        let path = [
            PathNode {
                arrangement: Arrangement::SOLVED,
                alignment: Alignment::INITIAL,
            },
            PathNode {
                arrangement,
                alignment,
            },
        ];

        let rendered: Vec<String> = flips(&path).map(|flip| flip.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "1. [ 0 1 2 3 4 - - ]   /- [ 0 1 7 8 9 - - ]\n   \
                 [ 5 6 7 8 9 - - ] -/   [ 5 6 2 3 4 - - ]\n"
                    .to_string()
            ]
        );
    }

    #[test]
    fn single_node_path_has_no_flips() {
        assert_eq!(flips(&[root()]).count(), 0);
    }
}
