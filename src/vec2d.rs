use std::fmt::{self, Debug, Formatter};
use std::ops::Index;

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }
}

impl<T: Copy> Vec2d<T> {
    /// Shorter rows are padded with `padding` so the result is rectangular.
    pub(crate) fn new(grid: &[Vec<T>], padding: T) -> Self {
        let max_cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(padding);
            }
        }
        Vec2d {
            data,
            rows: grid.len(),
            cols: max_cols,
        }
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = index.r as usize * self.cols + index.c as usize;
        &self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_ragged_rows() {
        let grid = vec![vec![true, true], vec![true], vec![true, true, true]];
        let grid = Vec2d::new(&grid, false);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(
            format!("{:?}", grid),
            "[true, true, false]\n[true, false, false]\n[true, true, true]\n"
        );
    }

    #[test]
    fn bounds() {
        let grid = Vec2d::new(&[vec![0u8; 4], vec![0u8; 4]], 0);
        assert!(grid.contains(Pos::new(1, 3)));
        assert!(!grid.contains(Pos::new(2, 0)));
        assert!(!grid.contains(Pos { r: 0, c: -1 }));
        assert_eq!(grid.get(Pos { r: -1, c: 0 }), None);
        assert_eq!(grid.positions().count(), 8);
    }
}
