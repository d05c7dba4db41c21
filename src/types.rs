/// Grid position as `(row, col)`, matching the board's row-major layout.
pub type Pos = (usize, usize);

const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the in-bounds Moore neighbors of `pos` on a square `size` grid,
/// clipping at the edges.
pub(crate) fn neighbors(pos: Pos, size: usize) -> impl Iterator<Item = Pos> {
    let (row, col) = pos;
    MOORE_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < size && c < size).then_some((r, c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let got: Vec<Pos> = neighbors((0, 0), 8).collect();
        assert_eq!(got, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn top_edge_has_five_neighbors() {
        assert_eq!(neighbors((0, 3), 8).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors_excluding_center() {
        let got: Vec<Pos> = neighbors((4, 4), 8).collect();
        assert_eq!(got.len(), 8);
        assert!(!got.contains(&(4, 4)));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), 1).count(), 0);
    }
}
