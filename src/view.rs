//! Pure rendering input for the board grid.

use alloc::vec::Vec;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::selection::Selection;

/// Annotation for one board cell. Hit/miss marks arrive here once the
/// service starts revealing strike outcomes in its snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMark {
    Empty,
    Selected,
    OwnShip,
}

/// All 100 cells in row-major order with their annotation. A placed ship
/// wins over a stale selection on the same cell.
pub fn board_cells(fleet: &Fleet, selection: &Selection) -> Vec<(Coord, CellMark)> {
    let mut cells = Vec::with_capacity((BOARD_SIZE as usize) * (BOARD_SIZE as usize));
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            let mark = if fleet.occupies(coord) {
                CellMark::OwnShip
            } else if selection.contains(coord) {
                CellMark::Selected
            } else {
                CellMark::Empty
            };
            cells.push((coord, mark));
        }
    }
    cells
}

/// Print the annotated grid: `#` own ship, `+` selected, `.` empty.
#[cfg(feature = "std")]
pub fn print_board(fleet: &Fleet, selection: &Selection) {
    let cells = board_cells(fleet, selection);
    std::print!("   ");
    for col in 1..=BOARD_SIZE {
        std::print!("{:>2}", col);
    }
    std::println!();
    for (i, (coord, mark)) in cells.iter().enumerate() {
        if i % BOARD_SIZE as usize == 0 {
            std::print!(" {} ", coord.row_label());
        }
        let ch = match mark {
            CellMark::OwnShip => '#',
            CellMark::Selected => '+',
            CellMark::Empty => '.',
        };
        std::print!(" {}", ch);
        if i % BOARD_SIZE as usize == BOARD_SIZE as usize - 1 {
            std::println!();
        }
    }
}
