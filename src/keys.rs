//! Keys on the ErgoDox EZ
//!
//! The ErgoDox has 76 keys, 38 on each half.  The electrical matrix is 14 rows of 6 columns, but
//! that is awkward to read, so the tables here are kept in the spatial arrangement instead: 6 rows
//! of 14 columns, with position `(r, c)` being the key QMK calls `k{r}{c}`.  The left half is
//! columns 0 through 6, and the right half columns 7 through 13.
//!
//! Eight spatial positions have no switch behind them.  They always hold [`Cell::No`].

use bitflags::bitflags;
use usbd_human_interface_device::page::{Consumer, Keyboard};

use crate::layer::Layer;

/// Spatial rows.
pub const ROWS: usize = 6;

/// Spatial columns.
pub const COLS: usize = 14;

/// Number of keys with an actual switch.
pub const NKEYS: usize = 76;

/// Rows of the electrical matrix, which is the transpose of the spatial grid.
pub const MATRIX_ROWS: usize = COLS;

/// Columns of the electrical matrix.
pub const MATRIX_COLS: usize = ROWS;

/// A single layer.
pub type Grid = [[Cell; COLS]; ROWS];

bitflags! {
    /// Modifiers held down while a [`Cell::Modded`] key is sent.
    ///
    /// Right alt gets its own bit, as the UK layout gives AltGr symbols of its own.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    pub struct Mods: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const GUI = 0b0000_1000;
        const ALT_GR = 0b0001_0000;
    }
}

/// One entry of a layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    /// Does nothing.  Also fills the positions without a switch.
    No,
    /// Falls through to the next lower active layer.
    Trans,
    /// A regular keyboard page key.
    Key(Keyboard),
    /// A consumer page (media) key.
    Media(Consumer),
    /// A key sent with modifiers held.
    Modded(Mods, Keyboard),
    /// A code point typed with the host's unicode input method.
    Unicode(char),
    /// Layer is active while this key is held.
    Momentary(Layer),
    /// Like `Momentary` when held, but a tap toggles the layer.
    TapToggle(Layer),
}

impl Cell {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Cell::Trans)
    }

    /// The layer this cell activates, if it is a layer key.
    pub fn target_layer(&self) -> Option<Layer> {
        match *self {
            Cell::Momentary(layer) | Cell::TapToggle(layer) => Some(layer),
            _ => None,
        }
    }

    /// The keyboard page key sent, ignoring any modifiers.
    pub fn keycode(&self) -> Option<Keyboard> {
        match *self {
            Cell::Key(key) | Cell::Modded(_, key) => Some(key),
            _ => None,
        }
    }

    pub fn mods(&self) -> Mods {
        match *self {
            Cell::Modded(mods, _) => mods,
            _ => Mods::empty(),
        }
    }
}

// Short names for use in the layer tables.

pub const NO: Cell = Cell::No;
pub const TRNS: Cell = Cell::Trans;

pub const fn k(key: Keyboard) -> Cell {
    Cell::Key(key)
}

/// Shifted key.
pub const fn s(key: Keyboard) -> Cell {
    Cell::Modded(Mods::SHIFT, key)
}

/// Key with AltGr held.
pub const fn ralt(key: Keyboard) -> Cell {
    Cell::Modded(Mods::ALT_GR, key)
}

pub const fn uc(ch: char) -> Cell {
    Cell::Unicode(ch)
}

pub const fn media(key: Consumer) -> Cell {
    Cell::Media(key)
}

pub const fn mo(layer: Layer) -> Cell {
    Cell::Momentary(layer)
}

pub const fn tt(layer: Layer) -> Cell {
    Cell::TapToggle(layer)
}

/// Does this spatial position have a switch?
pub const fn is_wired(row: usize, col: usize) -> bool {
    if row >= ROWS || col >= COLS {
        return false;
    }
    !matches!((row, col), (2, 6) | (2, 7) | (4, 5..=8) | (5, 0) | (5, 13))
}

/// Electrical matrix position of a spatial position.
pub const fn matrix_position(row: usize, col: usize) -> Option<(usize, usize)> {
    if is_wired(row, col) {
        Some((col, row))
    } else {
        None
    }
}

/// Spatial position of an electrical matrix position.
pub const fn spatial_position(mrow: usize, mcol: usize) -> Option<(usize, usize)> {
    if is_wired(mcol, mrow) {
        Some((mcol, mrow))
    } else {
        None
    }
}

/// Build a [`Grid`] from the 76 keys, in the order they are read off the board.
///
/// The order is the left half top to bottom, then the left thumb cluster, then the right half
/// and right thumb cluster.  Thumb clusters are read as the two keys on top, the single key below
/// them, then the bottom row of three with the long keys first on the inside edge.
#[macro_export]
macro_rules! layout_ergodox {
    (
        $k00:expr, $k01:expr, $k02:expr, $k03:expr, $k04:expr, $k05:expr, $k06:expr,
        $k10:expr, $k11:expr, $k12:expr, $k13:expr, $k14:expr, $k15:expr, $k16:expr,
        $k20:expr, $k21:expr, $k22:expr, $k23:expr, $k24:expr, $k25:expr,
        $k30:expr, $k31:expr, $k32:expr, $k33:expr, $k34:expr, $k35:expr, $k36:expr,
        $k40:expr, $k41:expr, $k42:expr, $k43:expr, $k44:expr,
                                                   $k55:expr, $k56:expr,
                                                              $k54:expr,
                                        $k53:expr, $k52:expr, $k51:expr,

        $k07:expr, $k08:expr, $k09:expr, $k0A:expr, $k0B:expr, $k0C:expr, $k0D:expr,
        $k17:expr, $k18:expr, $k19:expr, $k1A:expr, $k1B:expr, $k1C:expr, $k1D:expr,
                   $k28:expr, $k29:expr, $k2A:expr, $k2B:expr, $k2C:expr, $k2D:expr,
        $k37:expr, $k38:expr, $k39:expr, $k3A:expr, $k3B:expr, $k3C:expr, $k3D:expr,
                              $k49:expr, $k4A:expr, $k4B:expr, $k4C:expr, $k4D:expr,
        $k57:expr, $k58:expr,
        $k59:expr,
        $k5C:expr, $k5B:expr, $k5A:expr $(,)?
    ) => {
        [
            [$k00, $k01, $k02, $k03, $k04, $k05, $k06, $k07, $k08, $k09, $k0A, $k0B, $k0C, $k0D],
            [$k10, $k11, $k12, $k13, $k14, $k15, $k16, $k17, $k18, $k19, $k1A, $k1B, $k1C, $k1D],
            [
                $k20, $k21, $k22, $k23, $k24, $k25,
                $crate::keys::Cell::No, $crate::keys::Cell::No,
                $k28, $k29, $k2A, $k2B, $k2C, $k2D,
            ],
            [$k30, $k31, $k32, $k33, $k34, $k35, $k36, $k37, $k38, $k39, $k3A, $k3B, $k3C, $k3D],
            [
                $k40, $k41, $k42, $k43, $k44,
                $crate::keys::Cell::No, $crate::keys::Cell::No,
                $crate::keys::Cell::No, $crate::keys::Cell::No,
                $k49, $k4A, $k4B, $k4C, $k4D,
            ],
            [
                $crate::keys::Cell::No,
                $k51, $k52, $k53, $k54, $k55, $k56,
                $k57, $k58, $k59, $k5A, $k5B, $k5C,
                $crate::keys::Cell::No,
            ],
        ]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wired_count() {
        let wired = (0..ROWS)
            .flat_map(|r| (0..COLS).map(move |c| (r, c)))
            .filter(|&(r, c)| is_wired(r, c))
            .count();
        assert_eq!(wired, NKEYS);
        assert!(!is_wired(ROWS, 0));
        assert!(!is_wired(0, COLS));
    }

    #[test]
    fn matrix_transpose() {
        assert_eq!(matrix_position(0, 13), Some((13, 0)));
        assert_eq!(matrix_position(5, 1), Some((1, 5)));
        assert_eq!(matrix_position(2, 6), None);
        assert_eq!(spatial_position(1, 5), Some((5, 1)));
        assert_eq!(spatial_position(13, 5), None);
        for r in 0..ROWS {
            for c in 0..COLS {
                if let Some((mr, mc)) = matrix_position(r, c) {
                    assert!(mr < MATRIX_ROWS && mc < MATRIX_COLS);
                    assert_eq!(spatial_position(mr, mc), Some((r, c)));
                }
            }
        }
    }

    #[test]
    fn macro_placement() {
        // Number each key in argument order so the placement is visible.
        const fn n(i: u8) -> Cell {
            Cell::Momentary(i)
        }
        let grid: Grid = layout_ergodox!(
            n(0), n(1), n(2), n(3), n(4), n(5), n(6),
            n(7), n(8), n(9), n(10), n(11), n(12), n(13),
            n(14), n(15), n(16), n(17), n(18), n(19),
            n(20), n(21), n(22), n(23), n(24), n(25), n(26),
            n(27), n(28), n(29), n(30), n(31),
            n(32), n(33),
            n(34),
            n(35), n(36), n(37),

            n(38), n(39), n(40), n(41), n(42), n(43), n(44),
            n(45), n(46), n(47), n(48), n(49), n(50), n(51),
            n(52), n(53), n(54), n(55), n(56), n(57),
            n(58), n(59), n(60), n(61), n(62), n(63), n(64),
            n(65), n(66), n(67), n(68), n(69),
            n(70), n(71),
            n(72),
            n(73), n(74), n(75),
        );

        // Left thumb: Ctrl/Alt on top, then Home, then Bksp, Del, End.
        assert_eq!(grid[5][5], n(32));
        assert_eq!(grid[5][6], n(33));
        assert_eq!(grid[5][4], n(34));
        assert_eq!(grid[5][3], n(35));
        assert_eq!(grid[5][2], n(36));
        assert_eq!(grid[5][1], n(37));

        // Right half starts at column 7.
        assert_eq!(grid[0][7], n(38));
        assert_eq!(grid[2][8], n(52));
        assert_eq!(grid[4][9], n(65));

        // Right thumb: Alt/Ctrl, PgUp, then PgDn, Enter, Space.
        assert_eq!(grid[5][7], n(70));
        assert_eq!(grid[5][8], n(71));
        assert_eq!(grid[5][9], n(72));
        assert_eq!(grid[5][12], n(73));
        assert_eq!(grid[5][11], n(74));
        assert_eq!(grid[5][10], n(75));

        // Every wired slot got a distinct key, and the rest are empty.
        let mut seen = [false; NKEYS];
        for r in 0..ROWS {
            for c in 0..COLS {
                match grid[r][c] {
                    Cell::Momentary(i) => {
                        assert!(is_wired(r, c));
                        assert!(!seen[i as usize]);
                        seen[i as usize] = true;
                    }
                    Cell::No => assert!(!is_wired(r, c)),
                    other => panic!("unexpected cell {:?}", other),
                }
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn cell_accessors() {
        assert_eq!(s(Keyboard::A).mods(), Mods::SHIFT);
        assert_eq!(ralt(Keyboard::Dot).mods(), Mods::ALT_GR);
        assert_eq!(ralt(Keyboard::Dot).keycode(), Some(Keyboard::Dot));
        assert_eq!(uc('\u{2013}').keycode(), None);
        assert_eq!(tt(3).target_layer(), Some(3));
        assert!(TRNS.is_transparent());
        assert_eq!(k(Keyboard::Q).mods(), Mods::empty());
    }
}
