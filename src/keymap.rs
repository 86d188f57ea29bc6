//! Keymaps
//!
//! A keymap is a table of layers plus the three hooks the firmware calls: `init` once at boot,
//! `led_set` whenever the host changes its lock LEDs, and `scan` on every pass through the scan
//! loop.  The hooks are the same for every keymap except for what `init` selects, so a keymap
//! only has to describe its tables.

use crate::board::{Board, UnicodeMode};
use crate::indicators::{self, HostLeds};
use crate::keys::{Cell, Grid};
use crate::layer::{Layer, LayerState};
use crate::log::{info, warn};

pub mod jeo;
pub mod ka2;
mod numpad;

pub trait Keymap {
    /// Short name, used in log messages.
    const NAME: &'static str;

    /// The numpad/function layer, shown on the blue LED.
    const EMBEDDED: Layer;

    /// Unicode input mode to select at boot, if this keymap types any code points.
    const UNICODE_MODE: Option<UnicodeMode> = None;

    /// All of the layers, indexed by layer number.
    fn layers() -> &'static [Grid];

    fn layer_count() -> usize {
        Self::layers().len()
    }

    fn layer(layer: Layer) -> Option<&'static Grid> {
        Self::layers().get(layer as usize)
    }

    /// The cell at a spatial position of a single layer.  Transparent cells are returned as is.
    fn cell(layer: Layer, row: usize, col: usize) -> Option<Cell> {
        Self::layer(layer)?.get(row)?.get(col).copied()
    }

    /// Called once, at boot.
    fn init<B: Board + ?Sized>(board: &mut B) {
        if let Some(mode) = Self::UNICODE_MODE {
            info!("{}: unicode input mode {}", Self::NAME, mode.name());
            board.set_unicode_mode(mode);
        }
    }

    /// Called when the host sends a new LED report.
    fn led_set<B: Board + ?Sized>(leds: HostLeds, board: &mut B) {
        let reserved = leds.reserved();
        if reserved != 0 {
            warn!("LED report has reserved bits: {}", reserved);
        }
        info!(
            "Host LEDs: caps {} num {}",
            leds.contains(HostLeds::CAPS_LOCK),
            leds.contains(HostLeds::NUM_LOCK)
        );
        for cmd in indicators::led_set(leds) {
            cmd.apply(board);
        }
    }

    /// Called on every scan.
    fn scan<B: Board + ?Sized>(state: LayerState, board: &mut B) {
        for cmd in indicators::scan(state, Self::EMBEDDED) {
            cmd.apply(board);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Latch;
    use crate::indicators::Indicator;
    use crate::keymap::{jeo::Jeo, ka2::Ka2};

    #[test]
    fn init_selects_unicode() {
        crate::testlog::setup();

        let mut latch = Latch::new();
        Jeo::init(&mut latch);
        assert_eq!(latch.unicode, Some(UnicodeMode::Linux));

        let mut latch = Latch::new();
        Ka2::init(&mut latch);
        assert_eq!(latch, Latch::new());
    }

    #[test]
    fn hooks_drive_latch() {
        crate::testlog::setup();

        let mut latch = Latch::new();
        latch.set_board_led(true);

        Ka2::led_set(HostLeds::from_report(0xe2), &mut latch);
        assert!(latch.is_lit(Indicator::Red));
        assert!(latch.is_lit(Indicator::Green));

        Ka2::scan(LayerState::default().with(ka2::MBED), &mut latch);
        assert!(latch.is_lit(Indicator::Blue));
        assert!(!latch.board_led);

        // Layer 1 is the embedded layer for ka2, but the upper layer for jeo.
        Jeo::scan(LayerState::default().with(1), &mut latch);
        assert!(!latch.is_lit(Indicator::Blue));
    }

    #[test]
    fn lookups() {
        assert_eq!(Jeo::layer_count(), 4);
        assert_eq!(Ka2::layer_count(), 2);
        assert!(Ka2::layer(2).is_none());
        assert_eq!(Jeo::cell(jeo::BASE, 4, 13), Some(Cell::TapToggle(jeo::MBED)));
        assert_eq!(Jeo::cell(jeo::MBED, 4, 13), Some(Cell::Trans));
        assert_eq!(Jeo::cell(jeo::BASE, 6, 0), None);
        assert_eq!(Jeo::cell(jeo::BASE, 0, 14), None);
        assert_eq!(Jeo::cell(9, 0, 0), None);
    }
}
