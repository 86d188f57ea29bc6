//! The firmware side of things.
//!
//! The runtime that scans the matrix and talks USB also owns the LED pins and the unicode input
//! machinery.  It implements [`Board`] so the keymap hooks can reach them.

use enumset::EnumSet;

use crate::indicators::Indicator;

/// How the host OS expects arbitrary code points to be typed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnicodeMode {
    /// macOS "Unicode Hex Input".
    Mac,
    /// Ctrl+Shift+U, hex digits, then space, as used by IBus.
    Linux,
    /// Alt and keypad plus, needs a registry tweak on the host.
    Windows,
    Bsd,
    /// The WinCompose tool.
    WinCompose,
}

impl UnicodeMode {
    pub fn name(self) -> &'static str {
        match self {
            UnicodeMode::Mac => "mac",
            UnicodeMode::Linux => "linux",
            UnicodeMode::Windows => "windows",
            UnicodeMode::Bsd => "bsd",
            UnicodeMode::WinCompose => "wincompose",
        }
    }
}

/// Outputs the keymap hooks are able to drive.
pub trait Board {
    /// Turn one of the three indicator LEDs on or off.
    fn set_indicator(&mut self, led: Indicator, on: bool);

    /// Turn the LED on the controller board on or off.
    fn set_board_led(&mut self, on: bool);

    /// Select how `Cell::Unicode` keys get typed.  This lasts until power off.
    fn set_unicode_mode(&mut self, mode: UnicodeMode);
}

/// A board that just remembers what it was told.
///
/// Useful when there are no LEDs to drive, such as when running the keymap on the host.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Latch {
    pub lit: EnumSet<Indicator>,
    pub board_led: bool,
    pub unicode: Option<UnicodeMode>,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_lit(&self, led: Indicator) -> bool {
        self.lit.contains(led)
    }
}

impl Board for Latch {
    fn set_indicator(&mut self, led: Indicator, on: bool) {
        if on {
            self.lit.insert(led);
        } else {
            self.lit.remove(led);
        }
    }

    fn set_board_led(&mut self, on: bool) {
        self.board_led = on;
    }

    fn set_unicode_mode(&mut self, mode: UnicodeMode) {
        self.unicode = Some(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{led_set, scan, HostLeds};
    use crate::layer::LayerState;

    #[test]
    fn latch_starts_dark() {
        let latch = Latch::new();
        assert!(latch.lit.is_empty());
        assert!(!latch.board_led);
        assert_eq!(latch.unicode, None);
    }

    #[test]
    fn latch_follows_commands() {
        let mut latch = Latch::new();
        for cmd in led_set(HostLeds::CAPS_LOCK) {
            cmd.apply(&mut latch);
        }
        assert_eq!(latch.lit, Indicator::Red | Indicator::Green);

        latch.set_board_led(true);
        for cmd in scan(LayerState::default().with(1), 1) {
            cmd.apply(&mut latch);
        }
        assert!(!latch.board_led);
        assert_eq!(latch.lit, EnumSet::all());

        for cmd in led_set(HostLeds::NUM_LOCK) {
            cmd.apply(&mut latch);
        }
        assert!(!latch.is_lit(Indicator::Red));
        assert!(!latch.is_lit(Indicator::Green));
        assert!(latch.is_lit(Indicator::Blue));
        assert_eq!(latch.unicode, None);
    }
}
