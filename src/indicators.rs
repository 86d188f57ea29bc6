//! Indicator LEDs
//!
//! The ErgoDox EZ has three LEDs on the right half (red, green, blue) and one on the controller
//! board itself.  The mapping from host and layer state onto them is kept as pure functions
//! returning [`Command`]s, so it can be checked without any hardware.  The [`Keymap`] hooks
//! send the commands on to a [`Board`].
//!
//! [`Keymap`]: crate::Keymap

use bitflags::bitflags;
use enumset::EnumSetType;
use usbd_human_interface_device::device::keyboard::KeyboardLedsReport;

use crate::board::Board;
use crate::layer::{Layer, LayerState};

bitflags! {
    /// The LED output report sent by the host.
    #[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
    pub struct HostLeds: u8 {
        const NUM_LOCK = 0b0000_0001;
        const CAPS_LOCK = 0b0000_0010;
        const SCROLL_LOCK = 0b0000_0100;
        const COMPOSE = 0b0000_1000;
        const KANA = 0b0001_0000;
    }
}

impl HostLeds {
    /// Interpret a raw report byte.  Reserved bits are kept, but nothing looks at them.
    pub const fn from_report(report: u8) -> Self {
        HostLeds::from_bits_retain(report)
    }

    /// Reserved bits that were set in the report.
    pub fn reserved(self) -> u8 {
        self.bits() & !HostLeds::all().bits()
    }
}

impl From<KeyboardLedsReport> for HostLeds {
    fn from(report: KeyboardLedsReport) -> Self {
        let mut leds = HostLeds::empty();
        leds.set(HostLeds::NUM_LOCK, report.num_lock);
        leds.set(HostLeds::CAPS_LOCK, report.caps_lock);
        leds.set(HostLeds::SCROLL_LOCK, report.scroll_lock);
        leds.set(HostLeds::COMPOSE, report.compose);
        leds.set(HostLeds::KANA, report.kana);
        leds
    }
}

/// The three LEDs above the right thumb cluster.
#[derive(EnumSetType, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// LED 1.
    Red,
    /// LED 2.
    Green,
    /// LED 3.
    Blue,
}

/// A single thing to do to an LED.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Indicator(Indicator, bool),
    /// The LED on the controller board.
    BoardLed(bool),
}

impl Command {
    pub fn apply<B: Board + ?Sized>(self, board: &mut B) {
        match self {
            Command::Indicator(led, on) => board.set_indicator(led, on),
            Command::BoardLed(on) => board.set_board_led(on),
        }
    }
}

/// Map the host's lock state onto the red and green LEDs.
///
/// Red follows caps lock.  Green is inverted: it is lit while num lock is off.  Blue is left
/// alone.
pub fn led_set(leds: HostLeds) -> [Command; 2] {
    [
        Command::Indicator(Indicator::Red, leds.contains(HostLeds::CAPS_LOCK)),
        Command::Indicator(Indicator::Green, !leds.contains(HostLeds::NUM_LOCK)),
    ]
}

/// Map the layer state onto the blue LED, and keep the board LED off.
///
/// Blue is lit exactly when the top layer is `embedded`.  This takes the blue LED away from its
/// usual job of showing scroll lock.
pub fn scan(state: LayerState, embedded: Layer) -> [Command; 2] {
    [
        Command::BoardLed(false),
        Command::Indicator(Indicator::Blue, state.top() == embedded),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commanded(cmds: &[Command], led: Indicator) -> Option<bool> {
        cmds.iter().find_map(|c| match *c {
            Command::Indicator(l, on) if l == led => Some(on),
            _ => None,
        })
    }

    #[test]
    fn all_host_reports() {
        for report in 0..=255u8 {
            let leds = HostLeds::from_report(report);
            let cmds = led_set(leds);
            assert_eq!(commanded(&cmds, Indicator::Red), Some(report & 0x02 != 0));
            assert_eq!(commanded(&cmds, Indicator::Green), Some(report & 0x01 == 0));
            assert_eq!(commanded(&cmds, Indicator::Blue), None);
            assert!(!cmds.iter().any(|c| matches!(c, Command::BoardLed(_))));
        }
    }

    #[test]
    fn caps_only() {
        let cmds = led_set(HostLeds::CAPS_LOCK);
        assert_eq!(
            cmds,
            [
                Command::Indicator(Indicator::Red, true),
                Command::Indicator(Indicator::Green, true),
            ]
        );
    }

    #[test]
    fn num_lock_darkens_green() {
        let cmds = led_set(HostLeds::NUM_LOCK | HostLeds::SCROLL_LOCK);
        assert_eq!(commanded(&cmds, Indicator::Red), Some(false));
        assert_eq!(commanded(&cmds, Indicator::Green), Some(false));
    }

    #[test]
    fn layer_states() {
        for embedded in [1, 3] {
            for bits in 0..64u32 {
                let state = LayerState::from_bits(bits);
                let cmds = scan(state, embedded);
                assert_eq!(cmds[0], Command::BoardLed(false));
                assert_eq!(
                    commanded(&cmds, Indicator::Blue),
                    Some(state.top() == embedded)
                );
                assert_eq!(commanded(&cmds, Indicator::Red), None);
                assert_eq!(commanded(&cmds, Indicator::Green), None);
            }
        }
    }

    #[test]
    fn embedded_on_top() {
        let state = LayerState::default().with(3);
        assert_eq!(commanded(&scan(state, 3), Indicator::Blue), Some(true));

        // A higher layer hides the embedded one.
        assert_eq!(commanded(&scan(state.with(4), 3), Indicator::Blue), Some(false));

        // Lower layers underneath do not matter.
        assert_eq!(commanded(&scan(state.with(0).with(2), 3), Indicator::Blue), Some(true));

        assert_eq!(commanded(&scan(LayerState::default().with(2), 3), Indicator::Blue), Some(false));
    }

    #[test]
    fn reserved_bits() {
        assert_eq!(HostLeds::from_report(0xe2).reserved(), 0xe0);
        assert_eq!(HostLeds::from_report(0x1f).reserved(), 0);
        assert!(HostLeds::from_report(0xe2).contains(HostLeds::CAPS_LOCK));
    }

    #[test]
    fn from_usb_report() {
        let report = KeyboardLedsReport {
            num_lock: true,
            caps_lock: false,
            scroll_lock: false,
            compose: false,
            kana: true,
        };
        assert_eq!(HostLeds::from(report), HostLeds::NUM_LOCK | HostLeds::KANA);
    }
}
