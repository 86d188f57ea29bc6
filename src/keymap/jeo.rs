//! Jeo layout, for use under a UK layout on Linux.
//!
//! Where there is no clear winner for a key, this copies what the UK PC mode Kinesis Advantage
//! does by default.
//!
//! The en dash and interpunct live above the comma and period.  Shift can't give those, so the
//! shift keys are emulated by the "upper" layer ([`CAPS`]), which sends shifted keys itself.  To
//! register a real shift on its own, or to send Shift+, or Shift+. as part of a control sequence,
//! use the key below the virtual left shift.  That key doesn't exist on the Kinesis.
//!
//! The embedded layer works the same as in [`ka2`](super::ka2): tap or hold the extra key below
//! right shift.  Media keys are on the inner columns.

use usbd_human_interface_device::page::{Consumer as C, Keyboard as K};

use crate::board::UnicodeMode;
use crate::keys::{k, media, mo, ralt, s, tt, uc, Grid, TRNS};
use crate::layer::Layer;

use super::numpad::EMBEDDED_LAYER;
use super::Keymap;

/// Lower case.
pub const BASE: Layer = 0;
/// Upper case, the emulated shift.
pub const CAPS: Layer = 1;
/// Symbols.
pub const SYMB: Layer = 2;
/// Kinesis-like keypad.
pub const MBED: Layer = 3;

pub struct Jeo;

impl Keymap for Jeo {
    const NAME: &'static str = "jeo";
    const EMBEDDED: Layer = MBED;
    const UNICODE_MODE: Option<UnicodeMode> = Some(UnicodeMode::Linux);

    fn layers() -> &'static [Grid] {
        &LAYERS
    }
}

#[rustfmt::skip]
pub static LAYERS: [Grid; 4] = [
    // BASE
    crate::layout_ergodox!(
        // Left hand
        //
        //        ,--------------------------------------------------.
        //        | =      | 1    | 2    | 3    | 4    | 5    | Mute |
        //        |--------+------+------+------+------+-------------|
        //        | Tab    | q    | g    | m    | l    | w    | VolU |
        //        |--------+------+------+------+------+------|      |
        //        | Symbol | d    | s    | t    | n    | r    |------|
        //        |--------+------+------+------+------+------| VolD |
        //        | Upper  | z    | x    | c    | v    | j    |      |
        //        `--------+------+------+------+------+-------------'
        //          | Shft | `    | \    | Left | Rght |
        //          `----------------------------------'
        //                                                   ,-------------.
        //                                                   | Ctrl | Alt  |
        //                                            ,------+------+------|
        //                                            | Bksp | Esc  | Home |
        //                                            |      |      |------|
        //                                            |      |      | End  |
        //                                            `--------------------'
        k(K::Equal),     k(K::Keyboard1), k(K::Keyboard2),      k(K::Keyboard3),  k(K::Keyboard4),    k(K::Keyboard5), media(C::Mute),
        k(K::Tab),       k(K::Q),         k(K::G),              k(K::M),          k(K::L),            k(K::W),         media(C::VolumeIncrement),
        mo(SYMB),        k(K::D),         k(K::S),              k(K::T),          k(K::N),            k(K::R),
        mo(CAPS),        k(K::Z),         k(K::X),              k(K::C),          k(K::V),            k(K::J),         media(C::VolumeDecrement),
        k(K::LeftShift), k(K::Grave),     k(K::NonUSBackslash), k(K::LeftArrow),  k(K::RightArrow),
                                                                                  k(K::LeftControl),  k(K::LeftAlt),
                                                                                                      k(K::Home),
                                                        k(K::DeleteBackspace),    k(K::Escape),       k(K::End),

        // Right hand
        //
        //               ,--------------------------------------------------.
        //               | Play | 6    | 7    | 8    | 9    | 0    | -      |
        //               |------+------+------+------+------+------+--------|
        //               | Next | y    | f    | u    | b    | -    | #      |
        //               |      |------+------+------+------+------+--------|
        //               |------| i    | a    | e    | o    | h    | Symbol |
        //               | Prev |------+------+------+------+------+--------|
        //               |      | k    | p    | ,    | .    | /    | Upper  |
        //               `-------------+------+------+------+------+--------'
        //                             | Up   | Down | [    | ]    | MBED |
        //                             `----------------------------------'
        //        ,-------------.
        //        | Alt  | Ctrl |
        //        |------+------+------.
        //        | PgUp | Entr | Spce |
        //        |------|      |      |
        //        | PgDn |      |      |
        //        `--------------------'
        media(C::PlayPause),         k(K::Keyboard6), k(K::Keyboard7), k(K::Keyboard8),  k(K::Keyboard9),  k(K::Keyboard0),    k(K::Minus),
        media(C::ScanNextTrack),     k(K::Y),         k(K::F),         k(K::U),          k(K::B),          k(K::Minus),        k(K::NonUSHash),
                                     k(K::I),         k(K::A),         k(K::E),          k(K::O),          k(K::H),            mo(SYMB),
        media(C::ScanPreviousTrack), k(K::K),         k(K::P),         k(K::Comma),      k(K::Dot),        k(K::ForwardSlash), mo(CAPS),
                                                      k(K::UpArrow),   k(K::DownArrow),  k(K::LeftBrace),  k(K::RightBrace),   tt(MBED),
        k(K::RightAlt),  k(K::RightControl),
        k(K::PageUp),
        k(K::PageDown),  k(K::ReturnEnter),  k(K::Space),
    ),

    // CAPS
    crate::layout_ergodox!(
        // Left hand
        //
        //        ,--------------------------------------------------.
        //        | +      | !    | "    | £    | $    | %    |      |
        //        |--------+------+------+------+------+-------------|
        //        | TAB    | Q    | G    | M    | L    | W    |      |
        //        |--------+------+------+------+------+------|      |
        //        |        | D    | S    | T    | N    | R    |------|
        //        |--------+------+------+------+------+------|      |
        //        |        | Z    | X    | C    | V    | J    |      |
        //        `--------+------+------+------+------+-------------'
        //          |      | ¬    | |    | LEFT | RGHT |
        //          `----------------------------------'
        //                                                   ,-------------.
        //                                                   | CTRL | ALT  |
        //                                            ,------+------+------|
        //                                            | BKSP | ESC  | HOME |
        //                                            |      |      |------|
        //                                            |      |      | END  |
        //                                            `--------------------'
        s(K::Equal),  s(K::Keyboard1), s(K::Keyboard2),      s(K::Keyboard3),  s(K::Keyboard4),   s(K::Keyboard5), TRNS,
        s(K::Tab),    s(K::Q),         s(K::G),              s(K::M),          s(K::L),           s(K::W),         TRNS,
        TRNS,         s(K::D),         s(K::S),              s(K::T),          s(K::N),           s(K::R),
        TRNS,         s(K::Z),         s(K::X),              s(K::C),          s(K::V),           s(K::J),         TRNS,
        TRNS,         s(K::Grave),     s(K::NonUSBackslash), s(K::LeftArrow),  s(K::RightArrow),
                                                                               s(K::LeftControl), s(K::LeftAlt),
                                                                                                  s(K::Home),
                                                     s(K::DeleteBackspace),    s(K::Escape),      s(K::End),

        // Right hand
        //
        //               ,--------------------------------------------------.
        //               |      | ^    | &    | *    | (    | )    | _      |
        //               |------+------+------+------+------+------+--------|
        //               |      | Y    | F    | U    | B    | _    | ~      |
        //               |      |------+------+------+------+------+--------|
        //               |------| I    | A    | E    | O    | H    |        |
        //               |      |------+------+------+------+------+--------|
        //               |      | K    | P    | –    | ·    | ?    |        |
        //               `-------------+------+------+------+------+--------'
        //                             | UP   | DOWN | {    | }    |      |
        //                             `----------------------------------'
        //        ,-------------.
        //        | ALT  | CTRL |
        //        |------+------+------.
        //        | PGUP | ENTR | SPCE |
        //        |------|      |      |
        //        | PGDN |      |      |
        //        `--------------------'
        TRNS,  s(K::Keyboard6), s(K::Keyboard7), s(K::Keyboard8),  s(K::Keyboard9),  s(K::Keyboard0),    s(K::Minus),
        TRNS,  s(K::Y),         s(K::F),         s(K::U),          s(K::B),          s(K::Minus),        s(K::NonUSHash),
               s(K::I),         s(K::A),         s(K::E),          s(K::O),          s(K::H),            TRNS,
        TRNS,  s(K::K),         s(K::P),         uc('\u{2013}'),   ralt(K::Dot),     s(K::ForwardSlash), TRNS,
                                s(K::UpArrow),   s(K::DownArrow),  s(K::LeftBrace),  s(K::RightBrace),   TRNS,
        s(K::RightAlt),  s(K::RightControl),
        s(K::PageUp),
        s(K::PageDown),  s(K::ReturnEnter),  s(K::Space),
    ),

    // SYMB
    crate::layout_ergodox!(
        // Left hand
        //
        //        ,--------------------------------------------------.
        //        |        | §    | @    | £    | €    | ©    |      |
        //        |--------+------+------+------+------+-------------|
        //        |        | …    | _    | [    | ]    | ^    |      |
        //        |--------+------+------+------+------+------|      |
        //        |        | \    | /    | {    | }    | *    |------|
        //        |--------+------+------+------+------+------|      |
        //        |        | #    | $    | |    | ~    | `    |      |
        //        `--------+------+------+------+------+-------------'
        //          |      |      |      |      |      |
        //          `----------------------------------'
        //                                                   ,-------------.
        //                                                   |      |      |
        //                                            ,------|------|------|
        //                                            |      |      |      |
        //                                            |      |      |------|
        //                                            |      |      |      |
        //                                            `--------------------'
        TRNS,  uc('\u{a7}'),          s(K::Apostrophe),   s(K::Keyboard3),       ralt(K::Keyboard4),  uc('\u{a9}'),     TRNS,
        TRNS,  uc('\u{2026}'),        s(K::Minus),        k(K::LeftBrace),       k(K::RightBrace),    s(K::Keyboard6),  TRNS,
        TRNS,  k(K::NonUSBackslash),  k(K::ForwardSlash), s(K::LeftBrace),       s(K::RightBrace),    s(K::Keyboard8),
        TRNS,  k(K::NonUSHash),       s(K::Keyboard4),    s(K::NonUSBackslash),  s(K::NonUSHash),     k(K::Grave),      TRNS,
        TRNS,  TRNS,                  TRNS,               TRNS,                  TRNS,
                                                                                 TRNS,                TRNS,
                                                                                                      TRNS,
                                                          TRNS,                  TRNS,                TRNS,

        // Right hand
        //
        //               ,--------------------------------------------------.
        //               |      | ®    | ‘    | ’    | “    | ”    |        |
        //               |------+------+------+------+------+------+--------|
        //               |      | !    | <    | >    | =    | &    |        |
        //               |      |------+------+------+------+------+--------|
        //               |------| ?    | (    | )    | -    | :    |        |
        //               |      |------+------+------+------+------+--------|
        //               |      | +    | %    | "    | '    | ;    |        |
        //               `-------------+------+------+------+------+--------'
        //                             |      |      |      |      |      |
        //                             `----------------------------------'
        //        ,-------------.
        //        |      |      |
        //        |------+------+------.
        //        |      |      |      |
        //        |------|      |      |
        //        |      |      |      |
        //        `--------------------'
        TRNS,  uc('\u{ae}'),        uc('\u{2018}'),   uc('\u{2019}'),   ralt(K::V),        ralt(K::B),         TRNS,
        TRNS,  s(K::Keyboard1),     s(K::Comma),      s(K::Dot),        k(K::Equal),       s(K::Keyboard7),    TRNS,
               s(K::ForwardSlash),  s(K::Keyboard9),  s(K::Keyboard0),  k(K::Minus),       s(K::Semicolon),    TRNS,
        TRNS,  s(K::Equal),         s(K::Keyboard5),  s(K::Keyboard2),  k(K::Apostrophe),  k(K::Semicolon),    TRNS,
                                    TRNS,             TRNS,             TRNS,              TRNS,               TRNS,
        TRNS,  TRNS,
        TRNS,
        TRNS,  TRNS,  TRNS,
    ),

    // MBED
    EMBEDDED_LAYER,
];
