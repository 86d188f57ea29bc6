//! Kinesis-like layout, mimicking a UK layout in generic PC mode.
//!
//! The ErgoDox has no function row.  Tapping the extra key below right shift toggles the embedded
//! layer, and holding it gives the embedded layer only while held.  The keys on the inner column
//! of each half, which the Kinesis lacks, are media keys.

use usbd_human_interface_device::page::{Consumer as C, Keyboard as K};

use crate::keys::{k, media, tt, Grid, NO};
use crate::layer::Layer;

use super::numpad::EMBEDDED_LAYER;
use super::Keymap;

pub const BASE: Layer = 0;
pub const MBED: Layer = 1;

pub struct Ka2;

impl Keymap for Ka2 {
    const NAME: &'static str = "ka2";
    const EMBEDDED: Layer = MBED;

    fn layers() -> &'static [Grid] {
        &LAYERS
    }
}

#[rustfmt::skip]
pub static LAYERS: [Grid; 2] = [
    // BASE
    crate::layout_ergodox!(
        // Left hand
        //
        //        ,--------------------------------------------------.
        //        | = +    | 1 !  | 2 "  | 3 £  | 4 $  | 5 %  | Mute |
        //        |--------+------+------+------+------+-------------|
        //        | Tab    | Q    | W    | E    | R    | T    | VolU |
        //        |--------+------+------+------+------+------|      |
        //        | Caps   | A    | S    | D    | F    | G    |------|
        //        |--------+------+------+------+------+------| VolD |
        //        | Shift  | Z    | X    | C    | V    | B    |      |
        //        `--------+------+------+------+------+-------------'
        //          | #### | ` ¬  | \ |  | Left | Rght |
        //          `----------------------------------'
        //                                                   ,-------------.
        //                                                   | Ctrl | Alt  |
        //                                            ,------+------+------|
        //                                            | Bksp | Del  | Home |
        //                                            |      |      |------|
        //                                            |      |      | End  |
        //                                            `--------------------'
        k(K::Equal),     k(K::Keyboard1), k(K::Keyboard2),      k(K::Keyboard3),  k(K::Keyboard4),      k(K::Keyboard5), media(C::Mute),
        k(K::Tab),       k(K::Q),         k(K::W),              k(K::E),          k(K::R),              k(K::T),         media(C::VolumeIncrement),
        k(K::CapsLock),  k(K::A),         k(K::S),              k(K::D),          k(K::F),              k(K::G),
        k(K::LeftShift), k(K::Z),         k(K::X),              k(K::C),          k(K::V),              k(K::B),         media(C::VolumeDecrement),
        NO,              k(K::Grave),     k(K::NonUSBackslash), k(K::LeftArrow),  k(K::RightArrow),
                                                                                  k(K::LeftControl),    k(K::LeftAlt),
                                                                                                        k(K::Home),
                                                        k(K::DeleteBackspace),    k(K::DeleteForward),  k(K::End),

        // Right hand
        //
        //               ,--------------------------------------------------.
        //               | Play | 6 ^  | 7 &  | 8 *  | 9 (  | 0 )  | - _    |
        //               |------+------+------+------+------+------+--------|
        //               | Next | Y    | U    | I    | O    | P    | # ~    |
        //               |      |------+------+------+------+------+--------|
        //               |------| H    | J    | K    | L    | ; :  | ' @    |
        //               | Prev |------+------+------+------+------+--------|
        //               |      | N    | M    | , <  | . >  | / ?  | Shift  |
        //               `-------------+------+------+------+------+--------'
        //                             | Up   | Down | [ {  | ] }  | MBED |
        //                             `----------------------------------'
        //        ,-------------.
        //        | Alt  | Ctrl |
        //        |------+------+------.
        //        | PgUp | Entr | Spce |
        //        |------|      |      |
        //        | PgDn |      |      |
        //        `--------------------'
        media(C::PlayPause),         k(K::Keyboard6), k(K::Keyboard7), k(K::Keyboard8),  k(K::Keyboard9),  k(K::Keyboard0),    k(K::Minus),
        media(C::ScanNextTrack),     k(K::Y),         k(K::U),         k(K::I),          k(K::O),          k(K::P),            k(K::NonUSHash),
                                     k(K::H),         k(K::J),         k(K::K),          k(K::L),          k(K::Semicolon),    k(K::Apostrophe),
        media(C::ScanPreviousTrack), k(K::N),         k(K::M),         k(K::Comma),      k(K::Dot),        k(K::ForwardSlash), k(K::RightShift),
                                                      k(K::UpArrow),   k(K::DownArrow),  k(K::LeftBrace),  k(K::RightBrace),   tt(MBED),
        k(K::RightAlt),  k(K::RightControl),
        k(K::PageUp),
        k(K::PageDown),  k(K::ReturnEnter),  k(K::Space),
    ),

    // MBED
    EMBEDDED_LAYER,
];
