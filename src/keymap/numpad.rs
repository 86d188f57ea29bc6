//! The embedded layer, shared by both keymaps.
//!
//! F1 to F15 sit on the 3x5 letter block of the left half, and the right half becomes a numpad.
//! The numpad '=' is the regular '=' key, which is what PC mode sends.

use usbd_human_interface_device::page::Keyboard as K;

use crate::keys::{k, Grid, TRNS};

#[rustfmt::skip]
pub const EMBEDDED_LAYER: Grid = crate::layout_ergodox!(
    // Left hand
    //
    //        ,--------------------------------------------------.
    //        |        |      |      |      |      |      |      |
    //        |--------+------+------+------+------+-------------|
    //        |        | F1   | F2   | F3   | F4   | F5   |      |
    //        |--------+------+------+------+------+------|      |
    //        |        | F6   | F7   | F8   | F9   | F10  |------|
    //        |--------+------+------+------+------+------|      |
    //        |        | F11  | F12  | F13  | F14  | F15  |      |
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
    TRNS,  TRNS,      TRNS,      TRNS,      TRNS,      TRNS,       TRNS,
    TRNS,  k(K::F1),  k(K::F2),  k(K::F3),  k(K::F4),  k(K::F5),   TRNS,
    TRNS,  k(K::F6),  k(K::F7),  k(K::F8),  k(K::F9),  k(K::F10),
    TRNS,  k(K::F11), k(K::F12), k(K::F13), k(K::F14), k(K::F15),  TRNS,
    TRNS,  TRNS,      TRNS,      TRNS,      TRNS,
                                                       TRNS,       TRNS,
                                                                   TRNS,
                                            TRNS,      TRNS,       TRNS,

    // Right hand
    //
    //               ,--------------------------------------------------.
    //               |      |      | NmLk | =    | /    | *    |        |
    //               |------+------+------+------+------+------+--------|
    //               |      |      | 7    | 8    | 9    | -    |        |
    //               |      |------+------+------+------+------+--------|
    //               |------|      | 4    | 5    | 6    | +    |        |
    //               |      |------+------+------+------+------+--------|
    //               |      |      | 1    | 2    | 3    | Entr |        |
    //               `-------------+------+------+------+------+--------'
    //                             |      |      | .    | Entr |      |
    //                             `----------------------------------'
    //        ,-------------.
    //        |      |      |
    //        |------+------+------.
    //        |      |      | 0    |
    //        |------|      |      |
    //        |      |      |      |
    //        `--------------------'
    TRNS,  TRNS,  k(K::KeypadNumLockAndClear), k(K::Equal),   k(K::KeypadDivide), k(K::KeypadMultiply), TRNS,
    TRNS,  TRNS,  k(K::Keypad7),               k(K::Keypad8), k(K::Keypad9),      k(K::KeypadSubtract), TRNS,
           TRNS,  k(K::Keypad4),               k(K::Keypad5), k(K::Keypad6),      k(K::KeypadAdd),      TRNS,
    TRNS,  TRNS,  k(K::Keypad1),               k(K::Keypad2), k(K::Keypad3),      k(K::KeypadEnter),    TRNS,
                  TRNS,                        TRNS,          k(K::KeypadDot),    k(K::KeypadEnter),    TRNS,
    TRNS,  TRNS,
    TRNS,
    TRNS,  TRNS,  k(K::Keypad0),
);
