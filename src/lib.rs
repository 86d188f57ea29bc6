//! ErgoDox EZ keymaps
//!
//! Layer tables and indicator LED handling for two ErgoDox EZ layouts, `ka2`
//! and `jeo`.  The firmware runtime owns the matrix scan, USB and layer
//! resolution; this crate only answers "what is on this key" and "which
//! lights should be on".

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// #![deny(missing_docs)]

#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

pub use usbd_human_interface_device::page::{Consumer, Keyboard};

pub use board::{Board, Latch, UnicodeMode};
pub use indicators::{Command, HostLeds, Indicator};
pub use keymap::{jeo::Jeo, ka2::Ka2, Keymap};
pub use keys::{Cell, Grid, Mods};
pub use layer::{Layer, LayerState};

pub mod board;
pub mod indicators;
pub mod keymap;
pub mod keys;
pub mod layer;

#[cfg(test)]
mod testlog;

cfg_if::cfg_if! {
    if #[cfg(any(test, feature = "log"))] {
        mod log {
            pub use ::log::info;
            pub use ::log::warn;
        }
    } else if #[cfg(feature = "defmt")] {
        mod log {
            pub use defmt::info;
            pub use defmt::warn;
        }
    } else {
        mod log {
            pub(crate) use crate::nop::{info, warn};
        }
    }
}

/// Logging macros that expand to nothing, for builds with no logging backend.
#[allow(unused_macros, unused_imports)]
mod nop {
    macro_rules! nop_info {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! nop_warn {
        ($($arg:tt)*) => {{}};
    }
    pub(crate) use nop_info as info;
    pub(crate) use nop_warn as warn;
}

/// The keymap a firmware build links against.
///
/// Chosen with the `ka2` feature; `jeo` otherwise.
#[cfg(feature = "ka2")]
pub type Selected = Ka2;

/// The keymap a firmware build links against.
///
/// Chosen with the `ka2` feature; `jeo` otherwise.
#[cfg(not(feature = "ka2"))]
pub type Selected = Jeo;

#[cfg(test)]
mod tests {
    #[test]
    fn silent_logging() {
        // Same shapes as the calls in `Keymap`, which a build without `log` or `defmt` expands
        // through these.
        crate::nop::info!("{}: unicode input mode {}", "jeo", "linux");
        crate::nop::warn!("LED report has reserved bits: {}", 0xe0u8);
    }
}
