// SPDX-License-Identifier: MPL-2.0
pub mod magnifier;

pub use magnifier::{magnifier, LensStyle, Magnifier};
