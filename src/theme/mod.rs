//! Theme for the Livimmo desktop UI.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
