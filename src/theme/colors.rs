//! Color constants for the Livimmo marketplace palette.
//!
//! Light, card-based listing aesthetic: white surfaces, a blue primary,
//! and the live-red accent for anything video.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_MUTED: &str = "#f6f7f9";
pub const BORDER: &str = "#e5e7eb";

// === PRIMARY (Brand, prices, links) ===
pub const PRIMARY: &str = "#2563eb";
pub const PRIMARY_HOVER: &str = "#1d4ed8";
pub const PRIMARY_SOFT: &str = "rgba(37, 99, 235, 0.1)";

// === LIVE (Video accents, badges) ===
pub const LIVE_RED: &str = "#ea384c";
pub const BADGE_RED: &str = "#ef4444";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#111827";
pub const TEXT_SECONDARY: &str = "#6b7280";
pub const TEXT_ON_PRIMARY: &str = "#ffffff";

// === SEMANTIC ===
pub const DESTRUCTIVE: &str = "#dc2626";
pub const SUCCESS: &str = "#16a34a";
