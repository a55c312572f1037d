//! Core types for the Livimmo marketplace front-end

mod live;
mod property;
mod user;
mod view;

pub use live::{mock_coordinates, LiveEvent, PriceTag};
pub use property::{format_price, Agent, Coordinates, Property};
pub use user::{AccountType, User};
pub use view::ViewMode;
