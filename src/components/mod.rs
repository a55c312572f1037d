//! UI Components for Livimmo.
//!
//! Card-based marketplace aesthetic components.

mod favorites_header;
mod live_card;
mod nav_header;
mod property_card;
mod property_map;
mod role_selector;
mod scheduled_lives_list;
mod toast;

pub use favorites_header::FavoritesHeader;
pub use live_card::LiveCard;
pub use nav_header::NavHeader;
pub use property_card::PropertyCard;
pub use property_map::PropertyMap;
pub use role_selector::RoleSelector;
pub use scheduled_lives_list::ScheduledLivesList;
pub use toast::ToastHost;
