//! Page components for Livimmo.

mod favorites;
mod home;
mod login;
mod notifications;
mod profile;
mod signup;
mod statics;

pub use favorites::Favorites;
pub use home::Home;
pub use login::Login;
pub use notifications::Notifications;
pub use profile::Profile;
pub use signup::Signup;
pub use statics::{Privacy, Terms};
