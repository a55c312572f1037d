use dioxus::prelude::*;

use livimmo_core::Session;

use crate::components::ToastHost;
use crate::context::Toaster;
use crate::pages::{Favorites, Home, Login, Notifications, Privacy, Profile, Signup, Terms};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Listing grid with the scheduled lives section
/// - `/favorites` - Saved listings with grid/carousel/map toggle
/// - `/login`, `/signup` - Auth forms
/// - `/terms`, `/privacy` - Static legal pages linked from signup
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/favorites")]
    Favorites {},
    #[route("/notifications")]
    Notifications {},
    #[route("/profile")]
    Profile {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/terms")]
    Terms {},
    #[route("/privacy")]
    Privacy {},
}

/// Root application component.
///
/// Provides global styles, the session and toaster contexts, and routing.
#[component]
pub fn App() -> Element {
    // One session per process; cleared on logout, never persisted.
    let session: Signal<Session> = use_signal(Session::new);
    let toaster = use_hook(Toaster::new);

    use_context_provider(|| session);
    use_context_provider(|| toaster);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastHost {}
    }
}
