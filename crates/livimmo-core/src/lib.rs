//! Livimmo Core Library
//!
//! Domain model and UI-facing state for the Livimmo real-estate marketplace
//! front-end: the session holder, the two-step signup flow, listing and
//! live-event records, and the mock data that stands in for a backend.
//!
//! ## Overview
//!
//! Everything here is process-lifetime state. There is no persistence and no
//! network: `Session::login` and `Session::signup` are stubs that always
//! succeed, and listings come from [`data::mock_properties`]. The crate exists
//! so the view layer stays thin and the state transitions stay testable.
//!
//! ## Quick Start
//!
//! ```
//! use livimmo_core::{Session, SignupFlow, AccountType};
//!
//! let mut session = Session::new();
//! let mut flow = SignupFlow::new();
//!
//! flow.form.first_name = "John".into();
//! flow.form.last_name = "Doe".into();
//! flow.form.email = "john@example.com".into();
//! flow.form.password = "hunter22".into();
//! flow.form.accept_terms = true;
//!
//! // Credentials step advances to role selection.
//! let outcome = flow.submit(&mut session);
//! assert!(!outcome.completed);
//!
//! // Picking a role completes the signup.
//! flow.selected_role = Some(AccountType::Buyer);
//! let outcome = flow.submit(&mut session);
//! assert!(outcome.completed);
//! assert!(session.is_authenticated());
//! ```

pub mod data;
pub mod error;
pub mod notify;
pub mod session;
pub mod signup;
pub mod types;

// Re-exports
pub use error::AuthError;
pub use notify::Toast;
pub use session::Session;
pub use signup::{SignupFlow, SignupForm, SignupStep, SubmitOutcome};
pub use types::*;
