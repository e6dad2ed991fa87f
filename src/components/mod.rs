//! UI Components
//!
//! Cross-page Leptos components.

mod navbar;
mod urgency_breakdown;

pub use navbar::Navbar;
pub use urgency_breakdown::UrgencyBreakdownView;
