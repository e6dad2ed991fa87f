//! Routed Views

mod create_crisis;
mod crisis_details;
mod dashboard;
mod login;
mod ngo_list;
mod resource_list;

pub use create_crisis::CreateCrisisPage;
pub use crisis_details::CrisisDetailsPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use ngo_list::NgoListPage;
pub use resource_list::ResourceListPage;
