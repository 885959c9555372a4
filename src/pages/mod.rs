//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod map;
pub mod report;
pub mod statics;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use map::MapView;
pub use report::Report;
pub use statics::{About, Contact, HowItWorks, Privacy};
