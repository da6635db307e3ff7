//! Navigation module
//!
//! This module contains route resolution, the dashboard access gate and the
//! session-aware navigation chrome (navbar and sidebar).

pub mod routes;
pub mod gate;
pub mod sidebar;
pub mod navbar;

// Re-export commonly used types
pub use routes::{Route, LOGIN_PATH, REGISTER_PATH};
pub use gate::{DashboardGate, GateState};
pub use sidebar::{MenuItem, Sidebar, menu_items};
pub use navbar::{Navbar, NavLink, UserMenu};
