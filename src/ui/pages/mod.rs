//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Landing page (home)
//! - Login and register pages
//! - Dashboard overview
//! - Template list and template creation
//! - Not found page

mod auth_shell;
mod dashboard;
mod landing;
mod login;
mod new_template;
mod not_found;
mod register;
mod templates;

use auth_shell::AuthPageShell;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use new_template::NewTemplatePage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use templates::TemplatesPage;
