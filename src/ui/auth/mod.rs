//! Authentication UI module
//!
//! Session context, sign-in and sign-up forms and the account menu.

mod context;
mod login_form;
mod register_form;
mod user_menu;

pub use context::{
    AuthContext, AuthFailure, AuthState, Identity, login, logout, provide_auth_context, register,
    reset_password, use_auth_context,
};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use user_menu::{UserAvatar, UserMenu};
