//! Login page component
//!
//! A standalone page for user login, redirects to dashboard on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::AuthPageShell;
use crate::ui::auth::{AuthState, LoginForm, use_auth_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/dashboard", Default::default());
    };

    view! {
        <AuthPageShell>
            <LoginForm on_success=Callback::new(on_success) />
        </AuthPageShell>
    }
}
