//! Register page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::AuthPageShell;
use crate::ui::auth::{AuthState, RegisterForm, use_auth_context};

/// Pause on the success message before entering the dashboard
#[cfg(not(feature = "ssr"))]
const REDIRECT_DELAY_MS: u32 = 1500;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth_context();

    // Visitors whose session was restored skip the form; a fresh sign-up
    // waits on the success message instead
    Effect::new(move |was_loading: Option<bool>| {
        let state = auth.state.get();
        if matches!(state, AuthState::Authenticated(_)) && was_loading.unwrap_or(true) {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
        state == AuthState::Loading
    });

    let on_success = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let navigate = use_navigate();
            spawn_local(async move {
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                navigate("/dashboard", Default::default());
            });
        }
    };

    view! {
        <AuthPageShell>
            <RegisterForm on_success=Callback::new(on_success) />
        </AuthPageShell>
    }
}
