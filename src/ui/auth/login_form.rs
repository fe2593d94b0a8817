//! Login form component
//!
//! Email and password sign-in with an inline password recovery request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::{login, reset_password, use_auth_context};
use crate::core::forms::{FormError, LoginRequest};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    // Recovery request outcome
    let recovery_notice = RwSignal::new(None::<String>);

    let validate = move || {
        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
        };
        match request.validate() {
            Ok(()) => {
                email_error.set(None);
                password_error.set(None);
                true
            }
            Err(FormError::MissingFields(errors)) => {
                email_error.set(errors.email);
                password_error.set(errors.password);
                false
            }
            Err(FormError::TermsNotAccepted) => false,
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();
        recovery_notice.set(None);

        if !validate() {
            return;
        }

        let email_val = email.get();
        let password_val = password.get();

        spawn_local(async move {
            if login(&email_val, &password_val).await.is_ok()
                && let Some(callback) = on_success
            {
                callback.run(());
            }
        });
    };

    let on_forgot = move |_| {
        let email_val = email.get();
        if email_val.trim().is_empty() {
            email_error.set(Some("Enter your email to reset your password.".to_string()));
            return;
        }
        auth.clear_error();

        spawn_local(async move {
            match reset_password(email_val.trim()).await {
                Ok(()) => recovery_notice.set(Some(
                    "Check your inbox for a password reset link.".to_string(),
                )),
                Err(failure) => auth.error.set(Some(failure)),
            }
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-white rounded-xl shadow-lg p-8 border border-gray-200">
            <form on:submit=on_submit class="space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-gray-900">"Welcome Back"</h2>
                    <p class="mt-2 text-sm text-gray-600">
                        "Sign in to manage your flyer campaigns"
                    </p>
                </div>

                {move || {
                    auth.error.get().map(|failure| {
                        view! {
                            <div class="p-3 bg-red-50 border border-red-300 rounded-lg">
                                <p class="text-sm text-red-700">{failure.error}</p>
                            </div>
                        }
                    })
                }}

                {move || {
                    recovery_notice.get().map(|notice| {
                        view! {
                            <div class="p-3 bg-green-50 border border-green-300 rounded-lg">
                                <p class="text-sm text-green-700">{notice}</p>
                            </div>
                        }
                    })
                }}

                // Email field
                <div>
                    <label for="email" class="block text-sm font-medium text-gray-900 mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        class:border-red-500=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                    />
                    {move || email_error.get().map(|error| view! {
                        <p class="mt-1 text-sm text-red-500">{error}</p>
                    })}
                </div>

                // Password field
                <div>
                    <div class="flex items-center justify-between mb-1">
                        <label for="password" class="block text-sm font-medium text-gray-900">
                            "Password"
                        </label>
                        <button
                            type="button"
                            class="text-sm text-blue-600 hover:text-blue-700"
                            on:click=on_forgot
                        >
                            "Forgot password?"
                        </button>
                    </div>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            class="w-full px-3 py-2 pr-10 border border-gray-300 rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            class:border-red-500=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || {
                                if show_password.get() {
                                    view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                    {move || password_error.get().map(|error| view! {
                        <p class="mt-1 text-sm text-red-500">{error}</p>
                    })}
                </div>

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    disabled=move || auth.loading.get()
                >
                    {move || {
                        if auth.loading.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign In"</span> }.into_any()
                        }
                    }}
                </button>

                <div class="text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <A href="/auth/register" attr:class="text-blue-600 hover:text-blue-700 font-medium">
                        "Sign up"
                    </A>
                </div>
            </form>
        </div>
    }
}
