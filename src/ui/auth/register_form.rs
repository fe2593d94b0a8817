//! Register form component
//!
//! Collects username, email and password plus the terms agreement, then
//! creates the account and signs into it in one step.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::{AuthFailure, register, use_auth_context};
use crate::core::forms::{FieldErrors, FormError, RegistrationForm};
use crate::ui::icon::{Icon, icons};

/// Shown once the account exists and the session is open
pub const REGISTER_SUCCESS_MESSAGE: &str = "Account Created Successfully! Redirecting...";

/// What the form offers after a failed registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recovery {
    /// Fix the input and submit again
    Resubmit,
    /// The account exists; only signing in can continue
    SignIn,
}

fn recovery_for(failure: &AuthFailure) -> Recovery {
    if failure.is_registered_login_failed() {
        Recovery::SignIn
    } else {
        Recovery::Resubmit
    }
}

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback when the account is created and signed in
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    // Validation state
    let field_errors = RwSignal::new(FieldErrors::default());
    let form_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let recovery = RwSignal::new(Recovery::Resubmit);
    let must_sign_in = move || recovery.get() == Recovery::SignIn;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();
        form_error.set(None);
        field_errors.set(FieldErrors::default());

        let form = RegistrationForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            agree_terms: agree_terms.get(),
        };

        if let Err(err) = form.validate() {
            if let FormError::MissingFields(errors) = &err {
                field_errors.set(errors.clone());
            }
            form_error.set(Some(err.to_string()));
            return;
        }

        spawn_local(async move {
            match register(&form).await {
                Ok(_) => {
                    success.set(true);
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Err(failure) => {
                    recovery.set(recovery_for(&failure));
                    if let Some(errors) = failure.fields.clone() {
                        field_errors.set(errors);
                    }
                }
            }
        });
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-lg \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    view! {
        <div class="w-full max-w-md mx-auto bg-white rounded-xl shadow-lg p-8 border border-gray-200">
            <Show
                when=move || !success.get()
                fallback=|| view! {
                    <div class="text-center py-8">
                        <div class="w-16 h-16 mx-auto mb-4 bg-green-100 rounded-full flex items-center justify-center">
                            <Icon name=icons::CHECK class="w-8 h-8" />
                        </div>
                        <h2 class="text-xl font-semibold text-gray-900">{REGISTER_SUCCESS_MESSAGE}</h2>
                    </div>
                }
            >
                <form on:submit=on_submit class="space-y-5">
                    <div class="text-center">
                        <h2 class="text-2xl font-bold text-gray-900">"Create your account"</h2>
                        <p class="mt-2 text-sm text-gray-600">
                            "Start sending automated flyers in minutes"
                        </p>
                    </div>

                    {move || {
                        form_error
                            .get()
                            .or_else(|| auth.error.get().map(|failure| failure.error))
                            .map(|message| view! {
                                <div class="p-3 bg-red-50 border border-red-300 rounded-lg">
                                    <p class="text-sm text-red-700">{message}</p>
                                    <Show when=must_sign_in>
                                        <A
                                            href="/auth/login"
                                            attr:class="mt-2 inline-block text-sm font-medium text-blue-600 hover:text-blue-700"
                                        >
                                            "Sign in"
                                        </A>
                                    </Show>
                                </div>
                            })
                    }}

                    // Username
                    <div>
                        <label for="username" class="block text-sm font-medium text-gray-900 mb-1">
                            "Username"
                        </label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            placeholder="Your name"
                            class=input_class
                            class:border-red-500=move || field_errors.with(|e| e.username.is_some())
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                field_errors.update(|e| e.username = None);
                            }
                        />
                        {move || field_errors.with(|e| e.username.clone()).map(|error| view! {
                            <p class="mt-1 text-sm text-red-500">{error}</p>
                        })}
                    </div>

                    // Email
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
                            class=input_class
                            class:border-red-500=move || field_errors.with(|e| e.email.is_some())
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                field_errors.update(|e| e.email = None);
                            }
                        />
                        {move || field_errors.with(|e| e.email.clone()).map(|error| view! {
                            <p class="mt-1 text-sm text-red-500">{error}</p>
                        })}
                    </div>

                    // Password
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-900 mb-1">
                            "Password"
                        </label>
                        <div class="relative">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                name="password"
                                autocomplete="new-password"
                                placeholder="Create a password"
                                class=input_class
                                class:border-red-500=move || field_errors.with(|e| e.password.is_some())
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    field_errors.update(|e| e.password = None);
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
                        {move || field_errors.with(|e| e.password.clone()).map(|error| view! {
                            <p class="mt-1 text-sm text-red-500">{error}</p>
                        })}
                    </div>

                    // Terms agreement
                    <label class="flex items-start gap-2 text-sm text-gray-600">
                        <input
                            type="checkbox"
                            class="mt-0.5 h-4 w-4 rounded border-gray-300"
                            prop:checked=move || agree_terms.get()
                            on:change=move |ev| agree_terms.set(event_target_checked(&ev))
                        />
                        <span>
                            "I agree to the "
                            <a href="#" class="text-blue-600 hover:text-blue-700">"Terms of Service"</a>
                            " and "
                            <a href="#" class="text-blue-600 hover:text-blue-700">"Privacy Policy"</a>
                        </span>
                    </label>

                    <Show when=move || !must_sign_in()>
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
                                            "Creating account..."
                                        </span>
                                    }.into_any()
                                } else {
                                    view! { <span class="block">"Create Account"</span> }.into_any()
                                }
                            }}
                        </button>
                    </Show>

                    <div class="text-center text-sm text-gray-600">
                        "Already have an account? "
                        <A href="/auth/login" attr:class="text-blue-600 hover:text-blue-700 font-medium">
                            "Sign in"
                        </A>
                    </div>
                </form>
            </Show>
        </div>
    }
}
