use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::ui::DashboardLayout;
use crate::ui::auth::provide_auth_context;
use crate::ui::pages::{
    DashboardPage, LandingPage, LoginPage, NewTemplatePage, NotFoundPage, RegisterPage,
    TemplatesPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session context lives for the whole app; logout resets it
    provide_auth_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/drawtab.css"/>

        // sets the document title
        <Title text="Drawtab - Automated Flyer Campaigns"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/auth/login") view=LoginPage/>
                <Route path=path!("/auth/register") view=RegisterPage/>
                <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("templates") view=TemplatesPage/>
                    <Route path=path!("templates/new") view=NewTemplatePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
