//! Dashboard overview page
//!
//! Summary cards, recent activity, upcoming events and quick actions. The
//! figures are sample data until the campaign collections are wired in.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};

struct Stat {
    name: &'static str,
    value: &'static str,
    icon: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { name: "Total Templates", value: "12", icon: icons::TEMPLATE },
    Stat { name: "Active Contacts", value: "156", icon: icons::USERS },
    Stat { name: "Scheduled Events", value: "24", icon: icons::CALENDAR },
    Stat { name: "Emails Sent", value: "89", icon: icons::CHART },
];

struct Activity {
    kind: &'static str,
    description: &'static str,
    time: &'static str,
}

const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        kind: "Email Sent",
        description: "Birthday flyer sent to John Doe",
        time: "2 hours ago",
    },
    Activity {
        kind: "Template Upload",
        description: "New anniversary template uploaded",
        time: "4 hours ago",
    },
    Activity {
        kind: "Event Scheduled",
        description: "Sarah's birthday scheduled for next month",
        time: "1 day ago",
    },
    Activity {
        kind: "Contact Added",
        description: "5 new contacts imported",
        time: "2 days ago",
    },
];

struct UpcomingEvent {
    name: &'static str,
    kind: &'static str,
    date: &'static str,
    template: &'static str,
}

const UPCOMING_EVENTS: [UpcomingEvent; 3] = [
    UpcomingEvent {
        name: "John Doe",
        kind: "Birthday",
        date: "Tomorrow",
        template: "Birthday Template #1",
    },
    UpcomingEvent {
        name: "Sarah Johnson",
        kind: "Work Anniversary",
        date: "In 3 days",
        template: "Anniversary Template #2",
    },
    UpcomingEvent {
        name: "Mike Wilson",
        kind: "Birthday",
        date: "Next week",
        template: "Birthday Template #3",
    },
];

const QUICK_ACTIONS: [(&str, &str, &str, &str); 4] = [
    (
        "/dashboard/templates/new",
        icons::UPLOAD,
        "Upload Template",
        "Add a new PNG template for your flyers",
    ),
    (
        "/dashboard/contacts",
        icons::USERS,
        "Add Contacts",
        "Import or add new contacts manually",
    ),
    (
        "/dashboard/events",
        icons::CLOCK,
        "Schedule Event",
        "Create a new birthday or anniversary event",
    ),
    (
        "/dashboard/calendar",
        icons::CALENDAR,
        "View Calendar",
        "See all upcoming events in calendar view",
    ),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();
    let greeting = move || {
        auth.user()
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <Title text="Dashboard | Drawtab" />

        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{greeting}</h1>
                <p class="mt-1 text-sm text-gray-500">
                    "Manage your automated flyer campaigns and view analytics."
                </p>
            </div>

            // Stats
            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                {STATS
                    .iter()
                    .map(|stat| view! {
                        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-5 flex items-center gap-4">
                            <Icon name=stat.icon class="w-6 h-6" />
                            <dl>
                                <dt class="text-sm font-medium text-gray-500 truncate">{stat.name}</dt>
                                <dd class="text-lg font-semibold text-gray-900">{stat.value}</dd>
                            </dl>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                // Recent Activity
                <section class="bg-white rounded-lg shadow-sm border border-gray-200">
                    <h2 class="px-5 py-4 text-lg font-medium text-gray-900 border-b border-gray-200">
                        "Recent Activity"
                    </h2>
                    <ul class="divide-y divide-gray-200">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|activity| view! {
                                <li class="px-5 py-4 flex items-start justify-between gap-4">
                                    <div>
                                        <p class="text-sm font-medium text-gray-900">{activity.kind}</p>
                                        <p class="text-sm text-gray-500">{activity.description}</p>
                                    </div>
                                    <span class="text-xs text-gray-400 whitespace-nowrap">{activity.time}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </section>

                // Upcoming Events
                <section class="bg-white rounded-lg shadow-sm border border-gray-200">
                    <h2 class="px-5 py-4 text-lg font-medium text-gray-900 border-b border-gray-200">
                        "Upcoming Events"
                    </h2>
                    <ul class="divide-y divide-gray-200">
                        {UPCOMING_EVENTS
                            .iter()
                            .map(|event| view! {
                                <li class="px-5 py-4 flex items-start justify-between gap-4">
                                    <div>
                                        <p class="text-sm font-medium text-gray-900">{event.name}</p>
                                        <p class="text-sm text-gray-500">
                                            {format!("{} • {}", event.kind, event.template)}
                                        </p>
                                    </div>
                                    <span class="text-xs font-medium text-blue-600 whitespace-nowrap">{event.date}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    <div class="px-5 py-3 border-t border-gray-200">
                        <A href="/dashboard/events" attr:class="text-sm font-medium text-blue-600 hover:text-blue-500">
                            "View all events →"
                        </A>
                    </div>
                </section>
            </div>

            // Quick Actions
            <section>
                <h2 class="text-lg font-medium text-gray-900 mb-4">"Quick Actions"</h2>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|(href, icon, title, body)| view! {
                            <A
                                href=*href
                                attr:class="block bg-white rounded-lg border border-gray-200 p-5 hover:border-blue-400 hover:shadow-sm transition"
                            >
                                <Icon name=*icon class="w-6 h-6 mb-3" />
                                <h3 class="text-sm font-semibold text-gray-900">{*title}</h3>
                                <p class="mt-1 text-sm text-gray-500">{*body}</p>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
