use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_property_type_stats, use_user_stats};

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    accent: bool,
}

#[function_component]
fn StatCard(props: &StatCardProps) -> Html {
    let value_classes = if props.accent {
        "text-3xl font-bold text-amber-600 dark:text-amber-400"
    } else {
        "text-3xl font-bold text-neutral-900 dark:text-neutral-100"
    };
    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                {&props.label}
            </p>
            <p class={value_classes}>{&props.value}</p>
        </div>
    }
}

/// Dashboard landing page. Both stats queries fire in parallel on mount;
/// each card set renders as soon as its own query resolves.
#[function_component]
pub fn HomePage() -> Html {
    let property_stats = use_property_type_stats();
    let user_stats = use_user_stats();

    html! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Overview"}
                </h1>
            </div>

            <section>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {"Listings"}
                    </h2>
                    <Link<Route>
                        to={Route::Properties}
                        classes="text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
                    >
                        {"View all →"}
                    </Link<Route>>
                </div>
                {property_stats.render("listing stats", |stats, _, _| {
                    html! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            <StatCard
                                label="Total listings"
                                value={stats.total.to_string()}
                            />
                            <StatCard
                                label="Awaiting review"
                                value={stats.in_review.to_string()}
                                accent={stats.in_review > 0}
                            />
                            { for stats.counts.iter().map(|c| html! {
                                <StatCard
                                    key={c.property_type.label()}
                                    label={c.property_type.label()}
                                    value={c.count.to_string()}
                                />
                            }) }
                        </div>
                    }
                })}
            </section>

            <section>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {"Accounts"}
                    </h2>
                    <Link<Route>
                        to={Route::Users}
                        classes="text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
                    >
                        {"View all →"}
                    </Link<Route>>
                </div>
                {user_stats.render("account stats", |stats, _, _| {
                    html! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            <StatCard
                                label="Total accounts"
                                value={stats.total.to_string()}
                            />
                            <StatCard
                                label="Sellers"
                                value={stats.sellers.to_string()}
                            />
                            <StatCard
                                label="Buyers"
                                value={stats.buyers.to_string()}
                            />
                            <StatCard
                                label="Verified"
                                value={stats.verified.to_string()}
                            />
                        </div>
                    }
                })}
            </section>
        </div>
    }
}
