use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Sidebar() -> Html {
    let route = use_route::<Route>();

    let items = [
        (Route::Home, "Dashboard"),
        (Route::Properties, "Properties"),
        (Route::Users, "Users"),
        (Route::Villages, "Villages"),
        (Route::Content, "Page Content"),
    ];

    html! {
        <aside class="w-56 flex-shrink-0 border-r border-neutral-200 dark:border-neutral-700
                      bg-neutral-50 dark:bg-neutral-800">
            <div class="px-4 py-5">
                <span class="text-lg font-bold text-neutral-900 dark:text-neutral-100">
                    {"Marketplace Admin"}
                </span>
            </div>
            <nav class="px-2 space-y-1">
                {for items.iter().map(|(target, label)| {
                    let is_active = route.as_ref() == Some(target);
                    html! {
                        <Link<Route>
                            to={target.clone()}
                            classes={classes!(
                                "block", "px-3", "py-2", "rounded-md",
                                "text-sm", "font-medium",
                                if is_active {
                                    "bg-neutral-200 dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                                } else {
                                    "text-neutral-600 dark:text-neutral-400 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                                }
                            )}
                        >
                            {*label}
                        </Link<Route>>
                    }
                })}
            </nav>
        </aside>
    }
}
