use payloads::VillageId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{VILLAGE_NOT_FOUND, use_village};
use crate::pages::village_editor::{EditorMode, VillageEditor};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: VillageId,
}

#[function_component]
pub fn EditVillagePage(props: &Props) -> Html {
    let village = use_village(props.id);
    let village_id = props.id;

    if village.error.as_deref() == Some(VILLAGE_NOT_FOUND) {
        return html! {
            <div class="text-center py-16">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Village not found"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mt-2">
                    {"This village may have been deleted."}
                </p>
                <Link<Route>
                    to={Route::Villages}
                    classes="inline-block mt-4 text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
                >
                    {"← Back to villages"}
                </Link<Route>>
            </div>
        };
    }

    village.render("village", move |village, _, _| {
        html! {
            <div class="space-y-6">
                <div>
                    <Link<Route>
                        to={Route::Villages}
                        classes="text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
                    >
                        {"← Villages"}
                    </Link<Route>>
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mt-1">
                        {format!("Edit {}", village.details.name)}
                    </h1>
                </div>
                <VillageEditor
                    mode={EditorMode::Edit(village_id)}
                    initial={Some(village.details.clone())}
                />
            </div>
        }
    })
}
