use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::pages::village_editor::{EditorMode, VillageEditor};

#[function_component]
pub fn CreateVillagePage() -> Html {
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
                    {"New village"}
                </h1>
            </div>
            <VillageEditor mode={EditorMode::Create} />
        </div>
    }
}
