use payloads::{VillageId, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::pagination_controls::page_slice;
use crate::components::{ConfirmationModal, PaginationControls};
use crate::contexts::toast::use_toast;
use crate::csv::{download_csv, villages_csv};
use crate::get_api_client;
use crate::hooks::use_villages;
use crate::state::{AdminMutation, State};

/// Case-insensitive substring match over village name and county.
pub fn village_matches(village: &responses::Village, search: &str) -> bool {
    let search = search.trim().to_lowercase();
    if search.is_empty() {
        return true;
    }
    village.details.name.to_lowercase().contains(&search)
        || village.details.county.to_lowercase().contains(&search)
}

#[function_component]
pub fn VillagesPage() -> Html {
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();
    let villages = use_villages();

    let search = use_state(String::new);
    let page = use_state(|| 0usize);
    let pending_delete = use_state(|| None::<responses::Village>);
    let is_deleting = use_state(|| false);

    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            page.set(0);
            search.set(input.value());
        })
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |p: usize| page.set(p))
    };

    let on_close_modal = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let is_deleting = is_deleting.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |_| {
            let Some(village) = (*pending_delete).clone() else {
                return;
            };
            let village_id: VillageId = village.id;

            let pending_delete = pending_delete.clone();
            let is_deleting = is_deleting.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);
                let api_client = get_api_client();
                match api_client.delete_village(&village_id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|s| {
                            s.record_mutation(AdminMutation::DeleteVillage);
                        });
                        toast.success(format!(
                            "Deleted {}",
                            village.details.name
                        ));
                        pending_delete.set(None);
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                is_deleting.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Villages"}
                </h1>
                <Link<Route>
                    to={Route::CreateVillage}
                    classes="px-4 py-2 text-sm font-medium rounded-md text-white
                             bg-neutral-900 hover:bg-neutral-800
                             dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200"
                >
                    {"New village"}
                </Link<Route>>
            </div>

            <input
                type="text"
                placeholder="Search name or county"
                oninput={on_search}
                class="w-full max-w-md px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-sm text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500"
            />

            {villages.render("villages", |all, _, _| {
                let mut rows: Vec<responses::Village> = all
                    .iter()
                    .filter(|v| village_matches(v, &search))
                    .cloned()
                    .collect();
                rows.sort_by(|a, b| a.details.name.cmp(&b.details.name));

                let on_export = {
                    let rows = rows.clone();
                    Callback::from(move |_| {
                        download_csv("villages.csv", &villages_csv(&rows));
                    })
                };

                html! {
                    <div class="space-y-4">
                        <div class="flex items-center justify-between">
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {format!("{} of {} villages", rows.len(), all.len())}
                            </p>
                            <button
                                onclick={on_export}
                                class="px-3 py-1.5 text-sm font-medium rounded-md border
                                       border-neutral-300 dark:border-neutral-600
                                       text-neutral-700 dark:text-neutral-300
                                       hover:bg-neutral-50 dark:hover:bg-neutral-700"
                            >
                                {"Export CSV"}
                            </button>
                        </div>

                        <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg shadow">
                            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                                <thead>
                                    <tr class="text-left text-xs font-medium uppercase tracking-wider
                                               text-neutral-500 dark:text-neutral-400">
                                        <th class="px-4 py-3">{"Name"}</th>
                                        <th class="px-4 py-3">{"County"}</th>
                                        <th class="px-4 py-3">{"Population"}</th>
                                        <th class="px-4 py-3">{"Links"}</th>
                                        <th class="px-4 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                                    { for page_slice(&rows, *page).iter().map(|v| {
                                        let on_delete = {
                                            let pending_delete = pending_delete.clone();
                                            let village = v.clone();
                                            Callback::from(move |_| {
                                                pending_delete.set(Some(village.clone()));
                                            })
                                        };
                                        html! {
                                            <tr key={v.id.to_string()}
                                                class="hover:bg-neutral-50 dark:hover:bg-neutral-700/50">
                                                <td class="px-4 py-3 text-sm font-medium
                                                           text-neutral-900 dark:text-neutral-100">
                                                    {&v.details.name}
                                                </td>
                                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                    {&v.details.county}
                                                </td>
                                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                    {v.details.population}
                                                </td>
                                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                    {v.details.links.len()}
                                                </td>
                                                <td class="px-4 py-3 text-right space-x-3">
                                                    <Link<Route>
                                                        to={Route::EditVillage { id: v.id }}
                                                        classes="text-sm text-neutral-600 hover:text-neutral-800
                                                                 dark:text-neutral-400 dark:hover:text-neutral-200"
                                                    >
                                                        {"Edit"}
                                                    </Link<Route>>
                                                    <button
                                                        onclick={on_delete}
                                                        class="text-sm text-red-600 hover:text-red-800
                                                               dark:text-red-400 dark:hover:text-red-300"
                                                    >
                                                        {"Delete"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                            if rows.is_empty() {
                                <p class="text-center py-8 text-sm text-neutral-500 dark:text-neutral-400">
                                    {"No villages match the search"}
                                </p>
                            }
                        </div>

                        <PaginationControls
                            page={*page}
                            total_rows={rows.len()}
                            on_page={on_page.clone()}
                        />
                    </div>
                }
            })}

            if let Some(village) = &*pending_delete {
                <ConfirmationModal
                    title="Delete village"
                    message={format!(
                        "Delete {}? Linked listings keep working; only the \
                         village page disappears.",
                        village.details.name
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_modal}
                    is_loading={*is_deleting}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use payloads::VillageDetails;
    use uuid::Uuid;

    fn village(name: &str, county: &str) -> responses::Village {
        responses::Village {
            id: VillageId(Uuid::new_v4()),
            details: VillageDetails {
                name: name.to_string(),
                county: county.to_string(),
                ..Default::default()
            },
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    #[test]
    fn search_matches_name_and_county() {
        let kaerla = village("Kärla", "Saaremaa");
        let nina = village("Nina", "Tartumaa");

        assert!(village_matches(&kaerla, "kärla"));
        assert!(village_matches(&nina, "TARTU"));
        assert!(!village_matches(&nina, "saare"));
    }

    #[test]
    fn blank_search_matches_everything() {
        let v = village("Kärla", "Saaremaa");
        assert!(village_matches(&v, ""));
        assert!(village_matches(&v, "   "));
    }
}
