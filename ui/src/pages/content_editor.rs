use payloads::requests;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::content::{
    ContentMap, PAGE_KEYS, flatten_entries, merge_content,
    static_page_content,
};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_page_content;
use crate::state::{AdminMutation, State};

/// Editor over the merged content map for one public page.
///
/// The textarea grid is seeded from static-table-merged-with-live whenever
/// a fetch lands and nothing is dirty. After a save the PageContent version
/// bump refetches and re-runs the merge, so a section the backend dropped
/// reverts to its static default rather than showing stale edits.
#[function_component]
pub fn ContentEditorPage() -> Html {
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();

    let page_key = use_state(|| PAGE_KEYS[0].to_string());
    let edited = use_state(ContentMap::new);
    let dirty = use_state(|| false);
    let is_saving = use_state(|| false);

    let content = use_page_content((*page_key).clone());

    // Seed the editable map from the merge when data arrives. Edits in
    // progress win until the next save completes.
    {
        let edited = edited.clone();
        let dirty = dirty.clone();
        let page_key_value = (*page_key).clone();
        use_effect_with(
            (content.data.clone(), (*page_key).clone()),
            move |(data, _)| {
                // The fetch state still holds the previous page's entries
                // right after a page switch; seed only from matching data.
                if let Some(page) = data.as_ref()
                    && page.page_key == page_key_value
                    && !*dirty
                {
                    let static_table = static_page_content(&page_key_value);
                    edited.set(merge_content(&static_table, &page.entries));
                }
            },
        );
    }

    let on_page_select = {
        let page_key = page_key.clone();
        let edited = edited.clone();
        let dirty = dirty.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            // Switching pages drops unsaved edits.
            dirty.set(false);
            edited.set(ContentMap::new());
            page_key.set(select.value());
        })
    };

    let on_save = {
        let page_key = page_key.clone();
        let edited = edited.clone();
        let dirty = dirty.clone();
        let is_saving = is_saving.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |_| {
            let key = (*page_key).clone();
            let entries = flatten_entries(&edited);

            let dirty = dirty.clone();
            let is_saving = is_saving.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                let api_client = get_api_client();
                let request = requests::SavePageContent { entries };
                match api_client.save_page_content(&key, &request).await {
                    Ok(()) => {
                        dirty.set(false);
                        dispatch.reduce_mut(|s| {
                            s.record_mutation(AdminMutation::SavePageContent);
                        });
                        toast.success("Content saved");
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Page content"}
                </h1>
                <button
                    onclick={on_save}
                    disabled={*is_saving || !*dirty}
                    class="px-4 py-2 text-sm font-medium rounded-md text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_saving { "Saving..." } else { "Save" }}
                </button>
            </div>

            <select
                onchange={on_page_select}
                class="px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-sm text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500"
            >
                { for PAGE_KEYS.iter().map(|key| html! {
                    <option value={*key} selected={*page_key == *key}>
                        {*key}
                    </option>
                }) }
            </select>

            {content.render("page content", |_, _, _| {
                html! {
                    <div class="space-y-8">
                        { for edited.iter().map(|(language, sections)| {
                            html! {
                                <section key={language.clone()} class="space-y-4">
                                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 uppercase">
                                        {language}
                                    </h2>
                                    { for sections.iter().map(|(section_key, text)| {
                                        let on_input = {
                                            let edited = edited.clone();
                                            let dirty = dirty.clone();
                                            let language = language.clone();
                                            let section_key = section_key.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let textarea: HtmlTextAreaElement =
                                                    e.target_unchecked_into();
                                                let mut next = (*edited).clone();
                                                next.entry(language.clone())
                                                    .or_default()
                                                    .insert(
                                                        section_key.clone(),
                                                        textarea.value(),
                                                    );
                                                dirty.set(true);
                                                edited.set(next);
                                            })
                                        };
                                        html! {
                                            <div key={section_key.clone()}>
                                                <label class="block text-sm font-medium
                                                              text-neutral-700 dark:text-neutral-300 mb-1">
                                                    {section_key}
                                                </label>
                                                <textarea
                                                    value={text.clone()}
                                                    oninput={on_input}
                                                    rows="2"
                                                    class="w-full px-3 py-2 border border-neutral-300
                                                           dark:border-neutral-600 rounded-md shadow-sm
                                                           bg-white dark:bg-neutral-700 text-sm
                                                           text-neutral-900 dark:text-neutral-100
                                                           focus:outline-none focus:ring-2 focus:ring-neutral-500"
                                                />
                                            </div>
                                        }
                                    }) }
                                </section>
                            }
                        }) }
                    </div>
                }
            })}
        </div>
    }
}
