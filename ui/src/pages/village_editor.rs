//! Shared seven-section wizard behind the create and edit village pages.

use payloads::{InternetType, VillageId, requests};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::{ImageUpload, VillageTabHeader};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_push_route;
use crate::state::{AdminMutation, State};
use crate::village_form::{
    BasicErrors, Section, VillageDraft, coerce_coordinate, coerce_count,
    coerce_distance, display_coordinate, display_count, display_distance,
};

#[derive(Clone, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(VillageId),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: EditorMode,
    /// Starting point for the draft; `None` means a fresh create draft.
    #[prop_or_default]
    pub initial: Option<payloads::VillageDetails>,
}

#[function_component]
pub fn VillageEditor(props: &Props) -> Html {
    let (_, dispatch) = use_store::<State>();
    // The wizard is tall; land back at the top of the village list.
    let push_route = use_push_route();
    let toast = use_toast();

    let draft = {
        let initial = props.initial.clone();
        use_state(move || match initial {
            Some(details) => VillageDraft::from_existing(details),
            None => VillageDraft::new(),
        })
    };
    let active = use_state(|| Section::Basic);
    let basic_errors = use_state(BasicErrors::default);
    let is_submitting = use_state(|| false);

    let completed: Vec<Section> = Section::ORDER
        .iter()
        .copied()
        .filter(|s| draft.is_complete(*s))
        .collect();

    let on_select = {
        let active = active.clone();
        Callback::from(move |section: Section| active.set(section))
    };

    let on_previous = {
        let active = active.clone();
        Callback::from(move |_| {
            if let Some(previous) = active.previous() {
                active.set(previous);
            }
        })
    };

    let on_next = {
        let active = active.clone();
        Callback::from(move |_| {
            if let Some(next) = active.next() {
                active.set(next);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let active = active.clone();
        let basic_errors = basic_errors.clone();
        let is_submitting = is_submitting.clone();
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();
        let toast = toast.clone();
        let mode = props.mode.clone();

        Callback::from(move |_| {
            let errors = draft.validate_basic();
            if !errors.is_empty() {
                basic_errors.set(errors);
                // Submit errors always live in the basic section.
                active.set(Section::Basic);
                return;
            }
            basic_errors.set(BasicErrors::default());

            let details = draft.details.clone();
            let mode = mode.clone();
            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            let push_route = push_route.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let api_client = get_api_client();

                let result = match mode {
                    EditorMode::Create => api_client
                        .create_village(&requests::CreateVillage { details })
                        .await
                        .map(|_| None),
                    EditorMode::Edit(village_id) => api_client
                        .update_village(
                            &village_id,
                            &requests::UpdateVillage { details },
                        )
                        .await
                        .map(Some),
                };

                match result {
                    Ok(updated) => {
                        dispatch.reduce_mut(|s| {
                            match &updated {
                                Some(village) => {
                                    s.record_mutation(
                                        AdminMutation::UpdateVillage,
                                    );
                                    s.set_village(village.clone());
                                }
                                None => s.record_mutation(
                                    AdminMutation::CreateVillage,
                                ),
                            };
                        });
                        toast.success("Village saved");
                        push_route.emit(Route::Villages);
                    }
                    // The draft stays intact so nothing typed is lost.
                    Err(e) => toast.error(e.to_string()),
                }
                is_submitting.set(false);
            });
        })
    };

    let section_body = match *active {
        Section::Basic => {
            render_basic(&draft, &basic_errors)
        }
        Section::Infrastructure => render_infrastructure(&draft),
        Section::Internet => render_internet(&draft),
        Section::Transport => render_transport(&draft),
        Section::Community => render_community(&draft),
        Section::Leisure => render_leisure(&draft),
        Section::Links => render_links(&draft),
    };

    html! {
        <div class="max-w-3xl space-y-6">
            <VillageTabHeader
                active={*active}
                completed={completed}
                on_select={on_select}
            />

            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
                {section_body}
            </div>

            <div class="flex items-center justify-between">
                <div class="flex gap-3">
                    <button
                        onclick={on_previous}
                        disabled={active.previous().is_none()}
                        class="px-4 py-2 text-sm font-medium rounded-md border
                               border-neutral-300 dark:border-neutral-600
                               text-neutral-700 dark:text-neutral-300
                               hover:bg-neutral-50 dark:hover:bg-neutral-700
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Previous"}
                    </button>
                    <button
                        onclick={on_next}
                        disabled={active.next().is_none()}
                        class="px-4 py-2 text-sm font-medium rounded-md border
                               border-neutral-300 dark:border-neutral-600
                               text-neutral-700 dark:text-neutral-300
                               hover:bg-neutral-50 dark:hover:bg-neutral-700
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Next"}
                    </button>
                </div>
                <button
                    onclick={on_submit}
                    disabled={*is_submitting}
                    class="px-4 py-2 text-sm font-medium rounded-md text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_submitting { "Saving..." } else { "Save village" }}
                </button>
            </div>
        </div>
    }
}

const INPUT_CLASSES: &str =
    "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
     rounded-md shadow-sm bg-white dark:bg-neutral-700 text-sm
     text-neutral-900 dark:text-neutral-100
     focus:outline-none focus:ring-2 focus:ring-neutral-500";

const LABEL_CLASSES: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1";

fn text_field(
    label: &str,
    value: String,
    error: Option<&'static str>,
    on_change: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });
    html! {
        <div>
            <label class={LABEL_CLASSES}>{label}</label>
            <input type="text" value={value} {oninput} class={INPUT_CLASSES} />
            if let Some(error) = error {
                <p class="text-sm text-red-600 dark:text-red-400 mt-1">{error}</p>
            }
        </div>
    }
}

fn number_field(
    label: &str,
    value: String,
    error: Option<&'static str>,
    on_change: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });
    html! {
        <div>
            <label class={LABEL_CLASSES}>{label}</label>
            <input
                type="number"
                value={value}
                {oninput}
                class={INPUT_CLASSES}
            />
            if let Some(error) = error {
                <p class="text-sm text-red-600 dark:text-red-400 mt-1">{error}</p>
            }
        </div>
    }
}

fn checkbox_field(label: &str, checked: bool, on_change: Callback<bool>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.checked());
    });
    html! {
        <label class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
            <input
                type="checkbox"
                checked={checked}
                {onchange}
                class="rounded border-neutral-300 dark:border-neutral-600"
            />
            {label}
        </label>
    }
}

/// Apply one mutation to the draft state. Every field callback funnels
/// through here so a write to an absent slice materializes it.
fn edit(
    draft: &UseStateHandle<VillageDraft>,
    apply: impl Fn(&mut VillageDraft, String) + 'static,
) -> Callback<String> {
    let draft = draft.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}

fn edit_flag(
    draft: &UseStateHandle<VillageDraft>,
    apply: impl Fn(&mut VillageDraft, bool) + 'static,
) -> Callback<bool> {
    let draft = draft.clone();
    Callback::from(move |value: bool| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}

fn render_basic(
    draft: &UseStateHandle<VillageDraft>,
    errors: &BasicErrors,
) -> Html {
    let d = &draft.details;

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.details.description = textarea.value();
            draft.set(next);
        })
    };

    let on_thumbnail = {
        let draft = draft.clone();
        Callback::from(move |url: Option<String>| {
            let mut next = (*draft).clone();
            next.details.thumbnail_url = url;
            draft.set(next);
        })
    };

    html! {
        <div class="space-y-4">
            {text_field(
                "Name",
                d.name.clone(),
                errors.name,
                edit(draft, |d, v| d.details.name = v),
            )}
            {text_field(
                "County",
                d.county.clone(),
                errors.county,
                edit(draft, |d, v| d.details.county = v),
            )}
            {number_field(
                "Population",
                display_count(d.population),
                errors.population,
                edit(draft, |d, v| d.details.population = coerce_count(&v)),
            )}
            <div>
                <label class={LABEL_CLASSES}>{"Description"}</label>
                <textarea
                    value={d.description.clone()}
                    oninput={on_description}
                    rows="4"
                    class={INPUT_CLASSES}
                />
                if let Some(error) = errors.description {
                    <p class="text-sm text-red-600 dark:text-red-400 mt-1">{error}</p>
                }
            </div>
            <div class="grid grid-cols-2 gap-4">
                {number_field(
                    "Latitude",
                    display_coordinate(d.latitude),
                    errors.latitude,
                    edit(draft, |d, v| {
                        d.details.latitude = coerce_coordinate(&v);
                    }),
                )}
                {number_field(
                    "Longitude",
                    display_coordinate(d.longitude),
                    errors.longitude,
                    edit(draft, |d, v| {
                        d.details.longitude = coerce_coordinate(&v);
                    }),
                )}
            </div>
            <div>
                <label class={LABEL_CLASSES}>{"Thumbnail"}</label>
                <ImageUpload
                    current_url={d.thumbnail_url.clone()}
                    on_change={on_thumbnail}
                />
            </div>
        </div>
    }
}

fn render_infrastructure(draft: &UseStateHandle<VillageDraft>) -> Html {
    let infra = draft.details.infrastructure.clone().unwrap_or_default();
    html! {
        <div class="space-y-4">
            {checkbox_field(
                "Grocery store in the village",
                infra.has_grocery_store,
                edit_flag(draft, |d, v| {
                    d.infrastructure_mut().has_grocery_store = v;
                }),
            )}
            {checkbox_field(
                "Pharmacy",
                infra.has_pharmacy,
                edit_flag(draft, |d, v| {
                    d.infrastructure_mut().has_pharmacy = v;
                }),
            )}
            {checkbox_field(
                "School",
                infra.has_school,
                edit_flag(draft, |d, v| d.infrastructure_mut().has_school = v),
            )}
            {checkbox_field(
                "Kindergarten",
                infra.has_kindergarten,
                edit_flag(draft, |d, v| {
                    d.infrastructure_mut().has_kindergarten = v;
                }),
            )}
            {number_field(
                "Restaurants",
                display_count(infra.restaurants_count),
                None,
                edit(draft, |d, v| {
                    d.infrastructure_mut().restaurants_count =
                        coerce_count(&v);
                }),
            )}
            {number_field(
                "Nearest grocery store (km)",
                display_distance(infra.grocery_store_distance_km),
                None,
                edit(draft, |d, v| {
                    d.infrastructure_mut().grocery_store_distance_km =
                        coerce_distance(&v);
                }),
            )}
            {number_field(
                "Nearest hospital (km)",
                display_distance(infra.hospital_distance_km),
                None,
                edit(draft, |d, v| {
                    d.infrastructure_mut().hospital_distance_km =
                        coerce_distance(&v);
                }),
            )}
        </div>
    }
}

fn render_internet(draft: &UseStateHandle<VillageDraft>) -> Html {
    let internet = draft.details.internet.clone().unwrap_or_default();
    html! {
        <div class="space-y-4">
            {number_field(
                "Average speed (Mbps)",
                display_count(internet.average_speed_mbps),
                None,
                edit(draft, |d, v| {
                    d.internet_mut().average_speed_mbps = coerce_count(&v);
                }),
            )}
            <div>
                <p class={LABEL_CLASSES}>{"Available connection types"}</p>
                <div class="space-y-2">
                    { for InternetType::ALL.iter().map(|t| {
                        let kind = *t;
                        checkbox_field(
                            kind.label(),
                            internet.types.contains(&kind),
                            edit_flag(draft, move |d, checked| {
                                let types = &mut d.internet_mut().types;
                                if checked {
                                    if !types.contains(&kind) {
                                        types.push(kind);
                                    }
                                } else {
                                    types.retain(|existing| *existing != kind);
                                }
                            }),
                        )
                    }) }
                </div>
            </div>
        </div>
    }
}

fn render_transport(draft: &UseStateHandle<VillageDraft>) -> Html {
    let transport = draft.details.transport.clone().unwrap_or_default();
    html! {
        <div class="space-y-4">
            {checkbox_field(
                "Bus stop in the village",
                transport.has_bus_stop,
                edit_flag(draft, |d, v| d.transport_mut().has_bus_stop = v),
            )}
            {number_field(
                "Bus lines",
                display_count(transport.bus_lines_count),
                None,
                edit(draft, |d, v| {
                    d.transport_mut().bus_lines_count = coerce_count(&v);
                }),
            )}
            {number_field(
                "Nearest train station (km)",
                display_distance(transport.train_station_distance_km),
                None,
                edit(draft, |d, v| {
                    d.transport_mut().train_station_distance_km =
                        coerce_distance(&v);
                }),
            )}
            {number_field(
                "Nearest airport (km)",
                display_distance(transport.airport_distance_km),
                None,
                edit(draft, |d, v| {
                    d.transport_mut().airport_distance_km =
                        coerce_distance(&v);
                }),
            )}
        </div>
    }
}

fn render_community(draft: &UseStateHandle<VillageDraft>) -> Html {
    let community = draft.details.community.clone().unwrap_or_default();
    html! {
        <div class="space-y-4">
            {checkbox_field(
                "Community center",
                community.has_community_center,
                edit_flag(draft, |d, v| {
                    d.community_mut().has_community_center = v;
                }),
            )}
            {checkbox_field(
                "Village society",
                community.has_village_society,
                edit_flag(draft, |d, v| {
                    d.community_mut().has_village_society = v;
                }),
            )}
            {number_field(
                "Annual events",
                display_count(community.annual_events_count),
                None,
                edit(draft, |d, v| {
                    d.community_mut().annual_events_count = coerce_count(&v);
                }),
            )}
        </div>
    }
}

fn render_leisure(draft: &UseStateHandle<VillageDraft>) -> Html {
    let leisure = draft.details.leisure.clone().unwrap_or_default();
    html! {
        <div class="space-y-4">
            {checkbox_field(
                "Playground",
                leisure.has_playground,
                edit_flag(draft, |d, v| d.leisure_mut().has_playground = v),
            )}
            {checkbox_field(
                "Sports field",
                leisure.has_sports_field,
                edit_flag(draft, |d, v| d.leisure_mut().has_sports_field = v),
            )}
            {checkbox_field(
                "Hiking trails",
                leisure.has_hiking_trails,
                edit_flag(draft, |d, v| {
                    d.leisure_mut().has_hiking_trails = v;
                }),
            )}
            {number_field(
                "Nearest beach (km)",
                display_distance(leisure.beach_distance_km),
                None,
                edit(draft, |d, v| {
                    d.leisure_mut().beach_distance_km = coerce_distance(&v);
                }),
            )}
            {number_field(
                "Nearest forest (km)",
                display_distance(leisure.forest_distance_km),
                None,
                edit(draft, |d, v| {
                    d.leisure_mut().forest_distance_km = coerce_distance(&v);
                }),
            )}
        </div>
    }
}

fn render_links(draft: &UseStateHandle<VillageDraft>) -> Html {
    let on_add = {
        let draft = draft.clone();
        Callback::from(move |_| {
            let mut next = (*draft).clone();
            next.add_link();
            draft.set(next);
        })
    };

    html! {
        <div class="space-y-4">
            { for draft.details.links.iter().enumerate().map(|(index, link)| {
                let on_title = edit(draft, move |d, v| {
                    d.update_link_title(index, v);
                });
                let on_url = edit(draft, move |d, v| {
                    d.update_link_url(index, v);
                });
                let on_remove = {
                    let draft = draft.clone();
                    Callback::from(move |_| {
                        let mut next = (*draft).clone();
                        next.remove_link(index);
                        draft.set(next);
                    })
                };
                html! {
                    <div key={index} class="flex items-end gap-3">
                        <div class="flex-1">
                            {text_field(
                                "Title",
                                link.title.clone(),
                                None,
                                on_title,
                            )}
                        </div>
                        <div class="flex-1">
                            {text_field("URL", link.url.clone(), None, on_url)}
                        </div>
                        <button
                            onclick={on_remove}
                            class="px-3 py-2 text-sm text-red-600 hover:text-red-800
                                   dark:text-red-400 dark:hover:text-red-300"
                        >
                            {"Remove"}
                        </button>
                    </div>
                }
            }) }
            <button
                onclick={on_add}
                class="px-3 py-1.5 text-sm font-medium rounded-md border
                       border-neutral-300 dark:border-neutral-600
                       text-neutral-700 dark:text-neutral-300
                       hover:bg-neutral-50 dark:hover:bg-neutral-700"
            >
                {"Add link"}
            </button>
        </div>
    }
}
