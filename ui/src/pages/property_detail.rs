use payloads::{
    MediaKind, PropertyId, PropertyStatus,
    requests::{self, validate_status_change},
};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::StatusBadge;
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{PROPERTY_NOT_FOUND, use_property};
use crate::state::{AdminMutation, State};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: PropertyId,
}

#[function_component]
pub fn PropertyDetailPage(props: &Props) -> Html {
    let property = use_property(props.id);

    if property.error.as_deref() == Some(PROPERTY_NOT_FOUND) {
        return html! {
            <div class="text-center py-16">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Listing not found"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mt-2">
                    {"This listing may have been removed."}
                </p>
                <Link<Route>
                    to={Route::Properties}
                    classes="inline-block mt-4 text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
                >
                    {"← Back to listings"}
                </Link<Route>>
            </div>
        };
    }

    property.render("listing", |property, _, _| {
        let rejection_reason = (property.status == PropertyStatus::Rejected)
            .then(|| property.rejection_reason.clone())
            .flatten();
        html! {
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <Link<Route>
                            to={Route::Properties}
                            classes="text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
                        >
                            {"← Listings"}
                        </Link<Route>>
                        <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mt-1">
                            {&property.basic.address}
                        </h1>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {format!("{}, {}", property.basic.city, property.basic.county)}
                        </p>
                    </div>
                    <StatusBadge status={property.status} />
                </div>

                if let Some(reason) = &rejection_reason {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm font-medium text-red-800 dark:text-red-300">
                            {"Rejection reason"}
                        </p>
                        <p class="text-sm text-red-700 dark:text-red-400 mt-1">{reason}</p>
                    </div>
                }

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 space-y-6">
                        <PropertyMedia property={property.clone()} />
                        <PropertyFacts property={property.clone()} />
                    </div>
                    <div class="space-y-6">
                        <SellerCard property={property.clone()} />
                        <ReviewActions property={property.clone()} />
                    </div>
                </div>
            </div>
        }
    })
}

#[derive(Properties, PartialEq)]
struct PropertyProps {
    property: payloads::responses::Property,
}

#[function_component]
fn PropertyMedia(props: &PropertyProps) -> Html {
    let photos: Vec<_> = props
        .property
        .media
        .iter()
        .filter(|m| m.kind == MediaKind::Photo)
        .collect();

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-4">
            <h2 class="text-sm font-semibold text-neutral-900 dark:text-neutral-100 mb-3">
                {"Photos"}
            </h2>
            if photos.is_empty() {
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {"No photos attached"}
                </p>
            } else {
                <div class="grid grid-cols-2 sm:grid-cols-3 gap-2">
                    { for photos.iter().map(|m| html! {
                        <img
                            key={m.url.clone()}
                            src={m.url.clone()}
                            class="w-full h-32 object-cover rounded-md"
                            alt="Listing photo"
                        />
                    }) }
                </div>
            }
        </div>
    }
}

#[function_component]
fn PropertyFacts(props: &PropertyProps) -> Html {
    let p = &props.property;
    let facts = [
        ("Type", p.basic.property_type.label().to_string()),
        ("Price", format!("€{}", p.basic.price)),
        ("Rooms", p.basic.rooms.to_string()),
        ("Bedrooms", p.basic.bedrooms.to_string()),
        ("Area", format!("{} m²", p.basic.area_m2)),
        (
            "Coordinates",
            format!("{:.5}, {:.5}", p.location.latitude, p.location.longitude),
        ),
        ("Created", p.created_at.to_string()),
        ("Updated", p.updated_at.to_string()),
    ];

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-4">
            <h2 class="text-sm font-semibold text-neutral-900 dark:text-neutral-100 mb-3">
                {"Details"}
            </h2>
            <dl class="grid grid-cols-2 gap-x-4 gap-y-3">
                { for facts.iter().map(|(label, value)| html! {
                    <div key={*label}>
                        <dt class="text-xs text-neutral-500 dark:text-neutral-400">{label}</dt>
                        <dd class="text-sm text-neutral-900 dark:text-neutral-100">{value}</dd>
                    </div>
                }) }
            </dl>
        </div>
    }
}

#[function_component]
fn SellerCard(props: &PropertyProps) -> Html {
    let seller = &props.property.seller;
    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-4">
            <h2 class="text-sm font-semibold text-neutral-900 dark:text-neutral-100 mb-3">
                {"Seller"}
            </h2>
            <p class="text-sm text-neutral-900 dark:text-neutral-100">{&seller.name}</p>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{&seller.email}</p>
        </div>
    }
}

/// Status transition panel. Publish and mark-sold submit directly; reject
/// opens an inline reason field and validates it before the request.
#[function_component]
fn ReviewActions(props: &PropertyProps) -> Html {
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();

    let property_id = props.property.id;
    let status = props.property.status;

    let rejecting = use_state(|| false);
    let reason_ref = use_node_ref();
    let reason_error = use_state(|| None::<&'static str>);
    let is_submitting = use_state(|| false);

    let submit = {
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let is_submitting = is_submitting.clone();
        let rejecting = rejecting.clone();

        Callback::from(
            move |(new_status, reason): (PropertyStatus, Option<String>)| {
                let dispatch = dispatch.clone();
                let toast = toast.clone();
                let is_submitting = is_submitting.clone();
                let rejecting = rejecting.clone();

                yew::platform::spawn_local(async move {
                    is_submitting.set(true);
                    let api_client = get_api_client();
                    let request = requests::UpdatePropertyStatus {
                        status: new_status,
                        rejection_reason: reason,
                    };
                    match api_client
                        .update_property_status(&property_id, &request)
                        .await
                    {
                        Ok(updated) => {
                            dispatch.reduce_mut(|s| {
                                s.record_mutation(
                                    AdminMutation::UpdatePropertyStatus,
                                );
                                s.set_property(updated);
                            });
                            rejecting.set(false);
                            toast.success(format!(
                                "Listing is now {}",
                                new_status.label().to_lowercase()
                            ));
                        }
                        Err(e) => toast.error(e.to_string()),
                    }
                    is_submitting.set(false);
                });
            },
        )
    };

    let on_publish = {
        let submit = submit.clone();
        Callback::from(move |_| {
            submit.emit((PropertyStatus::Published, None));
        })
    };

    let on_mark_sold = {
        let submit = submit.clone();
        Callback::from(move |_| {
            submit.emit((PropertyStatus::Sold, None));
        })
    };

    let on_start_reject = {
        let rejecting = rejecting.clone();
        Callback::from(move |_| rejecting.set(true))
    };

    let on_cancel_reject = {
        let rejecting = rejecting.clone();
        let reason_error = reason_error.clone();
        Callback::from(move |_| {
            rejecting.set(false);
            reason_error.set(None);
        })
    };

    let on_submit_reject = {
        let submit = submit.clone();
        let reason_ref = reason_ref.clone();
        let reason_error = reason_error.clone();
        Callback::from(move |_| {
            let reason = reason_ref
                .cast::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .unwrap_or_default();
            let validation = validate_status_change(
                PropertyStatus::Rejected,
                Some(&reason),
            );
            if let Some(message) = validation.error_message() {
                reason_error.set(Some(message));
                return;
            }
            reason_error.set(None);
            submit.emit((
                PropertyStatus::Rejected,
                Some(reason.trim().to_string()),
            ));
        })
    };

    let primary_button = "w-full px-4 py-2 text-sm font-medium rounded-md text-white
                          bg-neutral-900 hover:bg-neutral-800
                          dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                          disabled:opacity-50 disabled:cursor-not-allowed";
    let danger_button = "w-full px-4 py-2 text-sm font-medium rounded-md text-white
                         bg-red-600 hover:bg-red-700
                         disabled:opacity-50 disabled:cursor-not-allowed";
    let secondary_button = "w-full px-4 py-2 text-sm font-medium rounded-md border
                            border-neutral-300 dark:border-neutral-600
                            text-neutral-700 dark:text-neutral-300
                            hover:bg-neutral-50 dark:hover:bg-neutral-700
                            disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-4 space-y-3">
            <h2 class="text-sm font-semibold text-neutral-900 dark:text-neutral-100">
                {"Review"}
            </h2>

            if *rejecting {
                <div class="space-y-2">
                    <label class="block text-sm text-neutral-700 dark:text-neutral-300">
                        {"Reason shown to the seller"}
                    </label>
                    <textarea
                        ref={reason_ref}
                        rows="4"
                        class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                               rounded-md bg-white dark:bg-neutral-700 text-sm
                               text-neutral-900 dark:text-neutral-100
                               focus:outline-none focus:ring-2 focus:ring-neutral-500"
                    />
                    if let Some(error) = *reason_error {
                        <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                    <button
                        onclick={on_submit_reject}
                        disabled={*is_submitting}
                        class={danger_button}
                    >
                        {"Confirm rejection"}
                    </button>
                    <button
                        onclick={on_cancel_reject}
                        disabled={*is_submitting}
                        class={secondary_button}
                    >
                        {"Cancel"}
                    </button>
                </div>
            } else {
                { match status {
                    PropertyStatus::InReview => html! {
                        <>
                            <button
                                onclick={on_publish}
                                disabled={*is_submitting}
                                class={primary_button}
                            >
                                {"Publish"}
                            </button>
                            <button
                                onclick={on_start_reject}
                                disabled={*is_submitting}
                                class={danger_button}
                            >
                                {"Reject"}
                            </button>
                        </>
                    },
                    PropertyStatus::Published => html! {
                        <>
                            <button
                                onclick={on_mark_sold}
                                disabled={*is_submitting}
                                class={primary_button}
                            >
                                {"Mark as sold"}
                            </button>
                            <button
                                onclick={on_start_reject}
                                disabled={*is_submitting}
                                class={danger_button}
                            >
                                {"Take down"}
                            </button>
                        </>
                    },
                    PropertyStatus::Rejected => html! {
                        <button
                            onclick={on_publish}
                            disabled={*is_submitting}
                            class={primary_button}
                        >
                            {"Publish anyway"}
                        </button>
                    },
                    PropertyStatus::Sold => html! {
                        <p class="text-sm text-neutral-500 dark:text-neutral-400">
                            {"Sold listings are final."}
                        </p>
                    },
                } }
            }
        </div>
    }
}
