use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::{ImageFile, UploadOutcome, use_image_upload};

/// Single-image slot backed by object storage.
///
/// Handles file selection, client-side validation via the upload hook,
/// replacement (the previous object is deleted after the new one lands),
/// and removal. Emits the current public URL, or `None` after removal.
#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub current_url: Option<String>,
    pub on_change: Callback<Option<String>>,
    #[prop_or_default]
    pub disabled: bool,
    /// Optional custom label for the upload area.
    #[prop_or_default]
    pub label: Option<String>,
}

#[function_component]
pub fn ImageUpload(props: &Props) -> Html {
    let file_input_ref = use_node_ref();
    // True while a removal (not a replacement cleanup) is in flight.
    let removing = use_mut_ref(|| false);
    // A replaced object to clean up once the new upload has landed.
    let stale_url = use_state(|| None::<String>);

    let on_outcome = {
        let on_change = props.on_change.clone();
        let current_url = props.current_url.clone();
        let removing = removing.clone();
        let stale_url = stale_url.clone();

        Callback::from(move |outcome: UploadOutcome| match outcome {
            UploadOutcome::Uploaded(url) => {
                if let Some(old) = &current_url {
                    stale_url.set(Some(old.clone()));
                }
                on_change.emit(Some(url));
            }
            UploadOutcome::Failed => {}
            UploadOutcome::Deleted(ok) => {
                if *removing.borrow() {
                    *removing.borrow_mut() = false;
                    // A failed cleanup leaves an orphaned object; the
                    // record's reference is dropped either way.
                    if !ok {
                        tracing::warn!("image removal left an orphan object");
                    }
                    on_change.emit(None);
                }
            }
        })
    };

    let upload_handle = use_image_upload(on_outcome);

    // Delete the replaced object once the new URL has been handed out.
    {
        let delete = upload_handle.delete.clone();
        let stale_url_handle = stale_url.clone();
        use_effect_with((*stale_url).clone(), move |stale: &Option<String>| {
            if let Some(url) = stale.clone() {
                delete.emit(url);
                stale_url_handle.set(None);
            }
        });
    }

    let on_file_select = {
        let upload = upload_handle.upload.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = match input.files() {
                Some(f) => f,
                None => return,
            };
            let file = match files.get(0) {
                Some(f) => f,
                None => return,
            };

            let name = file.name();
            let mime_type = file.type_();
            let upload = upload.clone();

            // Read file as array buffer
            let reader = FileReader::new().unwrap();
            let reader_clone = reader.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let result = reader_clone.result().unwrap();
                let array = js_sys::Uint8Array::new(&result);
                let data: Vec<u8> = array.to_vec();

                upload.emit(ImageFile {
                    name: name.clone(),
                    mime_type: mime_type.clone(),
                    data,
                });
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.read_as_array_buffer(&file).unwrap();
            onload.forget();

            input.set_value("");
        })
    };

    let on_select_file = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_remove = {
        let delete = upload_handle.delete.clone();
        let current_url = props.current_url.clone();
        let removing = removing.clone();
        Callback::from(move |_| {
            if let Some(url) = &current_url {
                *removing.borrow_mut() = true;
                delete.emit(url.clone());
            }
        })
    };

    let busy = upload_handle.is_uploading || upload_handle.is_deleting;
    let disabled = props.disabled || busy;

    html! {
        <div class="space-y-3">
            // Hidden file input
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                onchange={on_file_select}
                class="hidden"
                disabled={disabled}
            />

            // Error message
            {if let Some(error) = &upload_handle.error {
                html! {
                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border
                                border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }
            } else {
                html! {}
            }}

            {if upload_handle.is_uploading {
                html! {
                    <div class="w-full bg-neutral-200 dark:bg-neutral-700 rounded-full h-1.5">
                        <div
                            class="bg-neutral-900 dark:bg-neutral-100 h-1.5 rounded-full transition-all"
                            style={format!("width: {}%", upload_handle.progress)}
                        ></div>
                    </div>
                }
            } else {
                html! {}
            }}

            {if let Some(url) = &props.current_url {
                html! {
                    <div class="flex items-start gap-4">
                        <div class="w-32 h-20 rounded-md overflow-hidden
                                    bg-neutral-100 dark:bg-neutral-700 flex-shrink-0">
                            <img
                                src={url.clone()}
                                alt="Thumbnail"
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div class="flex gap-2">
                            <button
                                type="button"
                                onclick={on_select_file.clone()}
                                disabled={disabled}
                                class="px-3 py-1.5 text-sm font-medium text-white
                                       bg-neutral-900 hover:bg-neutral-800
                                       dark:bg-neutral-100 dark:text-neutral-900
                                       dark:hover:bg-neutral-200 rounded-md
                                       disabled:opacity-50"
                            >
                                {"Replace"}
                            </button>
                            <button
                                type="button"
                                onclick={on_remove}
                                disabled={disabled}
                                class="px-3 py-1.5 text-sm font-medium rounded-md
                                       text-red-600 dark:text-red-400
                                       hover:bg-red-50 dark:hover:bg-red-900/20
                                       disabled:opacity-50"
                            >
                                {if upload_handle.is_deleting { "Removing..." } else { "Remove" }}
                            </button>
                        </div>
                    </div>
                }
            } else {
                html! {
                    <button
                        type="button"
                        onclick={on_select_file}
                        disabled={disabled}
                        class="w-full px-4 py-4 border-2 border-dashed
                               border-neutral-300 dark:border-neutral-600
                               rounded-lg text-center hover:border-neutral-400
                               dark:hover:border-neutral-500 transition-colors
                               cursor-pointer disabled:opacity-50"
                    >
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {props.label.as_deref()
                                .unwrap_or("Click to select an image")}
                        </p>
                        <p class="text-xs text-neutral-500 mt-1">
                            {format!(
                                "JPEG, PNG, or WebP, up to {}MB",
                                payloads::MAX_IMAGE_SIZE_MB
                            )}
                        </p>
                    </button>
                }
            }}
        </div>
    }
}
