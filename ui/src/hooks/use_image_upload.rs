use payloads::validate_image;
use yew::prelude::*;

use crate::get_storage_client;

/// A file read out of an `<input type="file">`, ready to validate and
/// upload.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq)]
pub enum UploadOutcome {
    /// Upload succeeded; the public URL of the new object.
    Uploaded(String),
    /// Validation or upload failed; details are in the hook's `error`.
    Failed,
    /// Delete finished. `false` covers every failure, including URLs that
    /// do not belong to the configured bucket.
    Deleted(bool),
}

/// State and operations for a single-image upload slot.
///
/// Callers own replacement semantics: delete the previous image before or
/// after uploading its successor, the adapter tracks nothing.
pub struct ImageUploadHandle {
    pub is_uploading: bool,
    pub is_deleting: bool,
    /// Coarse milestone percentage, not byte-accurate.
    pub progress: u8,
    /// Last failure; cleared when the next operation starts.
    pub error: Option<String>,
    pub upload: Callback<ImageFile>,
    pub delete: Callback<String>,
}

#[hook]
pub fn use_image_upload(
    on_outcome: Callback<UploadOutcome>,
) -> ImageUploadHandle {
    let is_uploading = use_state(|| false);
    let is_deleting = use_state(|| false);
    let progress = use_state(|| 0u8);
    let error = use_state(|| None::<String>);

    let upload = {
        let is_uploading = is_uploading.clone();
        let progress = progress.clone();
        let error = error.clone();
        let on_outcome = on_outcome.clone();

        Callback::from(move |file: ImageFile| {
            let is_uploading = is_uploading.clone();
            let progress = progress.clone();
            let error = error.clone();
            let on_outcome = on_outcome.clone();

            error.set(None);
            progress.set(0);

            // Reject before any network traffic.
            let validation = validate_image(&file.mime_type, file.data.len());
            if let Some(message) = validation.error_message() {
                error.set(Some(message));
                on_outcome.emit(UploadOutcome::Failed);
                return;
            }
            progress.set(25);

            yew::platform::spawn_local(async move {
                is_uploading.set(true);

                let storage = get_storage_client();
                let path = storage.object_name(&file.name);
                progress.set(60);

                match storage.upload(&path, &file.mime_type, file.data).await
                {
                    Ok(url) => {
                        progress.set(100);
                        on_outcome.emit(UploadOutcome::Uploaded(url));
                    }
                    Err(e) => {
                        progress.set(0);
                        error.set(Some(e.to_string()));
                        on_outcome.emit(UploadOutcome::Failed);
                    }
                }

                is_uploading.set(false);
            });
        })
    };

    let delete = {
        let is_deleting = is_deleting.clone();
        let error = error.clone();

        Callback::from(move |url: String| {
            let is_deleting = is_deleting.clone();
            let error = error.clone();
            let on_outcome = on_outcome.clone();

            error.set(None);

            yew::platform::spawn_local(async move {
                is_deleting.set(true);

                let storage = get_storage_client();
                let ok = storage.delete(&url).await;
                if !ok {
                    tracing::debug!("failed to delete object at {url}");
                }
                on_outcome.emit(UploadOutcome::Deleted(ok));

                is_deleting.set(false);
            });
        })
    };

    ImageUploadHandle {
        is_uploading: *is_uploading,
        is_deleting: *is_deleting,
        progress: *progress,
        error: (*error).clone(),
        upload,
        delete,
    }
}
