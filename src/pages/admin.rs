//! Admin page with the product image upload form.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form, one request at a time. A submit validates the two required
//! fields locally, posts the multipart payload, and reports the outcome
//! through the toast next to the identifier field. The file handle itself
//! never enters reactive state; it is read from the input element when the
//! request is built.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::toast::Toast;
use crate::state::toast::ToastState;
use crate::state::upload::{self, UploadFieldErrors, UploadFormState};

#[cfg(any(test, feature = "hydrate"))]
fn upload_success_message() -> &'static str {
    "Uploaded file"
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_failure_message(detail: &str) -> String {
    format!("Unable to upload file. {detail}")
}

/// Name of the file currently selected in the input, if any.
#[cfg(feature = "hydrate")]
fn selected_file_name(ev: &leptos::ev::Event) -> Option<String> {
    let input: web_sys::HtmlInputElement = event_target(ev);
    let files = input.files()?;
    Some(files.get(0)?.name())
}

#[cfg(not(feature = "hydrate"))]
fn selected_file_name(_ev: &leptos::ev::Event) -> Option<String> {
    None
}

/// Admin page — upload an image for a product by its identifier.
#[component]
pub fn AdminPage() -> impl IntoView {
    let form = RwSignal::new(UploadFormState::default());
    let toast = RwSignal::new(ToastState::default());
    let field_errors = RwSignal::new(UploadFieldErrors::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_id_change = move |ev: leptos::ev::Event| {
        if !form.with(|state| state.can_submit()) {
            return;
        }
        field_errors.update(|errors| errors.product_id = None);
        toast.update(|state| state.dismiss());
        form.update(|state| state.product_id = event_target_value(&ev));
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        if !form.with(|state| state.can_submit()) {
            return;
        }
        field_errors.update(|errors| errors.file = None);
        toast.update(|state| state.dismiss());
        form.update(|state| state.file_name = selected_file_name(&ev));
    };

    #[cfg(feature = "hydrate")]
    let submit_alive = alive.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with(|state| state.can_submit()) {
            return;
        }
        let (raw_id, has_file) =
            form.with(|state| (state.product_id.clone(), state.file_name.is_some()));
        match upload::validate_upload_input(&raw_id, has_file) {
            Err(errors) => field_errors.set(errors),
            Ok(product_id) => {
                field_errors.set(UploadFieldErrors::default());
                toast.update(|state| state.dismiss());
                form.update(|state| {
                    state.product_id = product_id.clone();
                    state.begin_submit();
                });
                #[cfg(feature = "hydrate")]
                {
                    let Some(file) = file_input
                        .get()
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0))
                    else {
                        form.update(|state| state.finish_submit());
                        return;
                    };
                    let alive = submit_alive.clone();
                    leptos::task::spawn_local(async move {
                        let result =
                            crate::net::api::upload_product_image(&product_id, &file).await;
                        // The page may have been torn down while the request ran.
                        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                            return;
                        }
                        form.update(|state| state.finish_submit());
                        match result {
                            Ok(()) => toast.update(|state| state.post(upload_success_message())),
                            Err(detail) => {
                                toast.update(|state| state.post(upload_failure_message(&detail)));
                            }
                        }
                    });
                }
            }
        }
    };

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Admin"</h1>
            <form class="upload-form" on:submit=on_submit>
                <div class="upload-form__group">
                    <label class="upload-form__label">"Product ID:"</label>
                    <div class="upload-form__field">
                        <input
                            class="upload-form__input"
                            type="text"
                            prop:value=move || form.get().product_id
                            on:input=on_id_change
                        />
                        <p class="upload-form__hint">
                            "Enter the product id to upload an image for"
                        </p>
                        <Show when=move || field_errors.get().product_id.is_some()>
                            <p class="upload-form__feedback">
                                {move || field_errors.get().product_id.unwrap_or_default()}
                            </p>
                        </Show>
                    </div>
                    <Toast state=toast/>
                </div>
                <div class="upload-form__group">
                    <label class="upload-form__label">"File:"</label>
                    <div class="upload-form__field">
                        <input
                            class="upload-form__input"
                            type="file"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                        <p class="upload-form__hint">"Image to associate with the product"</p>
                        <Show when=move || field_errors.get().file.is_some()>
                            <p class="upload-form__feedback">
                                {move || field_errors.get().file.unwrap_or_default()}
                            </p>
                        </Show>
                    </div>
                </div>
                <button
                    class="upload-form__submit"
                    type="submit"
                    disabled=move || !form.get().can_submit()
                >
                    "Submit form"
                </button>
            </form>
        </div>
    }
}
