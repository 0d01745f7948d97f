use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::models::UpdateProfileRequest;

use crate::api::{CancelToken, use_api};
use crate::components::widgets::{ErrorAlert, SuccessAlert};

#[component]
pub fn ProfileForm() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let (loading, set_loading) = signal(true);
    let (username, set_username) = signal(String::new());
    let (joined, set_joined) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    {
        let api = api.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match api.profile(Some(&cancel)).await {
                Ok(profile) => {
                    set_username.set(profile.username);
                    set_joined.set(profile.date_joined);
                    set_first_name.set(profile.first_name);
                    set_last_name.set(profile.last_name);
                    set_email.set(profile.email);
                    set_loading.set(false);
                }
                Err(err) if err.is_aborted() => {}
                Err(err) => {
                    set_error_msg.set(Some(err.message().to_string()));
                    set_loading.set(false);
                }
            }
        });
    }

    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);
        set_saving.set(true);

        let api = api.clone();
        spawn_local(async move {
            let request = UpdateProfileRequest {
                first_name: Some(first_name.get_untracked()),
                last_name: Some(last_name.get_untracked()),
                email: Some(email.get_untracked()),
            };
            match api.update_profile(&request).await {
                Ok(ack) => set_success_msg.set(Some(ack.message)),
                Err(err) => set_error_msg.set(Some(err.message().to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-xl">
            <form class="card-body" on:submit=on_save>
                <h3 class="card-title">"Profile"</h3>
                <ErrorAlert message=error_msg />
                <SuccessAlert message=success_msg />

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! { <span class="loading loading-spinner loading-md"></span> }
                    }
                >
                    <div class="text-sm text-base-content/60">
                        {move || format!("Signed up as {} on {}", username.get(), joined.get())}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                        <div class="form-control">
                            <label class="label"><span class="label-text">"First name"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                prop:value=first_name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Last name"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                prop:value=last_name
                            />
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Email address"</span></label>
                        <input
                            type="email"
                            class="input input-bordered"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                        />
                    </div>

                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save changes" }}
                        </button>
                    </div>
                </Show>
            </form>
        </div>
    }
}
