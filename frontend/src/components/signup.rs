use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::models::SignupRequest;

use crate::api::use_api;
use crate::components::widgets::{ErrorAlert, SuccessAlert};
use crate::web::router::use_router;

const QUESTION_OPTIONS: [&str; 6] = [
    "What was the name of your first pet?",
    "What is your mother's maiden name?",
    "What was the name of your primary school?",
    "In what city were you born?",
    "What is the title of your favourite book?",
    "What was the make of your first car?",
];

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (fullname, set_fullname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (question_1, set_question_1) = signal(QUESTION_OPTIONS[0].to_string());
    let (answer_1, set_answer_1) = signal(String::new());
    let (question_2, set_question_2) = signal(QUESTION_OPTIONS[1].to_string());
    let (answer_2, set_answer_2) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if password.get() != confirm.get() {
            set_error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }
        if question_1.get() == question_2.get() {
            set_error_msg.set(Some("Please choose two different security questions".to_string()));
            return;
        }
        if answer_1.get().trim().is_empty() || answer_2.get().trim().is_empty() {
            set_error_msg.set(Some("Please answer both security questions".to_string()));
            return;
        }

        set_is_submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let request = SignupRequest {
                fullname: fullname.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                security_question_1: question_1.get_untracked(),
                security_answer_1: answer_1.get_untracked(),
                security_question_2: question_2.get_untracked(),
                security_answer_2: answer_2.get_untracked(),
            };
            match api.signup(&request).await {
                Ok(ack) => {
                    set_success_msg.set(Some(ack.message));
                }
                Err(err) => {
                    set_error_msg.set(Some(err.message().to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-lg">
                <h1 class="text-3xl font-bold">"Create your account"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        <SuccessAlert message=success_msg />

                        <Show when=move || success_msg.get().is_some()>
                            <button
                                type="button"
                                class="btn btn-primary"
                                on:click=move |_| router.navigate("/login")
                            >
                                "Continue to login"
                            </button>
                        </Show>

                        <Show when=move || success_msg.get().is_none()>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Full name"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    on:input=move |ev| set_fullname.set(event_target_value(&ev))
                                    prop:value=fullname
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Email address"</span></label>
                                <input
                                    type="email"
                                    class="input input-bordered"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    required
                                />
                            </div>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Password"</span></label>
                                    <input
                                        type="password"
                                        class="input input-bordered"
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        prop:value=password
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Confirm password"</span></label>
                                    <input
                                        type="password"
                                        class="input input-bordered"
                                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                        prop:value=confirm
                                        required
                                    />
                                </div>
                            </div>

                            <div class="divider text-sm">"Security questions (for password recovery)"</div>

                            <div class="form-control">
                                <select
                                    class="select select-bordered"
                                    on:change=move |ev| set_question_1.set(event_target_value(&ev))
                                    prop:value=question_1
                                >
                                    {QUESTION_OPTIONS
                                        .into_iter()
                                        .map(|q| view! { <option value=q>{q}</option> })
                                        .collect_view()}
                                </select>
                                <input
                                    type="text"
                                    class="input input-bordered mt-2"
                                    placeholder="Your answer"
                                    on:input=move |ev| set_answer_1.set(event_target_value(&ev))
                                    prop:value=answer_1
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <select
                                    class="select select-bordered"
                                    on:change=move |ev| set_question_2.set(event_target_value(&ev))
                                    prop:value=question_2
                                >
                                    {QUESTION_OPTIONS
                                        .into_iter()
                                        .map(|q| view! { <option value=q>{q}</option> })
                                        .collect_view()}
                                </select>
                                <input
                                    type="text"
                                    class="input input-bordered mt-2"
                                    placeholder="Your answer"
                                    on:input=move |ev| set_answer_2.set(event_target_value(&ev))
                                    prop:value=answer_2
                                    required
                                />
                            </div>

                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || {
                                        if is_submitting.get() {
                                            view! {
                                                <span class="loading loading-spinner"></span>
                                                "Creating account..."
                                            }
                                                .into_any()
                                        } else {
                                            "Sign up".into_any()
                                        }
                                    }}
                                </button>
                            </div>

                            <p class="text-center mt-3 text-sm">
                                "Already registered? "
                                <a class="link link-primary" on:click=move |_| router.navigate("/login")>
                                    "Log in"
                                </a>
                            </p>
                        </Show>
                    </form>
                </div>
            </div>
        </div>
    }
}
