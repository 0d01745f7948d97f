use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::models::{
    ChangePasswordRequest, SecurityQuestionUpdate, UpdateSecurityQuestionsRequest,
};

use crate::api::{CancelToken, use_api};
use crate::components::widgets::{ErrorAlert, SuccessAlert};

#[component]
pub fn SecuritySettings() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Password change.
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (pw_saving, set_pw_saving) = signal(false);
    let (pw_error, set_pw_error) = signal(Option::<String>::None);
    let (pw_success, set_pw_success) = signal(Option::<String>::None);

    // Security questions.
    let (question_1, set_question_1) = signal(String::new());
    let (answer_1, set_answer_1) = signal(String::new());
    let (question_2, set_question_2) = signal(String::new());
    let (answer_2, set_answer_2) = signal(String::new());
    let (sq_saving, set_sq_saving) = signal(false);
    let (sq_error, set_sq_error) = signal(Option::<String>::None);
    let (sq_success, set_sq_success) = signal(Option::<String>::None);

    // Prefill the stored questions (answers are never returned).
    {
        let api = api.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match api.security_questions(Some(&cancel)).await {
                Ok(questions) => {
                    for question in questions {
                        match question.question_number {
                            1 => set_question_1.set(question.question_text),
                            2 => set_question_2.set(question.question_text),
                            _ => {}
                        }
                    }
                }
                Err(err) if err.is_aborted() => {}
                Err(err) => set_sq_error.set(Some(err.message().to_string())),
            }
        });
    }

    let on_change_password = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_pw_error.set(None);
            set_pw_success.set(None);

            if new_password.get() != confirm.get() {
                set_pw_error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if new_password.get().len() < 8 {
                set_pw_error.set(Some("Password must be at least 8 characters long".to_string()));
                return;
            }

            set_pw_saving.set(true);
            let api = api.clone();
            spawn_local(async move {
                let request = ChangePasswordRequest {
                    current_password: current_password.get_untracked(),
                    new_password: new_password.get_untracked(),
                };
                match api.change_password(&request).await {
                    Ok(ack) => {
                        set_pw_success.set(Some(ack.message));
                        set_current_password.set(String::new());
                        set_new_password.set(String::new());
                        set_confirm.set(String::new());
                    }
                    Err(err) => set_pw_error.set(Some(err.message().to_string())),
                }
                set_pw_saving.set(false);
            });
        }
    };

    let on_save_questions = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_sq_error.set(None);
            set_sq_success.set(None);

            if question_1.get() == question_2.get() {
                set_sq_error.set(Some("Please choose two different questions".to_string()));
                return;
            }

            set_sq_saving.set(true);
            let api = api.clone();
            spawn_local(async move {
                let request = UpdateSecurityQuestionsRequest {
                    questions: vec![
                        SecurityQuestionUpdate {
                            question_number: 1,
                            question_text: question_1.get_untracked(),
                            answer: answer_1.get_untracked(),
                        },
                        SecurityQuestionUpdate {
                            question_number: 2,
                            question_text: question_2.get_untracked(),
                            answer: answer_2.get_untracked(),
                        },
                    ],
                };
                match api.update_security_questions(&request).await {
                    Ok(ack) => {
                        set_sq_success.set(Some(ack.message));
                        set_answer_1.set(String::new());
                        set_answer_2.set(String::new());
                    }
                    Err(err) => set_sq_error.set(Some(err.message().to_string())),
                }
                set_sq_saving.set(false);
            });
        }
    };

    view! {
        <div class="grid grid-cols-1 xl:grid-cols-2 gap-6 items-start">
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_change_password>
                    <h3 class="card-title">"Change password"</h3>
                    <ErrorAlert message=pw_error />
                    <SuccessAlert message=pw_success />

                    <div class="form-control">
                        <label class="label"><span class="label-text">"Current password"</span></label>
                        <input
                            type="password"
                            class="input input-bordered"
                            on:input=move |ev| set_current_password.set(event_target_value(&ev))
                            prop:value=current_password
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"New password"</span></label>
                        <input
                            type="password"
                            class="input input-bordered"
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            prop:value=new_password
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Confirm new password"</span>
                        </label>
                        <input
                            type="password"
                            class="input input-bordered"
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            prop:value=confirm
                            required
                        />
                    </div>

                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary" disabled=move || pw_saving.get()>
                            {move || if pw_saving.get() { "Saving..." } else { "Change password" }}
                        </button>
                    </div>
                </form>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_save_questions>
                    <h3 class="card-title">"Security questions"</h3>
                    <p class="text-sm text-base-content/60">
                        "Used to recover your account. Answers are stored, never shown."
                    </p>
                    <ErrorAlert message=sq_error />
                    <SuccessAlert message=sq_success />

                    <div class="form-control">
                        <label class="label"><span class="label-text">"Question 1"</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| set_question_1.set(event_target_value(&ev))
                            prop:value=question_1
                            required
                        />
                        <input
                            type="text"
                            class="input input-bordered mt-2"
                            placeholder="Answer"
                            on:input=move |ev| set_answer_1.set(event_target_value(&ev))
                            prop:value=answer_1
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Question 2"</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| set_question_2.set(event_target_value(&ev))
                            prop:value=question_2
                            required
                        />
                        <input
                            type="text"
                            class="input input-bordered mt-2"
                            placeholder="Answer"
                            on:input=move |ev| set_answer_2.set(event_target_value(&ev))
                            prop:value=answer_2
                            required
                        />
                    </div>

                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary" disabled=move || sq_saving.get()>
                            {move || if sq_saving.get() { "Saving..." } else { "Save questions" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
