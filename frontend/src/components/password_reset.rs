use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::models::{ResetPasswordRequest, SendResetCodeRequest, VerifyResetCodeRequest};

use crate::api::use_api;
use crate::components::widgets::{ErrorAlert, SuccessAlert};
use crate::web::router::use_router;

/// Three-step recovery: request a code by email, verify it, set the new
/// password. Each step is its own round trip; the collected values carry
/// forward in local state.
#[component]
pub fn PasswordResetPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (step, set_step) = signal(1u8);
    let (email, set_email) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (info_msg, set_info_msg) = signal(Option::<String>::None);

    let send_code = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);
            set_is_submitting.set(true);

            let api = api.clone();
            spawn_local(async move {
                let request = SendResetCodeRequest {
                    email: email.get_untracked(),
                };
                match api.send_reset_code(&request).await {
                    Ok(resp) if resp.success => {
                        set_info_msg.set(Some(
                            resp.message
                                .unwrap_or_else(|| "Verification code sent".to_string()),
                        ));
                        set_step.set(2);
                    }
                    Ok(resp) => {
                        set_error_msg.set(resp.message.or_else(|| {
                            Some("Could not send the verification code".to_string())
                        }));
                    }
                    Err(err) => set_error_msg.set(Some(err.message().to_string())),
                }
                set_is_submitting.set(false);
            });
        }
    };

    let verify_code = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);
            set_is_submitting.set(true);

            let api = api.clone();
            spawn_local(async move {
                let request = VerifyResetCodeRequest {
                    email: email.get_untracked(),
                    code: code.get_untracked(),
                };
                match api.verify_reset_code(&request).await {
                    Ok(resp) if resp.success => {
                        set_info_msg.set(None);
                        set_step.set(3);
                    }
                    Ok(resp) => {
                        set_error_msg
                            .set(resp.message.or_else(|| Some("Invalid code".to_string())));
                    }
                    Err(err) => set_error_msg.set(Some(err.message().to_string())),
                }
                set_is_submitting.set(false);
            });
        }
    };

    let reset_password = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);

            if new_password.get() != confirm.get() {
                set_error_msg.set(Some("Passwords do not match".to_string()));
                return;
            }

            set_is_submitting.set(true);
            let api = api.clone();
            spawn_local(async move {
                let request = ResetPasswordRequest {
                    email: email.get_untracked(),
                    code: code.get_untracked(),
                    new_password: new_password.get_untracked(),
                };
                match api.reset_password(&request).await {
                    Ok(resp) if resp.success => {
                        router.navigate("/login");
                    }
                    Ok(resp) => {
                        set_error_msg.set(
                            resp.message
                                .or_else(|| Some("Password reset failed".to_string())),
                        );
                    }
                    Err(err) => set_error_msg.set(Some(err.message().to_string())),
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Recover your account"</h1>

                <ul class="steps w-full">
                    <li class=move || { if step.get() >= 1 { "step step-primary" } else { "step" } }>
                        "Email"
                    </li>
                    <li class=move || { if step.get() >= 2 { "step step-primary" } else { "step" } }>
                        "Code"
                    </li>
                    <li class=move || { if step.get() >= 3 { "step step-primary" } else { "step" } }>
                        "New password"
                    </li>
                </ul>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <ErrorAlert message=error_msg />
                        <SuccessAlert message=info_msg />

                        <Show when=move || step.get() == 1>
                            <form on:submit=send_code.clone()>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"Email address"</span>
                                    </label>
                                    <input
                                        type="email"
                                        class="input input-bordered w-full"
                                        placeholder="example@gmail.com"
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        prop:value=email
                                        required
                                    />
                                </div>
                                <button
                                    class="btn btn-primary w-full mt-4"
                                    disabled=move || is_submitting.get()
                                >
                                    "Send verification code"
                                </button>
                            </form>
                        </Show>

                        <Show when=move || step.get() == 2>
                            <form on:submit=verify_code.clone()>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"Verification code"</span>
                                    </label>
                                    <input
                                        type="text"
                                        class="input input-bordered w-full tracking-widest"
                                        placeholder="123456"
                                        on:input=move |ev| set_code.set(event_target_value(&ev))
                                        prop:value=code
                                        required
                                    />
                                </div>
                                <button
                                    class="btn btn-primary w-full mt-4"
                                    disabled=move || is_submitting.get()
                                >
                                    "Verify code"
                                </button>
                            </form>
                        </Show>

                        <Show when=move || step.get() == 3>
                            <form on:submit=reset_password.clone()>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"New password"</span>
                                    </label>
                                    <input
                                        type="password"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| {
                                            set_new_password.set(event_target_value(&ev))
                                        }
                                        prop:value=new_password
                                        required
                                    />
                                </div>
                                <div class="form-control mt-2">
                                    <label class="label">
                                        <span class="label-text">"Confirm new password"</span>
                                    </label>
                                    <input
                                        type="password"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                        prop:value=confirm
                                        required
                                    />
                                </div>
                                <button
                                    class="btn btn-primary w-full mt-4"
                                    disabled=move || is_submitting.get()
                                >
                                    "Reset password"
                                </button>
                            </form>
                        </Show>

                        <p class="text-center mt-3 text-sm">
                            <a class="link link-hover" on:click=move |_| router.navigate("/login")>
                                "Back to login"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
