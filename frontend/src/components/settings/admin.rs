use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::models::{
    AdminUser, AdminUsersRequest, CreateAdminUserRequest, UpdateAdminUserRequest,
};

use crate::api::{CancelToken, use_api};
use crate::components::widgets::{ErrorAlert, SuccessAlert};

#[component]
pub fn UserManagement() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let (users, set_users) = signal(Vec::<AdminUser>::new());
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    // Create-user form.
    let (show_create, set_show_create) = signal(false);
    let (new_username, set_new_username) = signal(String::new());
    let (new_email, set_new_email) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (new_is_staff, set_new_is_staff) = signal(false);
    let (creating, set_creating) = signal(false);

    let load_users = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_loading.set(true);
            spawn_local(async move {
                let trimmed = search.get_untracked().trim().to_string();
                let request = AdminUsersRequest {
                    page: page.get_untracked(),
                    page_size: 10,
                    search: (!trimmed.is_empty()).then_some(trimmed),
                };
                match api.admin_users(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_users.set(data.users);
                        set_total_pages.set(data.total_pages.max(1));
                        set_error_msg.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_users.set(Vec::new());
                        set_error_msg.set(Some(err.message().to_string()));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    load_users();

    let on_search = {
        let load_users = load_users.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_page.set(1);
            load_users();
        }
    };

    let on_prev = {
        let load_users = load_users.clone();
        move |_| {
            if page.get_untracked() > 1 {
                set_page.update(|p| *p -= 1);
                load_users();
            }
        }
    };

    let on_next = {
        let load_users = load_users.clone();
        move |_| {
            if page.get_untracked() < total_pages.get_untracked() {
                set_page.update(|p| *p += 1);
                load_users();
            }
        }
    };

    let toggle_active = {
        let api = api.clone();
        let load_users = load_users.clone();
        move |user: &AdminUser| {
            let api = api.clone();
            let load_users = load_users.clone();
            let request = UpdateAdminUserRequest {
                user_id: user.id,
                is_active: Some(!user.is_active),
                ..UpdateAdminUserRequest::default()
            };
            spawn_local(async move {
                match api.update_admin_user(&request).await {
                    Ok(ack) => {
                        set_notice.set(Some(ack.message));
                        load_users();
                    }
                    Err(err) => set_error_msg.set(Some(err.message().to_string())),
                }
            });
        }
    };

    let on_create = {
        let api = api.clone();
        let load_users = load_users.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);
            set_creating.set(true);

            let api = api.clone();
            let load_users = load_users.clone();
            spawn_local(async move {
                let request = CreateAdminUserRequest {
                    username: new_username.get_untracked(),
                    email: new_email.get_untracked(),
                    password: new_password.get_untracked(),
                    first_name: String::new(),
                    last_name: String::new(),
                    is_active: true,
                    is_staff: new_is_staff.get_untracked(),
                    is_superuser: false,
                };
                match api.create_admin_user(&request).await {
                    Ok(ack) => {
                        set_notice.set(Some(ack.message));
                        set_show_create.set(false);
                        set_new_username.set(String::new());
                        set_new_email.set(String::new());
                        set_new_password.set(String::new());
                        set_new_is_staff.set(false);
                        load_users();
                    }
                    Err(err) => set_error_msg.set(Some(err.message().to_string())),
                }
                set_creating.set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between gap-3 flex-wrap">
                    <h3 class="card-title">"User management"</h3>
                    <div class="flex items-center gap-2">
                        <form class="join" on:submit=on_search>
                            <input
                                type="text"
                                class="input input-bordered input-sm join-item"
                                placeholder="Search users..."
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                                prop:value=search
                            />
                            <button class="btn btn-sm join-item">"Search"</button>
                        </form>
                        <button
                            class="btn btn-primary btn-sm"
                            on:click=move |_| set_show_create.update(|v| *v = !*v)
                        >
                            {move || if show_create.get() { "Cancel" } else { "New user" }}
                        </button>
                    </div>
                </div>

                <ErrorAlert message=error_msg />
                <SuccessAlert message=notice />

                <Show when=move || show_create.get()>
                    <form
                        class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end bg-base-200 rounded-box p-4"
                        on:submit=on_create.clone()
                    >
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Username"</span></label>
                            <input
                                type="text"
                                class="input input-bordered input-sm"
                                on:input=move |ev| set_new_username.set(event_target_value(&ev))
                                prop:value=new_username
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Email"</span></label>
                            <input
                                type="email"
                                class="input input-bordered input-sm"
                                on:input=move |ev| set_new_email.set(event_target_value(&ev))
                                prop:value=new_email
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Password"</span></label>
                            <input
                                type="password"
                                class="input input-bordered input-sm"
                                on:input=move |ev| set_new_password.set(event_target_value(&ev))
                                prop:value=new_password
                                required
                            />
                        </div>
                        <div class="flex items-center gap-3">
                            <label class="label cursor-pointer gap-2">
                                <span class="label-text">"Staff"</span>
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-sm"
                                    prop:checked=new_is_staff
                                    on:change=move |ev| {
                                        set_new_is_staff.set(event_target_checked(&ev))
                                    }
                                />
                            </label>
                            <button class="btn btn-primary btn-sm" disabled=move || creating.get()>
                                "Create"
                            </button>
                        </div>
                    </form>
                </Show>

                <div class="overflow-x-auto">
                    <table class="table table-zebra table-sm w-full">
                        <thead>
                            <tr>
                                <th>"User"</th>
                                <th>"Email"</th>
                                <th>"Joined"</th>
                                <th>"Flags"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || users.with(Vec::is_empty) && !loading.get()>
                                <tr>
                                    <td colspan="5" class="text-center py-6 text-base-content/50">
                                        "No users match this search."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || users.get()
                                key=|user| user.id
                                children={
                                    let toggle_active = toggle_active.clone();
                                    move |user: AdminUser| {
                                        let toggle_active = toggle_active.clone();
                                        let toggle_target = user.clone();
                                        view! {
                                            <tr class=if user.is_active { "" } else { "opacity-50" }>
                                                <td class="font-semibold">{user.username.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td class="font-mono text-xs">
                                                    {user.date_joined.clone()}
                                                </td>
                                                <td class="space-x-1">
                                                    <Show when={
                                                        let is_staff = user.is_staff;
                                                        move || is_staff
                                                    }>
                                                        <span class="badge badge-info badge-sm">"staff"</span>
                                                    </Show>
                                                    <Show when={
                                                        let is_superuser = user.is_superuser;
                                                        move || is_superuser
                                                    }>
                                                        <span class="badge badge-warning badge-sm">
                                                            "admin"
                                                        </span>
                                                    </Show>
                                                </td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-xs btn-outline"
                                                        on:click=move |_| toggle_active(&toggle_target)
                                                    >
                                                        {if user.is_active {
                                                            "Deactivate"
                                                        } else {
                                                            "Activate"
                                                        }}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <div class="join justify-center">
                    <button class="join-item btn btn-sm" on:click=on_prev>
                        "«"
                    </button>
                    <button class="join-item btn btn-sm btn-disabled">
                        {move || format!("Page {} of {}", page.get(), total_pages.get())}
                    </button>
                    <button class="join-item btn btn-sm" on:click=on_next>
                        "»"
                    </button>
                </div>
            </div>
        </div>
    }
}
