use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::layout::DashboardLayout;

mod admin;
mod preferences;
mod profile;
mod security;

use admin::UserManagement;
use preferences::InterfacePreferencesForm;
use profile::ProfileForm;
use security::SecuritySettings;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Profile,
    Security,
    Preferences,
    Admin,
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let (tab, set_tab) = signal(SettingsTab::Profile);

    // The admin tab is cosmetic gating only; the backend enforces the
    // permission on every admin endpoint.
    let is_staff = move || {
        auth_ctx
            .state
            .get()
            .user
            .map(|u| u.is_staff || u.is_superuser)
            .unwrap_or(false)
    };

    let tab_class = move |this: SettingsTab| {
        if tab.get() == this {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <DashboardLayout title="Settings">
            <div role="tablist" class="tabs tabs-boxed w-fit">
                <a
                    role="tab"
                    class=move || tab_class(SettingsTab::Profile)
                    on:click=move |_| set_tab.set(SettingsTab::Profile)
                >
                    "Profile"
                </a>
                <a
                    role="tab"
                    class=move || tab_class(SettingsTab::Security)
                    on:click=move |_| set_tab.set(SettingsTab::Security)
                >
                    "Security"
                </a>
                <a
                    role="tab"
                    class=move || tab_class(SettingsTab::Preferences)
                    on:click=move |_| set_tab.set(SettingsTab::Preferences)
                >
                    "Preferences"
                </a>
                <Show when=is_staff>
                    <a
                        role="tab"
                        class=move || tab_class(SettingsTab::Admin)
                        on:click=move |_| set_tab.set(SettingsTab::Admin)
                    >
                        "User management"
                    </a>
                </Show>
            </div>

            {move || match tab.get() {
                SettingsTab::Profile => view! { <ProfileForm /> }.into_any(),
                SettingsTab::Security => view! { <SecuritySettings /> }.into_any(),
                SettingsTab::Preferences => view! { <InterfacePreferencesForm /> }.into_any(),
                SettingsTab::Admin => view! { <UserManagement /> }.into_any(),
            }}
        </DashboardLayout>
    }
}
