use crate::{router, state::session::SessionContext};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveIcon {
    Bills,
    NewBill,
    None,
}

fn icon_class(active: ActiveIcon, icon: ActiveIcon) -> &'static str {
    if active == icon {
        "layout-icon active-icon"
    } else {
        "layout-icon"
    }
}

/// Clears the session and goes back to the login page.
pub fn logout(session: &SessionContext, on_navigate: Callback<String>) {
    if let Err(err) = session.clear() {
        log::error!("failed to clear session: {}", err);
    }
    on_navigate.call(router::LOGIN_PATH.to_string());
}

pub fn logout_callback(session: SessionContext, on_navigate: Callback<String>) -> Callback<()> {
    Callback::new(move |_| logout(&session, on_navigate))
}

#[component]
pub fn VerticalLayout(active: ActiveIcon, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="vertical-navbar">
            <div class="layout-title">
                <span>{"Billed"}</span>
            </div>
            <a href=router::BILLS_PATH id="layout-icon1" data-testid="icon-window" class=icon_class(active, ActiveIcon::Bills)>
                <span aria-hidden="true">{"▤"}</span>
                <span class="sr-only">{"Mes notes de frais"}</span>
            </a>
            <a href=router::NEW_BILL_PATH id="layout-icon2" data-testid="icon-mail" class=icon_class(active, ActiveIcon::NewBill)>
                <span aria-hidden="true">{"✉"}</span>
                <span class="sr-only">{"Nouvelle note de frais"}</span>
            </a>
            <button
                type="button"
                id="layout-disconnect"
                data-testid="layout-disconnect"
                class="layout-disconnect"
                on:click=move |_| on_logout.call(())
            >
                {"Se déconnecter"}
            </button>
        </div>
    }
}

#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="layout">
            <div class="content">
                <div id="loading" data-testid="loading" class="loading">
                    <LoadingSpinner />
                    <span>{"Loading..."}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorPage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="layout">
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Erreur"}</div>
                </div>
                <div data-testid="error-message">
                    <ErrorMessage message=message />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
