use crate::{
    components::layout::{logout_callback, ActiveIcon, VerticalLayout},
    router,
};
use leptos::*;

/// Admin landing page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let on_logout = logout_callback(router::use_session(), router::use_navigate_callback());
    view! { <DashboardUi on_logout=on_logout/> }
}

#[component]
pub fn DashboardUi(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="layout">
            <VerticalLayout active=ActiveIcon::None on_logout=on_logout/>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Validations"}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_renders_title_and_logout() {
        let html = render_to_string(|| view! { <DashboardUi on_logout=Callback::new(|_: ()| {})/> });
        assert!(html.contains("Validations"));
        assert!(html.contains("data-testid=\"layout-disconnect\""));
        assert!(!html.contains("active-icon"));
    }
}
