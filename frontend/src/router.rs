use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{
        bills::BillsPage, dashboard::DashboardPage, login::LoginPage, new_bill::NewBillPage,
    },
    state::session::SessionContext,
};

pub const LOGIN_PATH: &str = "/";
pub const BILLS_PATH: &str = "/employee/bills";
pub const NEW_BILL_PATH: &str = "/employee/bill/new";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

pub const ROUTE_PATHS: &[&str] = &[LOGIN_PATH, BILLS_PATH, NEW_BILL_PATH, DASHBOARD_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let session = SessionContext::init();
    provide_context(ApiClient::new().with_session(session.clone()));
    provide_context(session);
    view! {
        <Title text="Billed"/>
        <Router>
            <Routes>
                <Route path=LOGIN_PATH view=LoginPage/>
                <Route path=BILLS_PATH view=BillsPage/>
                <Route path=NEW_BILL_PATH view=NewBillPage/>
                <Route path=DASHBOARD_PATH view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Navigation callback handed to containers; must be created inside `<Router>`.
pub fn use_navigate_callback() -> Callback<String> {
    let navigate = use_navigate();
    Callback::new(move |path: String| navigate(&path, NavigateOptions::default()))
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::init)
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new().with_session(use_session()))
}
