use super::{components::form::LoginUi, repository::LoginRepository, view_model::LoginViewModel};
use crate::{router, state::session::UserType};
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let view_model = LoginViewModel::new(
        LoginRepository::new(router::use_api_client()),
        router::use_session(),
        router::use_navigate_callback(),
    );
    let form = view_model.form;
    let error = view_model.error;
    let view_model = store_value(view_model);

    let login_action = create_action(move |user_type: &UserType| {
        let user_type = *user_type;
        let vm = view_model.get_value();
        async move { vm.handle_submit(user_type).await }
    });
    let pending = login_action.pending();
    let on_submit = Callback::new(move |user_type: UserType| login_action.dispatch(user_type));

    view! {
        <LoginUi form=form error=error.into() pending=pending.into() on_submit=on_submit/>
    }
}
