use super::{components::table::BillsUi, repository::BillsRepository, view_model::BillsViewModel};
use crate::{
    components::{
        layout::logout_callback,
        modal::{ModalController, ReceiptModal},
    },
    router,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn BillsPage() -> impl IntoView {
    let session = router::use_session();
    let on_navigate = router::use_navigate_callback();
    let modal = ReceiptModal::new();
    let view_model = store_value(BillsViewModel::new(
        BillsRepository::new(router::use_api_client()),
        on_navigate,
        Some(Rc::new(modal) as Rc<dyn ModalController>),
    ));

    let bills = create_local_resource(
        || (),
        move |_| {
            let vm = view_model.get_value();
            async move { vm.fetch_and_format_bills().await }
        },
    );

    let on_new_bill = Callback::new(move |_: ()| view_model.with_value(|vm| vm.handle_new_bill_click()));
    let on_eye = Callback::new(move |url: String| {
        view_model.with_value(|vm| vm.handle_eye_icon_click(&url))
    });
    let on_logout = logout_callback(session, on_navigate);

    view! {
        {move || match bills.get() {
            None => view! {
                <BillsUi data=None loading=true error=None on_new_bill=on_new_bill on_eye=on_eye on_logout=on_logout modal=modal/>
            }.into_view(),
            Some(Ok(rows)) => view! {
                <BillsUi data=Some(rows) loading=false error=None on_new_bill=on_new_bill on_eye=on_eye on_logout=on_logout modal=modal/>
            }.into_view(),
            Some(Err(err)) => view! {
                <BillsUi data=None loading=false error=Some(err.error) on_new_bill=on_new_bill on_eye=on_eye on_logout=on_logout modal=modal/>
            }.into_view(),
        }}
    }
}
