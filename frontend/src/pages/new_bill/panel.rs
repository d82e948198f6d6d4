use super::{
    components::form::NewBillUi,
    repository::NewBillRepository,
    view_model::{NewBillViewModel, SelectedReceipt},
};
use crate::{components::layout::logout_callback, router, utils::dialog};
use leptos::*;
use wasm_bindgen_futures::JsFuture;

#[component]
pub fn NewBillPage() -> impl IntoView {
    let session = router::use_session();
    let on_navigate = router::use_navigate_callback();
    let on_alert = Callback::new(|message: String| dialog::alert(&message));
    let view_model = NewBillViewModel::new(
        NewBillRepository::new(router::use_api_client()),
        session.clone(),
        on_navigate,
        on_alert,
    );
    let form = view_model.form;
    let error = view_model.error;
    let view_model = store_value(view_model);

    let submit_action = create_action(move |_: &()| {
        let vm = view_model.get_value();
        async move { vm.handle_submit().await }
    });
    let pending = submit_action.pending();
    let on_submit = Callback::new(move |_: ()| submit_action.dispatch(()));

    let on_file_change = Callback::new(move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let input_value = input.value();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let vm = view_model.get_value();
        spawn_local(async move {
            match read_receipt(file, input_value).await {
                Ok(selected) => {
                    vm.handle_file_change(selected).await;
                }
                Err(err) => log::error!("failed to read receipt: {}", err),
            }
        });
    });

    view! {
        <NewBillUi
            form=form
            error=error.into()
            pending=pending.into()
            on_submit=on_submit
            on_file_change=on_file_change
            on_logout=logout_callback(session, on_navigate)
        />
    }
}

async fn read_receipt(file: web_sys::File, input_value: String) -> Result<SelectedReceipt, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("{:?}", err))?;
    Ok(SelectedReceipt {
        input_value,
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
