use crate::api::ApiError;
use crate::components::{
    error::InlineErrorMessage,
    layout::{ActiveIcon, VerticalLayout},
};
use crate::pages::new_bill::utils::{NewBillFormState, EXPENSE_TYPES};
use leptos::*;

#[component]
pub fn NewBillUi(
    form: NewBillFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
    on_file_change: Callback<ev::Event>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();

    // A browser file input can only be reset through the element itself.
    #[cfg(target_arch = "wasm32")]
    create_effect(move |_| {
        if form.file_value.get().is_empty() {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            on_submit.call(());
        }
    };

    view! {
        <div class="layout">
            <VerticalLayout active=ActiveIcon::NewBill on_logout=on_logout/>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Envoyer une note de frais"}</div>
                </div>
                <InlineErrorMessage error=error/>
                <div class="form-newbill-container content-inner">
                    <form data-testid="form-new-bill" on:submit=submit>
                        <div class="row">
                            <div class="col-md-6">
                                <div class="col-half">
                                    <label for="expense-type" class="bold-label">{"Type de dépense"}</label>
                                    <select
                                        required
                                        class="form-control blue-border"
                                        data-testid="expense-type"
                                        prop:value=move || form.expense_type.get()
                                        on:change=move |ev| form.expense_type.set(event_target_value(&ev))
                                    >
                                        {EXPENSE_TYPES
                                            .iter()
                                            .map(|label| view! { <option value=*label>{*label}</option> })
                                            .collect_view()}
                                    </select>
                                </div>
                                <div class="col-half">
                                    <label for="expense-name" class="bold-label">{"Nom de la dépense"}</label>
                                    <input
                                        type="text"
                                        class="form-control blue-border"
                                        data-testid="expense-name"
                                        placeholder="Vol Paris Londres"
                                        prop:value=move || form.name.get()
                                        on:input=move |ev| form.name.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="col-half">
                                    <label for="datepicker" class="bold-label">{"Date"}</label>
                                    <input
                                        required
                                        type="date"
                                        class="form-control blue-border"
                                        data-testid="datepicker"
                                        prop:value=move || form.date.get()
                                        on:input=move |ev| form.date.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="col-half">
                                    <label for="amount" class="bold-label">{"Montant TTC "}</label>
                                    <input
                                        required
                                        type="number"
                                        class="form-control blue-border input-icon input-icon-right"
                                        data-testid="amount"
                                        placeholder="348"
                                        prop:value=move || form.amount.get()
                                        on:input=move |ev| form.amount.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="col-half-row">
                                    <div class="flex-col">
                                        <label for="vat" class="bold-label">{"TVA"}</label>
                                        <input
                                            type="number"
                                            class="form-control blue-border"
                                            data-testid="vat"
                                            placeholder="70"
                                            prop:value=move || form.vat.get()
                                            on:input=move |ev| form.vat.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="flex-col">
                                        <input
                                            required
                                            type="number"
                                            class="form-control blue-border"
                                            data-testid="pct"
                                            placeholder="20"
                                            prop:value=move || form.pct.get()
                                            on:input=move |ev| form.pct.set(event_target_value(&ev))
                                        />
                                        <span class="white-space">{" % "}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="col-md-6">
                                <div class="col-half">
                                    <label for="commentary" class="bold-label">{"Commentaire"}</label>
                                    <textarea
                                        class="form-control blue-border"
                                        data-testid="commentary"
                                        rows=3
                                        prop:value=move || form.commentary.get()
                                        on:input=move |ev| form.commentary.set(event_target_value(&ev))
                                    ></textarea>
                                </div>
                                <div class="col-half">
                                    <label for="file" class="bold-label">{"Justificatif"}</label>
                                    <input
                                        required
                                        type="file"
                                        accept=".jpg,.jpeg,.png"
                                        class="form-control blue-border"
                                        data-testid="file"
                                        node_ref=file_input
                                        on:change=move |ev| on_file_change.call(ev)
                                    />
                                </div>
                            </div>
                        </div>
                        <div class="row">
                            <div class="col-md-6">
                                <div class="col-half">
                                    <button
                                        type="submit"
                                        id="btn-send-bill"
                                        class="btn btn-primary"
                                        disabled=move || pending.get()
                                    >
                                        {"Envoyer"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
