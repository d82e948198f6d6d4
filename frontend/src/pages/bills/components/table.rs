use crate::components::{
    layout::{ActiveIcon, ErrorPage, LoadingPage, VerticalLayout},
    modal::{ReceiptModal, ReceiptModalView},
};
use crate::pages::bills::utils::{format_amount, sort_rows_desc, BillRow};
use leptos::*;

/// Bills list view. `loading` wins over `error`, which wins over the table.
#[component]
pub fn BillsUi(
    data: Option<Vec<BillRow>>,
    loading: bool,
    error: Option<String>,
    on_new_bill: Callback<()>,
    on_eye: Callback<String>,
    on_logout: Callback<()>,
    modal: ReceiptModal,
) -> impl IntoView {
    if loading {
        return view! { <LoadingPage/> }.into_view();
    }
    if let Some(message) = error {
        return view! { <ErrorPage message=message/> }.into_view();
    }

    let mut rows = data.unwrap_or_default();
    sort_rows_desc(&mut rows);

    view! {
        <div class="layout">
            <VerticalLayout active=ActiveIcon::Bills on_logout=on_logout/>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Mes notes de frais"}</div>
                    <button
                        type="button"
                        data-testid="btn-new-bill"
                        class="btn btn-primary"
                        on:click=move |_| on_new_bill.call(())
                    >
                        {"Nouvelle note de frais"}
                    </button>
                </div>
                <div id="data-table">
                    <table id="example" class="table table-striped" style="width:100%">
                        <thead>
                            <tr>
                                <th>{"Type"}</th>
                                <th>{"Nom"}</th>
                                <th>{"Date"}</th>
                                <th>{"Montant"}</th>
                                <th>{"Statut"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody data-testid="tbody">
                            {rows
                                .into_iter()
                                .map(|row| view! { <BillTableRow row=row on_eye=on_eye/> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
            <ReceiptModalView modal=modal/>
        </div>
    }
    .into_view()
}

#[component]
fn BillTableRow(row: BillRow, on_eye: Callback<String>) -> impl IntoView {
    // Drafts without a receipt still get the action, with an empty url.
    let url = row.file_url.clone().unwrap_or_default();
    let target = url.clone();
    let actions = view! {
        <div class="icon-actions">
            <div
                id="eye"
                data-testid="icon-eye"
                data-bill-url=url
                role="button"
                title="Voir le justificatif"
                on:click=move |_| on_eye.call(target.clone())
            >
                {"👁"}
            </div>
        </div>
    };
    view! {
        <tr data-bill-id=row.id>
            <td>{row.expense_type}</td>
            <td>{row.name}</td>
            <td data-testid="bill-date">{row.date}</td>
            <td>{format_amount(row.amount)}</td>
            <td>{row.status}</td>
            <td>{actions}</td>
        </tr>
    }
}
