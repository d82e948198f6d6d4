use leptos::html;
use leptos::*;

/// Bootstrap `modal-lg` width, used until the dialog can be measured.
pub const DEFAULT_MODAL_WIDTH: f64 = 800.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptPreview {
    pub url: String,
    pub width: u32,
}

/// Open/close capability the Bills container drives the receipt dialog with.
pub trait ModalController {
    fn width(&self) -> f64;
    fn set_body(&self, preview: ReceiptPreview);
    fn open(&self);
    fn close(&self);
}

#[derive(Clone, Copy)]
pub struct ReceiptModal {
    pub preview: RwSignal<Option<ReceiptPreview>>,
    pub is_open: RwSignal<bool>,
    dialog_ref: NodeRef<html::Div>,
}

impl ReceiptModal {
    pub fn new() -> Self {
        Self {
            preview: create_rw_signal(None),
            is_open: create_rw_signal(false),
            dialog_ref: create_node_ref::<html::Div>(),
        }
    }
}

impl Default for ReceiptModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController for ReceiptModal {
    fn width(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(dialog) = self.dialog_ref.get_untracked() {
                let measured = f64::from(dialog.client_width());
                if measured > 0.0 {
                    return measured;
                }
            }
        }
        DEFAULT_MODAL_WIDTH
    }

    fn set_body(&self, preview: ReceiptPreview) {
        self.preview.set(Some(preview));
    }

    fn open(&self) {
        self.is_open.set(true);
    }

    fn close(&self) {
        self.is_open.set(false);
    }
}

#[component]
pub fn ReceiptModalView(modal: ReceiptModal) -> impl IntoView {
    let close = move |_| modal.close();
    view! {
        <div
            class=move || if modal.is_open.get() { "modal fade show d-block" } else { "modal fade" }
            id="modaleFile"
            data-testid="modaleFile"
            tabindex="-1"
            role="dialog"
            aria-modal=move || modal.is_open.get().to_string()
            aria-hidden=move || (!modal.is_open.get()).to_string()
        >
            <div class="modal-dialog modal-dialog-centered modal-lg" role="document" node_ref=modal.dialog_ref>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Justificatif"}</h5>
                        <button type="button" class="close" aria-label="Close" on:click=close>
                            <span aria-hidden="true">{"×"}</span>
                        </button>
                    </div>
                    <div class="modal-body">
                        {move || modal.preview.get().map(|preview| view! {
                            <div style="text-align: center;" class="bill-proof-container">
                                <img width=preview.width src=preview.url alt="Bill"/>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
