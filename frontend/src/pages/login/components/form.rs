use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;
use crate::pages::login::utils::CredentialsFormState;
use crate::state::session::UserType;
use leptos::*;

#[component]
pub fn LoginUi(
    form: CredentialsFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<UserType>,
) -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-header">
                <h1>{"Billed"}</h1>
            </div>
            <InlineErrorMessage error=error/>
            <div class="login-forms">
                <CredentialsForm
                    user_type=UserType::Employee
                    title="Employé"
                    prefix="employee"
                    form=form
                    pending=pending
                    on_submit=on_submit
                />
                <CredentialsForm
                    user_type=UserType::Admin
                    title="Administration"
                    prefix="admin"
                    form=form
                    pending=pending
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}

#[component]
fn CredentialsForm(
    user_type: UserType,
    title: &'static str,
    prefix: &'static str,
    form: CredentialsFormState,
    pending: Signal<bool>,
    on_submit: Callback<UserType>,
) -> impl IntoView {
    let (email, password) = form.signals(user_type);
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            on_submit.call(user_type);
        }
    };

    view! {
        <div class="login-form-container">
            <h2>{title}</h2>
            <form data-testid=format!("form-{}", prefix) on:submit=submit>
                <div class="form-group">
                    <label class="bold-label">{"Votre email"}</label>
                    <input
                        required
                        type="email"
                        class="form-control"
                        data-testid=format!("{}-email-input", prefix)
                        placeholder="johndoe@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="bold-label">{"Mot de passe"}</label>
                    <input
                        required
                        type="password"
                        class="form-control"
                        data-testid=format!("{}-password-input", prefix)
                        placeholder="******"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    {"Se connecter"}
                </button>
            </form>
        </div>
    }
}
