//! Labelled input bound to a form signal, with its per-field error.

use leptos::prelude::*;

use crate::state::forms::FormErrors;

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    name: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    errors: RwSignal<FormErrors>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let error = move || errors.with(|e| e.field(name).map(str::to_owned));

    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=kind
                placeholder=placeholder
                class="form-input"
                class:input-error=move || error().is_some()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    errors.update(|e| e.clear_field(name));
                    on_input.run(event_target_value(&ev));
                }
            />
            {move || error().map(|message| view! { <span class="field-error">{message}</span> })}
        </div>
    }
}
