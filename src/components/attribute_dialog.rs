//! Attribute Create/Edit Dialog
//!
//! Modal form for creating or editing a template attribute: name, function
//! name, template selection, plus the chip input for sketching function
//! parts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::chip_input::ChipInput;
use crate::form::AttributeForm;
use crate::models::{Attribute, AttributeSubmit, Template};

/// What the dialog was opened for
#[derive(Debug, Clone, PartialEq)]
pub enum DialogTarget {
    Create,
    Edit(Attribute),
}

/// Modal attribute form
///
/// Props:
/// - target: create mode, or edit mode seeded from an existing record
/// - on_close: called with Some(result) on submit, None on cancel
#[component]
pub fn AttributeDialog(
    target: DialogTarget,
    #[prop(into)] on_close: Callback<Option<AttributeSubmit>>,
) -> impl IntoView {
    let (is_edit, seed) = match target {
        DialogTarget::Edit(attr) => (true, Some(attr)),
        DialogTarget::Create => (false, None),
    };
    let (form, set_form) = signal(AttributeForm::seeded(seed.as_ref()));
    let (templates, set_templates) = signal(Vec::<Template>::new());

    // Single-shot template fetch; on failure the select simply stays empty
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(loaded) = commands::list_templates().await {
                set_templates.set(loaded);
            }
        });
    });

    // Returns the result to wherever the dialog was opened from. Validity is
    // gated by the disabled submit button, not re-checked here.
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_close.run(Some(form.with(|f| f.submit())));
    };

    view! {
        <div class="dialog-overlay">
            <div class="dialog attribute-dialog">
                <div class="dialog-header">
                    <span class="dialog-title">
                        {if is_edit { "Edit attribute" } else { "New attribute" }}
                    </span>
                    <button class="close-btn" on:click=move |_| on_close.run(None)>"×"</button>
                </div>

                <form class="attribute-form" on:submit=submit>
                    <div class="form-section">
                        <label class="form-label">"Name"</label>
                        <input
                            type="text"
                            class="form-input"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_form.update(|f| f.name = value);
                            }
                        />
                    </div>

                    <div class="form-section">
                        <label class="form-label">"Function"</label>
                        <input
                            type="text"
                            class="form-input"
                            prop:value=move || form.with(|f| f.function_name.clone())
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_form.update(|f| f.function_name = value);
                            }
                        />
                    </div>

                    <div class="form-section">
                        <label class="form-label">"Template"</label>
                        <select
                            class="form-select"
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                let id = select.value().parse::<i64>().ok();
                                set_form.update(|f| f.template_id = id);
                            }
                        >
                            <option
                                value=""
                                selected=move || form.with(|f| f.template_id.is_none())
                            >
                                "Select template..."
                            </option>
                            <For
                                each=move || templates.get()
                                key=|template| template.id
                                children=move |template| {
                                    let id = template.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || form.with(|f| f.template_id == Some(id))
                                        >
                                            {template.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-section">
                        <label class="form-label">"Function parts"</label>
                        <ChipInput />
                    </div>

                    <div class="dialog-footer">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(None)>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="submit-btn"
                            disabled=move || !form.with(|f| f.is_valid())
                        >
                            {if is_edit { "Save" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
