//! Printing Attributes App
//!
//! Attribute management page: attribute table plus the create/edit dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateAttributeArgs, UpdateAttributeArgs};
use crate::components::{AttributeDialog, DialogTarget};
use crate::context::AppContext;
use crate::models::{Attribute, AttributeSubmit};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (attributes, set_attributes) = signal(Vec::<Attribute>::new());
    let (dialog_target, set_dialog_target) = signal::<Option<DialogTarget>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load attributes on mount and whenever the reload trigger fires
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading attributes, trigger={}", trigger).into());
        spawn_local(async move {
            if let Ok(loaded) = commands::list_attributes().await {
                set_attributes.set(loaded);
            }
        });
    });

    // Dialog close: Some(result) means submit, None means cancel
    let on_dialog_close = move |result: Option<AttributeSubmit>| {
        let target = dialog_target.get();
        set_dialog_target.set(None);
        let Some(result) = result else { return };

        spawn_local(async move {
            match target {
                Some(DialogTarget::Edit(attr)) => {
                    let args = UpdateAttributeArgs {
                        id: attr.id,
                        name: &result.name,
                        function_name: &result.function_name,
                        template_id: result.template_id,
                    };
                    let _ = commands::update_attribute(&args).await;
                }
                _ => {
                    let args = CreateAttributeArgs {
                        name: &result.name,
                        function_name: &result.function_name,
                        template_id: result.template_id,
                    };
                    let _ = commands::create_attribute(&args).await;
                }
            }
            ctx.reload();
        });
    };

    view! {
        <div class="attributes-page">
            <div class="page-header">
                <h1>"Template attributes"</h1>
                <button
                    class="new-attribute-btn"
                    on:click=move |_| set_dialog_target.set(Some(DialogTarget::Create))
                >
                    "New attribute"
                </button>
            </div>

            <table class="attribute-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Function"</th>
                        <th>"Template"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || attributes.get()
                        key=|attr| attr.id
                        children=move |attr| {
                            let attr_for_edit = attr.clone();
                            view! {
                                <tr>
                                    <td>{attr.name.clone()}</td>
                                    <td class="function-cell">{attr.function_name.clone()}</td>
                                    <td>{attr.template.name.clone()}</td>
                                    <td>
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_dialog_target.set(Some(DialogTarget::Edit(attr_for_edit.clone())));
                                            }
                                        >
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <p class="attribute-count">{move || format!("{} attributes", attributes.get().len())}</p>

            // Modal dialog, rendered only while open
            {move || dialog_target.get().map(|target| view! {
                <AttributeDialog target=target on_close=on_dialog_close />
            })}
        </div>
    }
}
