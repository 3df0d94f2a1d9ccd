//! Chip Input Component
//!
//! Chip-style input with autocomplete suggestions from the fixed vocabulary.
//! Chips are dialog-local scratch state and are not part of the submit
//! payload.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::chips::{filter_chips, ChipList};

/// Chip editor: current chips, text input, and suggestion dropdown
#[component]
pub fn ChipInput() -> impl IntoView {
    let (chips, set_chips) = signal(ChipList::new());
    let (input_value, set_input_value) = signal(String::new());
    let (panel_open, set_panel_open) = signal(false);
    let (selected_idx, set_selected_idx) = signal(0usize);

    // Suggestions recompute on every keystroke; empty input shows the whole
    // vocabulary
    let suggestions = move || filter_chips(&input_value.get());

    // The dropdown counts as open only while it has something to show
    let dropdown_open = move || panel_open.get() && !suggestions().is_empty();

    // Autocomplete path. The dropdown is closing as part of the selection,
    // so there is no open-dropdown guard here.
    let select_suggestion = move |name: String| {
        set_chips.update(|list| list.select(&name));
        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    // Raw-text path. Only fires while the dropdown is closed so it cannot
    // double-add against a simultaneous suggestion selection. The input is
    // cleared whether or not a chip was appended.
    let add_from_input = move || {
        if !dropdown_open() {
            set_chips.update(|list| list.add(&input_value.get()));
            set_input_value.set(String::new());
            set_selected_idx.set(0);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        match key.as_str() {
            "Enter" => {
                ev.prevent_default();
                let sugg = suggestions();
                let sel = selected_idx.get();
                if dropdown_open() && sel < sugg.len() {
                    set_panel_open.set(false);
                    select_suggestion(sugg[sel].name.clone());
                } else {
                    add_from_input();
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < suggestions().len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="chip-input-wrapper">
            <div class="chip-row">
                {move || chips.with(|list| list.chips().iter().cloned().map(|chip| {
                    let chip_for_remove = chip.clone();
                    view! {
                        <span class=format!("chip {}", chip.color.css_class())>
                            <span class="chip-name">{chip.name.clone()}</span>
                            <button
                                type="button"
                                class="chip-remove-btn"
                                on:click=move |_| set_chips.update(|list| list.remove(&chip_for_remove))
                            >
                                "×"
                            </button>
                        </span>
                    }
                }).collect_view())}
            </div>

            <input
                type="text"
                class="chip-input"
                placeholder="Add function part..."
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_input_value.set(input.value());
                    set_selected_idx.set(0);
                    set_panel_open.set(true);
                }
                on:focus=move |_| set_panel_open.set(true)
                on:blur=move |_| {
                    // dropdown closes before the add-on-blur fires
                    set_panel_open.set(false);
                    add_from_input();
                }
                on:keydown=on_keydown
            />

            // Suggestion dropdown
            {move || {
                let sugg = suggestions();
                if !dropdown_open() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="autocomplete-list">
                            {sugg.into_iter().enumerate().map(|(i, chip)| {
                                let name = chip.name.clone();
                                let name_for_click = name.clone();
                                let item_class = if i == selected {
                                    format!("autocomplete-item selected {}", chip.color.css_class())
                                } else {
                                    format!("autocomplete-item {}", chip.color.css_class())
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=item_class
                                        // keep the input focused so blur does not fire mid-click
                                        on:mousedown=move |ev: web_sys::MouseEvent| ev.prevent_default()
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            select_suggestion(name_for_click.clone());
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
