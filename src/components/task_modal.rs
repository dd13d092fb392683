//! Task Modal Component
//!
//! Add/edit form bound to the shared draft. Only one modal exists; its
//! heading and confirm label follow the current `ModalState`.

use leptos::prelude::*;

use crate::components::VoiceInput;
use crate::context::AppContext;
use crate::store::use_app_store;
use crate::transcript::ParsedTranscript;

#[component]
pub fn TaskModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let is_open = move || ctx.modal.with(|m| m.is_open());
    let can_submit = move || ctx.draft.with(|d| d.can_submit());

    let is_editing = move || ctx.modal.with(|m| m.editing().is_some());
    let heading = move || if is_editing() { "Edit Task" } else { "Add New Task" };
    let confirm_label = move || if is_editing() { "Save" } else { "Create" };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit(&store);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close();
        }
    };

    let on_voice = Callback::new(move |parsed: ParsedTranscript| ctx.apply_transcript(&parsed));

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| ctx.close()>
                <div
                    class="modal"
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="modal-header">
                        <h2>{heading}</h2>
                        <button type="button" class="modal-close-btn" on:click=move |_| ctx.close()>"✕"</button>
                    </div>

                    <VoiceInput on_accept=on_voice />

                    <form class="task-form" on:submit=on_submit>
                        <label for="task-title">
                            "Title " <span class="required">"*"</span>
                        </label>
                        <input
                            id="task-title"
                            type="text"
                            placeholder="A title for the task"
                            prop:value=move || ctx.draft.with(|d| d.title.clone())
                            on:input=move |ev| ctx.set_title(event_target_value(&ev))
                        />

                        <label for="task-description">"Description"</label>
                        <div class="textarea-wrapper">
                            <textarea
                                id="task-description"
                                rows="4"
                                placeholder="A brief about the task"
                                maxlength=ctx.description_limit().to_string()
                                prop:value=move || ctx.draft.with(|d| d.description.clone())
                                on:input=move |ev| ctx.set_description(event_target_value(&ev))
                            ></textarea>
                            <span class="char-counter">
                                {move || format!(
                                    "{}/{}",
                                    ctx.draft.with(|d| d.description.chars().count()),
                                    ctx.description_limit(),
                                )}
                            </span>
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| ctx.close()>"Cancel"</button>
                            <button type="submit" class="primary-btn" disabled=move || !can_submit()>
                                {confirm_label}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
