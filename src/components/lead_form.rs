//! Modal form for creating or editing a lead.
//!
//! ERROR HANDLING
//! ==============
//! Submission failures surface as an inline message inside the modal; the
//! modal stays open so the draft is not lost.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use leptos::prelude::*;

use crate::net::types::{Lead, LeadDraft};
use crate::state::leads::LeadsState;

/// Validate a draft before submission; `None` means it is submittable.
fn draft_problem(draft: &LeadDraft) -> Option<&'static str> {
    if draft.name.trim().is_empty() {
        return Some("Name is required.");
    }
    if draft.status.trim().is_empty() {
        return Some("Status is required.");
    }
    None
}

/// Build the draft sent to the backend, trimming and blank-collapsing
/// free-text fields.
fn normalized_draft(name: &str, phone: &str, status: &str, source: &str, city: &str) -> LeadDraft {
    let optional = |v: &str| {
        let v = v.trim();
        if v.is_empty() { None } else { Some(v.to_owned()) }
    };
    LeadDraft {
        name: name.trim().to_owned(),
        phone: optional(phone),
        status: status.trim().to_owned(),
        source: optional(source),
        city: optional(city),
    }
}

/// Modal form; edits `existing` when given, otherwise creates a new lead.
#[component]
pub fn LeadForm(
    #[prop(optional)] existing: Option<Lead>,
    on_close: Callback<()>,
    leads: RwSignal<LeadsState>,
) -> impl IntoView {
    let editing_id = existing.as_ref().map(|l| l.id.clone());
    let name = RwSignal::new(existing.as_ref().map(|l| l.name.clone()).unwrap_or_default());
    let phone = RwSignal::new(existing.as_ref().and_then(|l| l.phone.clone()).unwrap_or_default());
    let status = RwSignal::new(
        existing
            .as_ref()
            .map(|l| l.status.clone())
            .unwrap_or_else(|| "new".to_owned()),
    );
    let source = RwSignal::new(existing.as_ref().and_then(|l| l.source.clone()).unwrap_or_default());
    let city = RwSignal::new(existing.as_ref().and_then(|l| l.city.clone()).unwrap_or_default());
    let problem = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let heading = if editing_id.is_some() { "Edit Lead" } else { "New Lead" };

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let draft = normalized_draft(&name.get(), &phone.get(), &status.get(), &source.get(), &city.get());
        if let Some(message) = draft_problem(&draft) {
            problem.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);
        problem.set(None);

        #[cfg(feature = "hydrate")]
        {
            let editing_id = editing_id.clone();
            leptos::task::spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => crate::net::api::update_lead(id, &draft).await,
                    None => crate::net::api::create_lead(&draft).await,
                };
                match result {
                    Ok(lead) => {
                        leads.update(|s| s.upsert(lead));
                        on_close.run(());
                    }
                    Err(e) => {
                        problem.set(Some(e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Phone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Status"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || status.get()
                        on:input=move |ev| status.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Source"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || source.get()
                        on:input=move |ev| source.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "City"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || problem.get().is_some()>
                    <p class="dialog__error">{move || problem.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
