use dataquery_core::catalog::section_copy;
use dataquery_core::contact::{CONTACT_FIELDS, ContactField, FieldKind, SUBMIT_LABEL};
use dataquery_core::SectionId;
use leptos::logging;
use leptos::prelude::*;

use crate::styles;

/// Contact form markup
///
/// Submission is not wired to any endpoint: the default navigation is
/// suppressed so the visitor stays on the page.
#[component]
pub fn ContactSection() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        logging::log!("contact form has no submission endpoint");
    };

    let copy = section_copy(SectionId::Contact);

    view! {
        <section id=SectionId::Contact.anchor().unwrap_or_default() class="py-16 bg-slate-800">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold text-white mb-4">{copy.heading}</h2>
                <p class="text-slate-400 mb-8 max-w-xl mx-auto">{copy.blurb}</p>
                <form
                    class="max-w-lg mx-auto bg-slate-900 p-8 rounded-lg shadow-xl"
                    on:submit=on_submit
                >
                    {CONTACT_FIELDS.iter().map(|field| view! { <FormField field=field /> }).collect_view()}
                    <button
                        type="submit"
                        class="w-full bg-teal-500 hover:bg-teal-600 text-white font-semibold px-6 py-3 rounded-md text-lg shadow-lg transition duration-300"
                    >
                        {SUBMIT_LABEL}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: &'static ContactField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=field.id
                name=field.id
                rows=rows.to_string()
                class=styles::FORM_CONTROL
                required=field.required
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                type=kind.input_type().unwrap_or("text")
                id=field.id
                name=field.id
                class=styles::FORM_CONTROL
                required=field.required
            />
        }
        .into_any(),
    };

    // extra room between the message box and the button
    let wrapper = if field.kind.input_type().is_none() { "mb-6" } else { "mb-4" };

    view! {
        <div class=wrapper data-field=field.id>
            <label for=field.id class=styles::FORM_LABEL>{field.label}</label>
            {control}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_contact_renders_three_labeled_fields() {
        let html = Owner::new().with(|| view! { <ContactSection /> }.to_html());

        assert_eq!(html.matches("data-field=").count(), CONTACT_FIELDS.len());
        for field in &CONTACT_FIELDS {
            assert!(html.contains(&format!("for=\"{}\"", field.id)));
            assert!(html.contains(field.label));
        }
        assert!(html.contains("<textarea"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"submit\""));
        assert!(!html.contains("action="));
        assert!(html.contains("id=\"contact\""));
    }
}
