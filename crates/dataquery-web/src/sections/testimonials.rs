use dataquery_core::catalog::{TESTIMONIALS, section_copy};
use dataquery_core::SectionId;
use leptos::prelude::*;

use crate::components::{SectionHeader, TestimonialCard};
use crate::styles;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Testimonials.anchor().unwrap_or_default() class=styles::SECTION_DARK>
            <div class=styles::CONTAINER>
                <SectionHeader copy=section_copy(SectionId::Testimonials) />
                <div class="grid md:grid-cols-1 lg:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
