//! UI Components
//!
//! Card primitives: each renders exactly one catalog record.

use dataquery_core::{Feature, Icon, Plan, SectionCopy, Testimonial};
use leptos::prelude::*;

use crate::icons::SvgIcon;
use crate::styles::{self, PlanVariant};

/// Heading and lead paragraph at the top of a section
#[component]
pub fn SectionHeader(copy: SectionCopy) -> impl IntoView {
    view! {
        <h2 class=styles::SECTION_HEADING>{copy.heading}</h2>
        <p class=styles::SECTION_BLURB>{copy.blurb}</p>
    }
}

#[component]
pub fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div
            class="bg-slate-800 p-6 rounded-lg shadow-lg hover:shadow-blue-500/30 transition-shadow duration-300"
            data-card="feature"
        >
            <div class="flex items-center justify-center w-12 h-12 bg-blue-500 rounded-full mb-4">
                <SvgIcon icon=feature.icon class="w-6 h-6 text-white" />
            </div>
            <h3 class="text-xl font-semibold text-white mb-2">{feature.title}</h3>
            <p class="text-slate-400 text-sm leading-relaxed">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn PlanCard(plan: &'static Plan) -> impl IntoView {
    let variant = PlanVariant::of(plan.highlighted);

    view! {
        <div class=variant.card() data-card="plan" data-variant=variant.as_str()>
            <h3 class=variant.name()>{plan.name}</h3>
            <p class=variant.price()>
                {plan.price}
                <span class="text-base font-normal text-slate-400">{plan.period}</span>
            </p>
            <ul class="space-y-3 text-slate-400 mb-8 flex-grow">
                {plan
                    .features
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center" data-plan-item="">
                                <SvgIcon icon=Icon::Check class=variant.check() />
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href=plan.cta_href class=variant.cta()>{plan.cta_text}</a>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div
            class="bg-slate-800 p-8 rounded-lg shadow-xl text-center transform hover:scale-105 transition-transform duration-300"
            data-card="testimonial"
        >
            <p class="text-slate-300 italic text-lg mb-6">{format!("\"{}\"", testimonial.quote)}</p>
            <p class="text-white font-semibold text-xl">{testimonial.author}</p>
            <p class="text-blue-400 text-sm">{testimonial.role}</p>
        </div>
    }
}
