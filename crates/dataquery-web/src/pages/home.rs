//! Home Page

use dataquery_core::nav::document_title;
use dataquery_core::{HOME_SECTIONS, SectionId};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::sections::{
    ContactSection, FeaturesSection, HeroSection, PricingSection, TestimonialsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let sections = HOME_SECTIONS
        .iter()
        .map(|section| match section {
            SectionId::Hero => view! { <HeroSection /> }.into_any(),
            SectionId::Features => view! { <FeaturesSection /> }.into_any(),
            SectionId::Testimonials => view! { <TestimonialsSection /> }.into_any(),
            SectionId::Pricing => view! { <PricingSection /> }.into_any(),
            SectionId::Contact => view! { <ContactSection /> }.into_any(),
        })
        .collect_view();

    view! {
        <Title text=document_title("/") />
        {sections}
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_sections_render_in_catalog_order() {
        let html = Owner::new().with(|| view! { <HomePage /> }.to_html());

        let positions: Vec<usize> = ["id=\"features\"", "id=\"testimonials\"", "id=\"pricing\"", "id=\"contact\""]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();

        assert!(html.find("<h1").unwrap() < positions[0]);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
