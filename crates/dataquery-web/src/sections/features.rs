use dataquery_core::catalog::{FEATURES, section_copy};
use dataquery_core::SectionId;
use leptos::prelude::*;

use crate::components::{FeatureCard, SectionHeader};
use crate::styles;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=SectionId::Features.anchor().unwrap_or_default() class=styles::SECTION_DARK>
            <div class=styles::CONTAINER>
                <SectionHeader copy=section_copy(SectionId::Features) />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use dataquery_core::catalog::item_count;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_features_render_one_card_per_entry() {
        let html = Owner::new().with(|| view! { <FeaturesSection /> }.to_html());

        assert_eq!(html.matches("data-card=\"feature\"").count(), item_count(SectionId::Features));
        assert_eq!(html.matches("data-card=\"feature\"").count(), 4);
        assert!(html.contains("id=\"features\""));
        assert!(html.contains(section_copy(SectionId::Features).heading));
        for feature in &FEATURES {
            assert!(html.contains(feature.title));
        }
    }
}
