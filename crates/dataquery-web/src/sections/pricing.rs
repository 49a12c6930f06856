use dataquery_core::catalog::{PLANS, section_copy};
use dataquery_core::SectionId;
use leptos::prelude::*;

use crate::components::{PlanCard, SectionHeader};
use crate::styles;

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id=SectionId::Pricing.anchor().unwrap_or_default() class=styles::SECTION_DARK>
            <div class=styles::CONTAINER>
                <SectionHeader copy=section_copy(SectionId::Pricing) />
                <div class="grid md:grid-cols-1 lg:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {PLANS.iter().map(|plan| view! { <PlanCard plan=plan /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        Owner::new().with(|| view! { <PricingSection /> }.to_html())
    }

    #[test]
    fn test_pricing_renders_three_plans_with_one_highlighted() {
        let html = render();

        assert_eq!(html.matches("data-card=\"plan\"").count(), 3);
        assert_eq!(html.matches("data-variant=\"highlighted\"").count(), 1);
        assert_eq!(html.matches("data-variant=\"standard\"").count(), 2);

        let highlighted = html.find("data-variant=\"highlighted\"").unwrap();
        let profissional = html.find("Profissional").unwrap();
        let empresarial = html.find("Empresarial").unwrap();
        assert!(highlighted < profissional && profissional < empresarial);
    }

    #[test]
    fn test_pricing_lists_every_included_item() {
        let html = render();

        let items: usize = PLANS.iter().map(|p| p.features.len()).sum();
        assert_eq!(html.matches("data-plan-item").count(), items);
        assert_eq!(html.matches("href=\"/signup\"").count(), PLANS.len());
    }
}
