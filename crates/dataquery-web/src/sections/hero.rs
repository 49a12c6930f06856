use dataquery_core::catalog::{HERO_CTA, HERO_IMAGE_ALT, HERO_IMAGE_SRC, section_copy};
use dataquery_core::SectionId;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    let copy = section_copy(SectionId::Hero);

    view! {
        <section class="bg-slate-900 text-white py-20">
            <div class="container mx-auto grid md:grid-cols-2 gap-8 items-center px-4">
                <div class="md:pr-8">
                    <h1 class="text-4xl md:text-5xl font-bold mb-6 leading-tight">{copy.heading}</h1>
                    <p class="text-lg text-slate-300 mb-8">{copy.blurb}</p>
                    <a
                        href=HERO_CTA.href
                        class="bg-teal-500 hover:bg-teal-600 text-white font-semibold px-8 py-3 rounded-md text-lg shadow-lg transition duration-300"
                    >
                        {HERO_CTA.label}
                    </a>
                </div>
                <div class="mt-8 md:mt-0">
                    <img src=HERO_IMAGE_SRC alt=HERO_IMAGE_ALT class="rounded-lg shadow-xl" />
                </div>
            </div>
        </section>
    }
}
