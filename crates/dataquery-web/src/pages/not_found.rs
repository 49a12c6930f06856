use dataquery_core::nav::NOT_FOUND_TITLE;
use dataquery_core::site::METADATA;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=METADATA.page_title(NOT_FOUND_TITLE) />
        <section class="bg-slate-900 text-white py-20">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-4xl font-bold mb-6">{NOT_FOUND_TITLE}</h1>
                <a href="/" class="text-blue-400 hover:text-blue-300">"Voltar para a página inicial"</a>
            </div>
        </section>
    }
}
