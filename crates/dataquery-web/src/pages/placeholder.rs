//! Placeholder Page
//!
//! Routes the site links to before they have content of their own.

use dataquery_core::nav::{document_title, placeholder_page};
use leptos::prelude::*;
use leptos_meta::Title;

use super::NotFoundPage;

#[component]
pub fn PlaceholderPage(path: &'static str) -> impl IntoView {
    let Some(page) = placeholder_page(path) else {
        return view! { <NotFoundPage /> }.into_any();
    };

    view! {
        <Title text=document_title(page.path) />
        <section class="bg-slate-900 text-white py-20">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-4xl font-bold mb-6">{page.title}</h1>
                <p class="text-lg text-slate-300 mb-8">"Esta página estará disponível em breve."</p>
                <a href="/" class="text-blue-400 hover:text-blue-300">"Voltar para a página inicial"</a>
            </div>
        </section>
    }
    .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::provide_meta_context;

    fn render(path: &'static str) -> String {
        Owner::new().with(|| {
            provide_meta_context();
            view! { <PlaceholderPage path=path /> }.to_html()
        })
    }

    #[test]
    fn test_placeholder_renders_page_heading() {
        let html = render("/blog");
        assert!(html.contains(">Blog</h1>"));
        assert!(html.contains("Esta página estará disponível em breve."));
        // the title goes to the head, never into the page body
        assert!(!html.contains("<title"));
    }

    #[test]
    fn test_unknown_placeholder_falls_back_to_not_found() {
        let html = render("/precos");
        assert!(html.contains("Página não encontrada"));
        assert!(!html.contains("em breve"));
    }
}
