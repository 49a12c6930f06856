use dataquery_core::nav::FOOTER_LINKS;
use dataquery_core::site::{BRAND, CONTACT_EMAIL, FOOTER_BLURB};
use dataquery_core::{copyright_line, current_year};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year());

    view! {
        <footer class="bg-slate-800 text-slate-300 p-8 mt-12">
            <div class="container mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-xl font-semibold text-blue-400 mb-3">{BRAND}</h3>
                    <p class="text-sm">{FOOTER_BLURB}</p>
                </div>
                <div>
                    <h4 class="text-lg font-semibold text-white mb-3">"Links Úteis"</h4>
                    <ul class="space-y-2 text-sm">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.href class="hover:text-blue-300">{link.label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="text-lg font-semibold text-white mb-3">"Contato"</h4>
                    <p class="text-sm">"Email: " {CONTACT_EMAIL}</p>
                </div>
            </div>
            <div class="mt-8 pt-8 border-t border-slate-700 text-center text-sm">
                <p data-copyright="">{copyright}</p>
            </div>
        </footer>
    }
}
