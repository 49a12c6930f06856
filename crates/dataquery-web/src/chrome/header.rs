use dataquery_core::nav::{BRAND_LINK, HEADER_LINKS, LOGIN_LINK};
use dataquery_core::{Icon, MenuState};
use leptos::prelude::*;

use crate::icons::SvgIcon;
use crate::styles;

/// Sticky top bar with the brand, section links and the mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MenuState::closed());

    view! {
        <header class="bg-slate-900 text-white p-4 shadow-md sticky top-0 z-50">
            <nav class="container mx-auto flex justify-between items-center">
                <a href=BRAND_LINK.href class="text-2xl font-bold text-blue-400">
                    {BRAND_LINK.label}
                </a>
                <div class="hidden md:flex space-x-4 items-center">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class=styles::NAV_LINK>{link.label}</a> })
                        .collect_view()}
                    <a href=LOGIN_LINK.href class=styles::NAV_LOGIN>{LOGIN_LINK.label}</a>
                </div>
                <MenuButton menu=menu />
            </nav>
            <MobileMenu menu=menu />
        </header>
    }
}

/// Hamburger button, swapped for a close icon while the menu is open
#[component]
fn MenuButton(menu: RwSignal<MenuState>) -> impl IntoView {
    let is_open = move || menu.get().is_open();

    view! {
        <div class="md:hidden">
            <button
                type="button"
                class="text-white focus:outline-none"
                aria-label="Menu"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| menu.update(MenuState::toggle)
            >
                {move || {
                    let icon = if is_open() { Icon::X } else { Icon::Menu };
                    view! { <SvgIcon icon=icon class="w-6 h-6" /> }
                }}
            </button>
        </div>
    }
}

/// Stacked copy of the header links, shown only while the menu is open
#[component]
fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <Show when=move || menu.get().is_open()>
            <div class="md:hidden mt-4 bg-slate-900" data-mobile-menu="">
                {HEADER_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class=styles::MOBILE_LINK on:click=move |_| follow_link(menu)>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href=LOGIN_LINK.href class=styles::MOBILE_LOGIN on:click=move |_| follow_link(menu)>
                    {LOGIN_LINK.label}
                </a>
            </div>
        </Show>
    }
}

/// A followed mobile link closes the menu
fn follow_link(menu: RwSignal<MenuState>) {
    menu.update(MenuState::close);
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn open_menu() -> RwSignal<MenuState> {
        let mut state = MenuState::closed();
        state.toggle();
        RwSignal::new(state)
    }

    #[test]
    fn test_header_starts_with_mobile_menu_closed() {
        let html = Owner::new().with(|| view! { <Header /> }.to_html());

        assert!(!html.contains("data-mobile-menu"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("data-icon=\"menu\""));
    }

    #[test]
    fn test_header_renders_desktop_links() {
        let html = Owner::new().with(|| view! { <Header /> }.to_html());

        for link in &HEADER_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)), "missing {}", link.href);
        }
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("DataQuery"));
    }

    #[test]
    fn test_open_menu_lists_every_link_once() {
        let html = Owner::new().with(|| {
            let menu = open_menu();
            view! { <MobileMenu menu=menu /> }.to_html()
        });

        let start = html.find("data-mobile-menu").expect("menu is open");
        let menu_html = &html[start..];
        for link in HEADER_LINKS.iter().chain([&LOGIN_LINK]) {
            let needle = format!("href=\"{}\"", link.href);
            assert_eq!(menu_html.matches(&needle).count(), 1, "{}", link.href);
        }
    }

    #[test]
    fn test_open_menu_button_shows_close_icon() {
        let html = Owner::new().with(|| {
            let menu = open_menu();
            view! { <MenuButton menu=menu /> }.to_html()
        });

        assert!(html.contains("data-icon=\"x\""));
        assert!(!html.contains("data-icon=\"menu\""));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn test_following_a_link_hides_the_menu() {
        Owner::new().with(|| {
            let menu = open_menu();
            follow_link(menu);

            assert!(!menu.get_untracked().is_open());
            let html = view! { <MobileMenu menu=menu /> }.to_html();
            assert!(!html.contains("data-mobile-menu"));
        });
    }
}
