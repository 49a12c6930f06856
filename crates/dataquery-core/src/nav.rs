//! Navigation
//!
//! Link sets for the header and footer, the placeholder routes they point
//! at, and the open/closed state of the mobile menu.

use serde::Serialize;

use crate::site::METADATA;

/// A navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Where a link leads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Fragment on the home page, without the leading `#`
    Anchor(&'static str),
    /// Path handled by the router
    Route(&'static str),
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    pub fn target(&self) -> LinkTarget {
        match self.href.strip_prefix('#') {
            Some(fragment) => LinkTarget::Anchor(fragment),
            None => LinkTarget::Route(self.href),
        }
    }
}

/// Brand link at the left of the header
pub static BRAND_LINK: NavLink = NavLink::new("DataQuery", "/");

/// Header links, shown inline on desktop and stacked in the mobile menu
pub static HEADER_LINKS: [NavLink; 4] = [
    NavLink::new("Funcionalidades", "#features"),
    NavLink::new("Planos", "#pricing"),
    NavLink::new("Blog", "/blog"),
    NavLink::new("Contato", "#contact"),
];

/// Rendered after the header links as a button
pub static LOGIN_LINK: NavLink = NavLink::new("Login", "/login");

/// "Links Úteis" column of the footer
pub static FOOTER_LINKS: [NavLink; 6] = [
    NavLink::new("Funcionalidades", "#features"),
    NavLink::new("Planos", "#pricing"),
    NavLink::new("Blog", "/blog"),
    NavLink::new("Contato", "/contato"),
    NavLink::new("Termos de Serviço", "/termos"),
    NavLink::new("Política de Privacidade", "/privacidade"),
];

/// A route that is linked from the site but has no content yet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlaceholderPage {
    pub path: &'static str,
    pub title: &'static str,
}

pub static PLACEHOLDER_PAGES: [PlaceholderPage; 6] = [
    PlaceholderPage { path: "/blog", title: "Blog" },
    PlaceholderPage { path: "/login", title: "Login" },
    PlaceholderPage { path: "/signup", title: "Criar Conta" },
    PlaceholderPage { path: "/contato", title: "Contato" },
    PlaceholderPage { path: "/termos", title: "Termos de Serviço" },
    PlaceholderPage { path: "/privacidade", title: "Política de Privacidade" },
];

/// Look up the placeholder registered for `path`
pub fn placeholder_page(path: &str) -> Option<&'static PlaceholderPage> {
    let path = path.trim_end_matches('/');
    PLACEHOLDER_PAGES.iter().find(|page| page.path == path)
}

/// Title of the not-found page
pub const NOT_FOUND_TITLE: &str = "Página não encontrada";

/// Document title for the page the router shows at `path`
///
/// The home page carries the full site title; every other route gets
/// `<page> | Wanda`.
pub fn document_title(path: &str) -> String {
    if path.trim_end_matches('/').is_empty() {
        return METADATA.title.to_string();
    }
    let page = placeholder_page(path).map_or(NOT_FOUND_TITLE, |page| page.title);
    METADATA.page_title(page)
}

/// Whether the mobile navigation menu is open
///
/// Starts closed. The menu button flips it; following any link in the open
/// menu closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub const fn closed() -> Self {
        Self { open: false }
    }

    pub const fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called when a link in the mobile menu is followed
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
        assert_eq!(MenuState::default(), MenuState::closed());
    }

    #[test]
    fn test_toggle_parity() {
        for presses in 0..8 {
            let mut menu = MenuState::closed();
            for _ in 0..presses {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), presses % 2 == 1, "after {presses} presses");
        }
    }

    #[test]
    fn test_link_selection_closes_menu() {
        let mut menu = MenuState::closed();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());

        // a later press opens it again
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::closed();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_targets() {
        assert_eq!(HEADER_LINKS[0].target(), LinkTarget::Anchor("features"));
        assert_eq!(LOGIN_LINK.target(), LinkTarget::Route("/login"));
        assert_eq!(BRAND_LINK.target(), LinkTarget::Route("/"));
    }

    #[test]
    fn test_every_route_link_has_a_page() {
        let route_links = HEADER_LINKS
            .iter()
            .chain([&LOGIN_LINK])
            .chain(FOOTER_LINKS.iter())
            .filter_map(|link| match link.target() {
                LinkTarget::Route(path) => Some(path),
                LinkTarget::Anchor(_) => None,
            });

        for path in route_links {
            assert!(placeholder_page(path).is_some(), "no page for {path}");
        }
    }

    #[test]
    fn test_placeholder_lookup_ignores_trailing_slash() {
        assert_eq!(placeholder_page("/termos/").map(|p| p.title), Some("Termos de Serviço"));
        assert!(placeholder_page("/precos").is_none());
    }

    #[test]
    fn test_document_title_follows_route() {
        assert_eq!(document_title("/"), METADATA.title);
        assert_eq!(document_title("/blog"), "Blog | Wanda");
        assert_eq!(document_title("/signup/"), "Criar Conta | Wanda");
        assert_eq!(document_title("/precos"), "Página não encontrada | Wanda");
    }

    #[test]
    fn test_document_title_resets_after_leaving_placeholder() {
        // blog -> home must not keep the blog title
        let visited: Vec<String> = ["/blog", "/"].into_iter().map(document_title).collect();
        assert_eq!(visited, ["Blog | Wanda".to_string(), METADATA.title.to_string()]);
    }
}
