//! Site-wide Metadata
//!
//! Document head values, brand strings and the footer copyright line.

use chrono::{Datelike, Local};
use serde::Serialize;

/// Head metadata applied to every page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub lang: &'static str,
    pub brand: &'static str,
}

impl SiteMetadata {
    /// Title for a sub-page, e.g. `Blog | Wanda`
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} | {}", self.brand)
    }
}

pub const METADATA: SiteMetadata = SiteMetadata {
    title: "Wanda - Inteligência de Dados em Linguagem Natural",
    description: "Transforme suas perguntas em insights com Wanda. Consulte seus bancos de dados \
                  usando linguagem natural e obtenha respostas instantâneas.",
    lang: "pt-BR",
    brand: BRAND,
};

/// Company name used in the footer and page titles
pub const BRAND: &str = "Wanda";

pub const FOOTER_BLURB: &str = "Desvende o poder dos seus dados com linguagem natural. Consulte \
                                seus bancos de dados e obtenha insights instantâneos.";

pub const CONTACT_EMAIL: &str = "contato@wanda.ai";

/// Calendar year on the local clock
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Footer copyright line for `year`
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND}. Todos os direitos reservados.")
}
