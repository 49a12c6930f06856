//! Static Content Catalog
//!
//! Every list the home page renders, defined once. Sections map these
//! arrays one card per entry, so the card count of a section is always the
//! length of its array.

use std::collections::HashSet;

use crate::contact::CONTACT_FIELDS;
use crate::error::{Result, SiteError};
use crate::model::{Feature, Icon, Plan, SectionCopy, SectionId, Testimonial};
use crate::nav::{FOOTER_LINKS, HEADER_LINKS, LOGIN_LINK, LinkTarget, NavLink};

/// Home page composition order
pub static HOME_SECTIONS: [SectionId; 5] = [
    SectionId::Hero,
    SectionId::Features,
    SectionId::Testimonials,
    SectionId::Pricing,
    SectionId::Contact,
];

pub const HERO: SectionCopy = SectionCopy {
    heading: "Desvende o Poder dos Seus Dados com Linguagem Natural",
    blurb: "Faça perguntas em português e receba consultas SQL, tabelas e gráficos \
            direto dos seus bancos de dados, sem escrever uma linha de código.",
};

pub static HERO_CTA: NavLink = NavLink::new("Comece seu Teste Gratuito", "#pricing");

pub const HERO_IMAGE_SRC: &str =
    "https://placehold.co/600x400/1e293b/94a3b8?text=Visualiza%C3%A7%C3%A3o+de+Dados";

pub const HERO_IMAGE_ALT: &str = "DataQuery Platform Illustration";

pub const FEATURES_COPY: SectionCopy = SectionCopy {
    heading: "Principais Funcionalidades",
    blurb: "DataQuery oferece um conjunto completo de ferramentas para transformar a maneira \
            como você interage e extrai valor dos seus dados.",
};

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::MessageSquareText,
        title: "Consultas em Linguagem Natural",
        description: "Transforme perguntas complexas em consultas SQL precisas sem escrever uma \
                      única linha de código. Intuitivo e poderoso.",
    },
    Feature {
        icon: Icon::BarChart3,
        title: "Visualizações Dinâmicas",
        description: "Gere gráficos e tabelas interativas automaticamente para entender seus dados \
                      de forma visual e clara. Crie dashboards personalizados.",
    },
    Feature {
        icon: Icon::Share2,
        title: "Integração e Compartilhamento",
        description: "Conecte-se facilmente aos seus bancos de dados e compartilhe insights com sua \
                      equipe através de relatórios e dashboards exportáveis.",
    },
    Feature {
        icon: Icon::ShieldCheck,
        title: "Segurança e Conformidade",
        description: "Seus dados protegidos com as melhores práticas de segurança e em conformidade \
                      com a LGPD, garantindo tranquilidade.",
    },
];

pub const PRICING_COPY: SectionCopy = SectionCopy {
    heading: "Planos Flexíveis para Todos os Tamanhos",
    blurb: "Escolha o plano DataQuery que melhor se adapta às suas necessidades e comece a \
            transformar seus dados em decisões hoje mesmo.",
};

pub static PLANS: [Plan; 3] = [
    Plan {
        name: "Básico",
        price: "R$199",
        period: "/mês",
        features: &[
            "Até 3 usuários",
            "100 consultas/mês",
            "1 conexão de banco de dados",
            "Suporte por e-mail",
        ],
        cta_text: "Assinar Plano Básico",
        cta_href: "/signup",
        highlighted: false,
    },
    Plan {
        name: "Profissional",
        price: "R$499",
        period: "/mês",
        features: &[
            "Até 10 usuários",
            "500 consultas/mês",
            "3 conexões de banco de dados",
            "Suporte prioritário",
            "Exportação em múltiplos formatos",
        ],
        cta_text: "Assinar Plano Profissional",
        cta_href: "/signup",
        highlighted: true,
    },
    Plan {
        name: "Empresarial",
        price: "R$999",
        period: "/mês",
        features: &[
            "Usuários ilimitados",
            "Consultas ilimitadas",
            "Conexões ilimitadas",
            "Suporte 24/7",
            "API avançada",
            "Treinamento personalizado",
        ],
        cta_text: "Assinar Plano Empresarial",
        cta_href: "/signup",
        highlighted: false,
    },
];

pub const TESTIMONIALS_COPY: SectionCopy = SectionCopy {
    heading: "O Que Nossos Clientes Dizem",
    blurb: "Descubra como o DataQuery está ajudando empresas a transformarem dados em decisões \
            estratégicas com facilidade e precisão.",
};

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "DataQuery revolucionou a maneira como nossa equipe de marketing acessa e analisa \
                dados de campanha. A interface de linguagem natural é incrivelmente intuitiva!",
        author: "Fernanda Costa",
        role: "Gerente de Marketing, AlphaTech",
    },
    Testimonial {
        quote: "Nunca pensei que seria tão fácil obter insights complexos do nosso banco de dados. \
                O SQL gerado é preciso e as visualizações são instantâneas. Recomendo!",
        author: "Ricardo Alves",
        role: "Analista de BI, BetaSolutions",
    },
    Testimonial {
        quote: "A capacidade de criar dashboards personalizados rapidamente e o suporte para \
                múltiplas fontes de dados tornaram o DataQuery uma ferramenta indispensável para \
                nossa operação.",
        author: "Juliana Pereira",
        role: "Diretora de Operações, GammaCorp",
    },
];

pub const CONTACT_COPY: SectionCopy = SectionCopy {
    heading: "Entre em Contato",
    blurb: "Tem alguma dúvida ou quer saber mais sobre como o DataQuery pode ajudar sua empresa? \
            Nossa equipe está pronta para te atender.",
};

/// Copy block for a home section
pub fn section_copy(section: SectionId) -> SectionCopy {
    match section {
        SectionId::Hero => HERO,
        SectionId::Features => FEATURES_COPY,
        SectionId::Testimonials => TESTIMONIALS_COPY,
        SectionId::Pricing => PRICING_COPY,
        SectionId::Contact => CONTACT_COPY,
    }
}

/// Number of repeated items (cards or form fields) a section renders
pub fn item_count(section: SectionId) -> usize {
    match section {
        SectionId::Hero => 0,
        SectionId::Features => FEATURES.len(),
        SectionId::Testimonials => TESTIMONIALS.len(),
        SectionId::Pricing => PLANS.len(),
        SectionId::Contact => CONTACT_FIELDS.len(),
    }
}

/// The plan rendered with the highlighted variant, if any
pub fn highlighted_plan() -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.highlighted)
}

/// Check the shipped catalog
pub fn validate() -> Result<()> {
    validate_catalog(
        &FEATURES,
        &PLANS,
        &TESTIMONIALS,
        &HOME_SECTIONS,
        HEADER_LINKS.iter().chain([&LOGIN_LINK, &HERO_CTA]).chain(FOOTER_LINKS.iter()),
    )
}

/// Check a set of content lists for authoring mistakes
///
/// Fails on the first problem found: an empty list, a record with blank
/// text, more than one highlighted plan, a repeated section anchor or a
/// `#fragment` link with no matching section.
pub fn validate_catalog<'a>(
    features: &[Feature],
    plans: &[Plan],
    testimonials: &[Testimonial],
    sections: &[SectionId],
    links: impl IntoIterator<Item = &'a NavLink>,
) -> Result<()> {
    if features.is_empty() {
        return Err(SiteError::EmptyCatalog("features"));
    }
    if plans.is_empty() {
        return Err(SiteError::EmptyCatalog("plans"));
    }
    if testimonials.is_empty() {
        return Err(SiteError::EmptyCatalog("testimonials"));
    }
    if sections.is_empty() {
        return Err(SiteError::EmptyCatalog("sections"));
    }

    for (index, feature) in features.iter().enumerate() {
        require_text("features", index, "title", feature.title)?;
        require_text("features", index, "description", feature.description)?;
    }
    for (index, plan) in plans.iter().enumerate() {
        require_text("plans", index, "name", plan.name)?;
        require_text("plans", index, "price", plan.price)?;
        require_text("plans", index, "cta_text", plan.cta_text)?;
        if plan.features.is_empty() {
            return Err(SiteError::BlankField {
                catalog: "plans",
                index,
                field: "features",
            });
        }
    }
    for (index, testimonial) in testimonials.iter().enumerate() {
        require_text("testimonials", index, "quote", testimonial.quote)?;
        require_text("testimonials", index, "author", testimonial.author)?;
        require_text("testimonials", index, "role", testimonial.role)?;
    }

    let highlighted: Vec<_> = plans.iter().filter(|p| p.highlighted).map(|p| p.name).collect();
    if highlighted.len() > 1 {
        return Err(SiteError::MultipleHighlightedPlans(highlighted));
    }

    let mut anchors = HashSet::new();
    for anchor in sections.iter().filter_map(SectionId::anchor) {
        if !anchors.insert(anchor) {
            return Err(SiteError::DuplicateAnchor(anchor));
        }
    }

    for link in links {
        if let LinkTarget::Anchor(fragment) = link.target() {
            if !anchors.contains(fragment) {
                return Err(SiteError::DanglingAnchor {
                    label: link.label,
                    href: link.href,
                });
            }
        }
    }

    tracing::debug!(
        features = features.len(),
        plans = plans.len(),
        testimonials = testimonials.len(),
        sections = sections.len(),
        "catalog validated"
    );

    Ok(())
}

fn require_text(
    catalog: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::BlankField {
            catalog,
            index,
            field,
        });
    }
    Ok(())
}
