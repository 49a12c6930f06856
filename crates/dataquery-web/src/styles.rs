//! Tailwind class sets shared by several components

pub const CONTAINER: &str = "container mx-auto px-4";
pub const SECTION_DARK: &str = "py-16 bg-slate-900";
pub const SECTION_HEADING: &str = "text-3xl font-bold text-center text-white mb-4";
pub const SECTION_BLURB: &str = "text-center text-slate-400 mb-12 max-w-2xl mx-auto";

pub const NAV_LINK: &str = "hover:text-blue-300";
pub const NAV_LOGIN: &str = "bg-blue-500 hover:bg-blue-600 px-4 py-2 rounded-md text-sm font-medium";
pub const MOBILE_LINK: &str = "block py-2 px-4 text-sm hover:bg-slate-700 rounded";
pub const MOBILE_LOGIN: &str =
    "block py-2 px-4 text-sm bg-blue-500 hover:bg-blue-600 rounded mt-2 mb-2 font-medium";

pub const FORM_LABEL: &str = "block text-slate-300 text-sm font-semibold mb-2 text-left";
pub const FORM_CONTROL: &str = "w-full px-4 py-2 bg-slate-700 border border-slate-600 rounded-md \
                                text-white focus:ring-blue-500 focus:border-blue-500";

/// Visual variant of a pricing card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanVariant {
    Highlighted,
    Standard,
}

impl PlanVariant {
    pub fn of(highlighted: bool) -> Self {
        if highlighted {
            PlanVariant::Highlighted
        } else {
            PlanVariant::Standard
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanVariant::Highlighted => "highlighted",
            PlanVariant::Standard => "standard",
        }
    }

    pub fn card(self) -> &'static str {
        match self {
            PlanVariant::Highlighted => {
                "border border-blue-500 bg-slate-800 p-8 rounded-lg shadow-xl flex flex-col"
            }
            PlanVariant::Standard => {
                "border border-slate-700 bg-slate-800/50 p-8 rounded-lg shadow-xl flex flex-col"
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanVariant::Highlighted => "text-2xl font-bold text-blue-400 mb-4",
            PlanVariant::Standard => "text-2xl font-bold text-white mb-4",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            PlanVariant::Highlighted => "text-4xl font-extrabold text-white mb-6",
            PlanVariant::Standard => "text-4xl font-extrabold text-slate-300 mb-6",
        }
    }

    pub fn check(self) -> &'static str {
        match self {
            PlanVariant::Highlighted => "w-5 h-5 text-blue-500 mr-2",
            PlanVariant::Standard => "w-5 h-5 text-teal-500 mr-2",
        }
    }

    pub fn cta(self) -> &'static str {
        match self {
            PlanVariant::Highlighted => {
                "w-full text-center font-semibold py-3 rounded-md transition duration-300 \
                 bg-blue-500 hover:bg-blue-600 text-white shadow-lg"
            }
            PlanVariant::Standard => {
                "w-full text-center font-semibold py-3 rounded-md transition duration-300 \
                 bg-slate-700 hover:bg-slate-600 text-slate-200"
            }
        }
    }
}
