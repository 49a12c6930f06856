//! Home page sections
//!
//! Each section reads its own catalog list and renders one card per entry.

mod contact;
mod features;
mod hero;
mod pricing;
mod testimonials;

pub use contact::ContactSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use pricing::PricingSection;
pub use testimonials::TestimonialsSection;
