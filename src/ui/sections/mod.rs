//! Read-only display sections
//!
//! Every section reads the content store through the app context; none of
//! them mutate it.

mod about;
mod contact;
mod hero;
mod projects;
mod services;
mod skills;
mod socials;
mod testimonials;
mod ventures;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use services::Services;
pub use skills::Skills;
pub use socials::Socials;
pub use testimonials::Testimonials;
pub use ventures::Ventures;
