// Landing page sections

mod about;
mod contact;
mod details;
mod fleet;
mod footer;
mod hero;
mod nav;

pub use about::About;
pub use contact::Contact;
pub use details::DetailsDialog;
pub use fleet::Catalog;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
