mod health;
mod redirect;
mod short_link;

pub use health::health_handler;
pub use redirect::{missing_code_handler, redirect_handler};
pub use short_link::{create_short_link_handler, exists_handler, get_short_link_handler};
