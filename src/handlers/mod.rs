pub mod health_handlers;
pub mod link_handlers;
pub mod page_handlers;
pub mod redirect_handlers;
