pub mod claims;
pub mod found_items;
pub mod notifications;
