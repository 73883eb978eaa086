pub mod claim;
pub mod found_item;
pub mod notification;
pub mod ranking;
pub mod resolution;
mod validate;
