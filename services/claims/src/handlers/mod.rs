pub mod claim;
pub mod dto;
pub mod found_item;
pub mod notification;
