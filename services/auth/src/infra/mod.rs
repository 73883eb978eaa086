pub mod cache;
pub mod crypto;
pub mod db;
