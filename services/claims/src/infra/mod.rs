pub mod db;
pub mod dispatcher;
pub mod image_store;
pub mod scorer;
