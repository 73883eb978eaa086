pub mod outbox_events;
pub mod users;
