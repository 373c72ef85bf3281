pub mod document;
pub mod event;
pub mod event_type;
pub mod tab;
