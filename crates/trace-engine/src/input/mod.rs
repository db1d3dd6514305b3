pub mod adapter;
pub mod event;
