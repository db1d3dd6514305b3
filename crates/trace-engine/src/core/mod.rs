pub mod completion;
pub mod layout;
pub mod session;
pub mod time;
