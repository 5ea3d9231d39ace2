pub mod accounting;
pub mod authentication;
pub mod authorization;
pub mod console;
pub mod shared;
pub mod show;
