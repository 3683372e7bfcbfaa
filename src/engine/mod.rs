pub mod message;
pub mod observer;
pub mod validate;
