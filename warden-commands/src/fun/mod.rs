pub mod chance;
pub mod countdown;
pub mod math;
pub mod poll;
pub mod server;
pub mod text;
