pub mod settings;
pub use settings::*;

pub mod wire;
pub use wire::*;

pub mod client_error;
pub use client_error::*;

pub mod rest_client;
pub use rest_client::*;
