//! Assistant gateway adapter: wire types and the reqwest client

pub mod http;
pub mod protocol;
