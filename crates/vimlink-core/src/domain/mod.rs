//! Domain model types.
//!
//! Plain data with no infrastructure dependencies.

mod installation;
mod request;

pub use installation::Installation;
pub use request::OpenRequest;
