mod contact;
mod health_check;

pub use contact::{json_config, submit_contact};
pub use health_check::health_check;
