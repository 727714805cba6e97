mod contact_handler;
mod errors;
mod types;

pub use contact_handler::{json_config, submit_contact};
