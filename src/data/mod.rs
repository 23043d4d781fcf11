// JSON request / payload files consumed and produced by the CLI
pub mod request_file;

pub use request_file::{load_request, save_payload, write_payload};
