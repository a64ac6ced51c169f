pub mod greet;
pub mod list;
pub mod verify;

pub use greet::{execute_greet, greet_repeated, write_repeated};
pub use list::execute_list;
pub use verify::{execute_verify, verify_files, VerifyFailure};
