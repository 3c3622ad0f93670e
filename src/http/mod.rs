pub mod router;
pub mod server;

pub use router::{handle, ApiResponse};
pub use server::{ActivityServer, ShutdownHandle};
