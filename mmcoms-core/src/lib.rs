pub mod error;
pub mod net;
pub mod payload;
pub mod response;

pub use error::{ApiError, Error, Result};
pub use payload::{MessagePayload, MessageType};
