pub use codec::*;
pub use error::*;
pub use game::*;
pub use messages::*;
pub use service::*;
pub use store::*;

mod codec;
mod error;
mod game;
mod messages;
mod service;
mod store;
