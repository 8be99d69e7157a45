pub mod session;

pub use session::{ActiveGame, Session};
