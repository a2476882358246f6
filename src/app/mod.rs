pub mod headless;
pub mod session;

pub use headless::{run_headless, HeadlessReport};
pub use session::{FinishReason, Session, SessionState};
