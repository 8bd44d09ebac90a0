//! OS integration: tool discovery and the default-application opener.

mod detect;
mod open;

pub use detect::{RESOLVER_PROGRAM, TRANSCODER_PROGRAM, ToolLocations, detect_tools};
pub use open::{OpenError, open_in_default_app};
