//! Identity and session binding for hexbridge.
//!
//! This crate answers "whose board and messages are these?" for a web
//! request:
//!
//! 1. **Sessions**: an explicit [`Session`] context per browser session,
//!    carrying the signed-in [`User`] (if any)
//! 2. **Identity registry**: [`IdentityRegistry`] maps opaque
//!    [`IdentityToken`]s to player handles, process-wide
//! 3. **Binding**: [`SessionBinding`] ties a user to at most one player by
//!    minting a token and registering it
//!
//! # How it fits in the stack
//!
//! ```text
//! Page layer (above)   ← passes a Session into every call
//!     ↕
//! Session layer (this crate)  ← Session → User → token → player
//!     ↕
//! Engine (below)       ← owns the players the registry points at
//! ```

mod binding;
mod error;
mod registry;
mod session;

pub use binding::SessionBinding;
pub use error::SessionError;
pub use registry::IdentityRegistry;
pub use session::{IdentityToken, Session, SessionId, User};
