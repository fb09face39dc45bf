//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding use cases and the
//! collaborators around them: the identity service, the profile document
//! store, client-side navigation, the notice surface and session storage.
//! Implementations live in `kb-infra` or in the host shell.

mod clock;
pub mod errors;
pub mod identity;
pub mod navigator;
pub mod notice;
pub mod profile;
pub mod progress_session;

pub use clock::*;
pub use errors::ServiceError;
pub use identity::IdentityPort;
pub use navigator::NavigatorPort;
pub use notice::{Notice, NoticeKind, NoticePort};
pub use profile::ProfileRepositoryPort;
pub use progress_session::ProgressSessionPort;
