//! Host-side adapters used by the command line front end.

mod identity;
mod navigator;
mod notice;

pub use identity::StaticIdentity;
pub use navigator::{Navigation, NavigationKind, RecordingNavigator};
pub use notice::TracingNoticeSink;
