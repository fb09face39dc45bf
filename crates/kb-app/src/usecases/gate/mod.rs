//! Route gate use cases
//!
//! [`RouteGate`] fetches identity and profile, asks the pure decision
//! functions of `kb_core::gate` what to do, and performs the navigation.
//! [`ProtectedPage`] is the render-side wrapper: it shows a blocking loader
//! until a decision arrives and only then produces the page content.

mod route_gate;
mod view;

pub use route_gate::RouteGate;
pub use view::{GateView, ProtectedPage};
