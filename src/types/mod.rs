// ABOUTME: Payload shapes returned by the construction backend's REST API
// ABOUTME: Every type derives Default so views can fall back to an empty value

pub mod agents;
pub mod brief;
pub mod claims;
pub mod commissioning;
pub mod compliance;
pub mod environmental;
pub mod financial;
pub mod risk;
pub mod safety;
pub mod schedule;
pub mod site_logistics;
pub mod supply_chain;
pub mod workforce;

pub use agents::*;
pub use brief::*;
pub use claims::*;
pub use commissioning::*;
pub use compliance::*;
pub use environmental::*;
pub use financial::*;
pub use risk::*;
pub use safety::*;
pub use schedule::*;
pub use site_logistics::*;
pub use supply_chain::*;
pub use workforce::*;
