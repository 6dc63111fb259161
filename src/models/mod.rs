pub mod coordinates;
pub mod route;

pub use coordinates::Coordinates;
pub use route::{AddressedPoint, RouteRequest, RouteResult, TransportMode};
