pub mod fallback_table;
pub mod geocoder;
pub mod google_geocoding;
pub mod map_export;
pub mod route_generator;
pub mod suggestions;
