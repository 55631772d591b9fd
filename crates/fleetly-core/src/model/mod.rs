// Domain model for the report engine.

pub mod geo;
pub mod record;
pub mod value;

pub use geo::Coordinate;
pub use record::SemiStructured;
pub use value::FieldValue;
