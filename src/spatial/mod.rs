//! Spatial - terrain occupancy and the queries entities make against it

pub mod terrain;

pub use terrain::TerrainMap;
