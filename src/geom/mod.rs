mod centroid;
mod crs;
mod reproject;

pub use centroid::{ring_bounds, ring_centroid};
pub use crs::Crs;
pub use reproject::{ReprojectError, Reprojector};
