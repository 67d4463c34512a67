pub mod linear;
pub mod vector;

pub use vector::{
    Component, Vector3, bounding_radius, bounding_radius_from, centroid, face_normal, sum,
};
