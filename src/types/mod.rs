pub mod corner;
pub mod mesh;

pub use corner::Corner;
pub use mesh::{IndexData, Mesh};
