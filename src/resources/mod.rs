//! Resource data shared by the draw routines.

pub mod mesh;

pub use mesh::MeshData;
