pub mod interpolation;
pub mod vector3d;
