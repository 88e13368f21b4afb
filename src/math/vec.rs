use std::fmt;
use std::ops::{Index, IndexMut};

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3(pub [f32; 3]);

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    pub const fn zero() -> Self {
        Self([0.0; 3])
    }

    pub fn x(self) -> f32 {
        self.0[0]
    }

    pub fn y(self) -> f32 {
        self.0[1]
    }

    pub fn z(self) -> f32 {
        self.0[2]
    }
}

/// Homogeneous coordinate. `w = 1` marks a point and `w = 0` a direction; the
/// type itself does not enforce either.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4(pub [f32; 4]);

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    pub const fn zero() -> Self {
        Self([0.0; 4])
    }

    pub fn point(v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z(), 1.0)
    }

    pub fn direction(v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z(), 0.0)
    }

    pub fn x(self) -> f32 {
        self.0[0]
    }

    pub fn y(self) -> f32 {
        self.0[1]
    }

    pub fn z(self) -> f32 {
        self.0[2]
    }

    pub fn w(self) -> f32 {
        self.0[3]
    }

    /// Perspective divide. Directions (`w == 0`) come back unscaled.
    pub fn to_vec3(self) -> Vec3 {
        let w = self.w();
        if w != 0.0 {
            Vec3::new(self.x() / w, self.y() / w, self.z() / w)
        } else {
            Vec3::new(self.x(), self.y(), self.z())
        }
    }
}

macro_rules! impl_array_vec {
    ($ty:ident, $n:literal) => {
        impl Index<usize> for $ty {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                &self.0[index]
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.0[index]
            }
        }

        impl From<[f32; $n]> for $ty {
            fn from(data: [f32; $n]) -> Self {
                Self(data)
            }
        }

        impl From<$ty> for [f32; $n] {
            fn from(v: $ty) -> Self {
                v.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
                write!(out, "(")?;
                for (i, value) in self.0.iter().enumerate() {
                    if i > 0 {
                        write!(out, ",")?;
                    }
                    write!(out, " {}", value)?;
                }
                write!(out, " )")
            }
        }
    };
}

impl_array_vec!(Vec3, 3);
impl_array_vec!(Vec4, 4);
