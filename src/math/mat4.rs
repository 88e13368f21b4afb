use std::fmt;

use crate::math::{Vec3, Vec4};

/// Flat index of logical (`row`, `col`) in column-major storage.
///
/// This is the layout OpenGL expects for `mat4` uniforms, and the one every
/// `Mat4` operation uses.
#[inline]
pub const fn col_major_index(row: usize, col: usize) -> usize {
    4 * col + row
}

/// Flat index of logical (`row`, `col`) in row-major storage.
///
/// Only for reading buffers laid out row by row. Never mix it with
/// [`col_major_index`] over the same buffer.
#[inline]
pub const fn row_major_index(row: usize, col: usize) -> usize {
    col + 4 * row
}

/// 4x4 matrix stored column-major: logical (`r`, `c`) lives at `data[4 * c + r]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    /// Wraps a flat column-major buffer as is.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    /// Builds a matrix from a row-major flat buffer, e.g. a literal written the
    /// way the matrix reads on paper.
    pub fn from_row_major(rows: [f32; 16]) -> Self {
        let mut result = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                result.set(r, c, rows[row_major_index(r, c)]);
            }
        }
        result
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col_major_index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[col_major_index(row, col)] = value;
    }

    /// Adds `offset` to the translation column (flat 12, 13, 14).
    ///
    /// Works on a copy; repeated calls accumulate.
    pub fn translate(mut self, offset: Vec3) -> Self {
        self.data[12] += offset[0];
        self.data[13] += offset[1];
        self.data[14] += offset[2];
        self
    }

    pub fn rotation_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity();
        m.set(1, 1, cos);
        m.set(1, 2, -sin);
        m.set(2, 1, sin);
        m.set(2, 2, cos);
        m
    }

    pub fn rotation_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity();
        m.set(0, 0, cos);
        m.set(0, 2, sin);
        m.set(2, 0, -sin);
        m.set(2, 2, cos);
        m
    }

    pub fn rotation_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity();
        m.set(0, 0, cos);
        m.set(0, 1, -sin);
        m.set(1, 0, sin);
        m.set(1, 1, cos);
        m
    }

    /// Matrix product `self · other`.
    pub fn times(self, other: Self) -> Self {
        let mut result = Self::zero();

        for r in 0..4 {
            for c in 0..4 {
                for i in 0..4 {
                    result.data[col_major_index(r, c)] +=
                        self.data[col_major_index(r, i)] * other.data[col_major_index(i, c)];
                }
            }
        }

        result
    }

    /// Matrix-vector product `self · v`.
    pub fn mulv(self, v: Vec4) -> Vec4 {
        let mut result = Vec4::zero();

        for c in 0..4 {
            for r in 0..4 {
                result[r] += self.data[col_major_index(r, c)] * v[c];
            }
        }

        result
    }

    pub fn transpose(self) -> Self {
        let mut result = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                result.set(r, c, self.get(c, r));
            }
        }
        result
    }

    pub fn column(&self, index: usize) -> [f32; 4] {
        let start = col_major_index(0, index);
        [
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            self.data[start + 3],
        ]
    }

    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Flat column-major buffer, ready for an untransposed `mat4` upload.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.times(other)
    }
}

impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        self.mulv(v)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(mat: Mat4) -> Self {
        mat.data
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Self { data }
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..4 {
            writeln!(
                out,
                "[ {:>10.5} {:>10.5} {:>10.5} {:>10.5} ]",
                self.get(r, 0),
                self.get(r, 1),
                self.get(r, 2),
                self.get(r, 3),
            )?;
        }
        Ok(())
    }
}

unsafe impl bytemuck::Pod for Mat4 {}
unsafe impl bytemuck::Zeroable for Mat4 {}
