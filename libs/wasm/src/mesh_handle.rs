//! # Mesh Handle
//!
//! WASM-friendly wrapper for lens mesh data that can be transferred to JavaScript.

use lens_mesh::LensMesh;
use wasm_bindgen::prelude::*;

/// A handle to lens mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_lens_mesh(outline, 65, 1.0, -4, 1.6, 50);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LensMeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Option<Vec<f32>>,
    vertex_count: u32,
    triangle_count: u32,
    rings: u32,
    points_per_ring: u32,
    front_radius_mm: f64,
    back_radius_mm: f64,
}

#[wasm_bindgen]
impl LensMeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Rings emitted, center ring included.
    #[wasm_bindgen(getter)]
    pub fn rings(&self) -> u32 {
        self.rings
    }

    #[wasm_bindgen(getter)]
    pub fn points_per_ring(&self) -> u32 {
        self.points_per_ring
    }

    #[wasm_bindgen(getter)]
    pub fn front_radius_mm(&self) -> f64 {
        self.front_radius_mm
    }

    #[wasm_bindgen(getter)]
    pub fn back_radius_mm(&self) -> f64 {
        self.back_radius_mm
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array, if available.
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.normals
            .as_ref()
            .map(|n| js_sys::Float32Array::from(&n[..]))
    }
}

impl LensMeshHandle {
    /// Flattens a lens mesh into GPU buffers.
    pub fn from_lens_mesh(lens: &LensMesh) -> Self {
        let mesh = lens.mesh();
        let surfaces = lens.surfaces();
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
            rings: lens.rings() as u32,
            points_per_ring: lens.points_per_ring() as u32,
            front_radius_mm: surfaces.front_radius_mm,
            back_radius_mm: surfaces.back_radius_mm,
        }
    }

    /// Host-side view of the vertex buffer.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Host-side view of the index buffer.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn normal_buffer(&self) -> Option<&[f32]> {
        self.normals.as_deref()
    }
}
