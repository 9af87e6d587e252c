// UV-sphere mesh for the globe. No wgpu types here so host tests can include it.

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Build a sphere with `lat_segments` rings and `lon_segments` slices.
///
/// The seam column is duplicated so UVs run cleanly from 0 to 1. Triangles
/// are counter-clockwise seen from outside.
pub fn build_globe_mesh(
    lat_segments: u32,
    lon_segments: u32,
    radius: f32,
) -> (Vec<GlobeVertex>, Vec<u32>) {
    let lat = lat_segments.max(2);
    let lon = lon_segments.max(3);
    let mut vertices = Vec::with_capacity(((lat + 1) * (lon + 1)) as usize);
    for i in 0..=lat {
        let v = i as f32 / lat as f32;
        let theta = v * std::f32::consts::PI; // 0 at north pole
        let (sin_t, cos_t) = theta.sin_cos();
        for j in 0..=lon {
            let u = j as f32 / lon as f32;
            let phi = u * std::f32::consts::TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            let n = [sin_t * sin_p, cos_t, sin_t * cos_p];
            vertices.push(GlobeVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
                uv: [u, v],
            });
        }
    }
    let row = lon + 1;
    let mut indices = Vec::with_capacity((lat * lon * 6) as usize);
    for i in 0..lat {
        for j in 0..lon {
            let a = i * row + j;
            let b = a + row;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}
