/// WGSL Phong pass for the ship hull: directional light, gold-like material.
pub const PHONG_SHADER: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
    model: mat4x4<f32>,
    viewer_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.mvp * vec4<f32>(vertex.position, 1.0);
    out.world_pos = (uniforms.model * vec4<f32>(vertex.position, 1.0)).xyz;
    out.world_normal = normalize((uniforms.model * vec4<f32>(vertex.normal, 0.0)).xyz);
    return out;
}

// Directional light shining from the viewer side.
const LIGHT_DIR: vec3<f32> = vec3<f32>(0.0, 0.0, -1.0);
const LIGHT_DIFFUSE: vec3<f32> = vec3<f32>(1.0, 1.0, 1.0);
const LIGHT_SPECULAR: vec3<f32> = vec3<f32>(0.8, 0.8, 0.8);

// Gold-like material.
const MATERIAL_AMBIENT: vec3<f32> = vec3<f32>(0.274725, 0.1995, 0.0745);
const MATERIAL_DIFFUSE: vec3<f32> = vec3<f32>(0.75164, 0.60648, 0.22648);
const MATERIAL_SPECULAR: vec3<f32> = vec3<f32>(0.628281, 0.555802, 0.366065);
const SHININESS: f32 = 51.2;

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let l = normalize(LIGHT_DIR);
    let v = normalize(uniforms.viewer_pos.xyz - in.world_pos);
    let diffuse = max(dot(n, l), 0.0);
    let r = reflect(-l, n);
    let specular = pow(max(dot(v, r), 0.0), SHININESS);
    let color = MATERIAL_AMBIENT
        + MATERIAL_DIFFUSE * diffuse * LIGHT_DIFFUSE
        + MATERIAL_SPECULAR * specular * LIGHT_SPECULAR;
    return vec4<f32>(color, 1.0);
}
"#;

/// Unlit fallback pass: flat material color, no lighting.
pub const FLAT_SHADER: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
    model: mat4x4<f32>,
    viewer_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.mvp * vec4<f32>(vertex.position, 1.0);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(0.75164, 0.60648, 0.22648, 1.0);
}
"#;
