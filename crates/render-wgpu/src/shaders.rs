use tumble_render::expr::{float, normalize, var};

/// WGSL for instanced boxes shaded by the normal material.
///
/// `$NORMAL_COLOR` is replaced by the fragment colour expression.
const NORMAL_MATERIAL_TEMPLATE: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    view: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) view_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.view_normal = (uniforms.view * model * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>($NORMAL_COLOR, 1.0);
}
"#;

/// View-space normal remapped from [-1, 1] to [0, 1].
pub fn normal_color_expr() -> String {
    normalize(var("in.view_normal"))
        .mul(float(0.5))
        .add(float(0.5))
        .to_wgsl()
}

pub fn normal_material_shader() -> String {
    NORMAL_MATERIAL_TEMPLATE.replace("$NORMAL_COLOR", &normal_color_expr())
}
