//! GLSL sources shared by the built-in draw routines.

/// Per-vertex diffuse lighting in eye space.
pub const LIGHTING_VERTEX: &str = r"
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
uniform mat3 normalMatrix;
uniform vec4 u_Color;
uniform vec4 lightPosition;

attribute vec4 a_Position;
attribute vec3 a_Normal;

varying vec4 color;

void main()
{
  float ambientFactor = 0.3;
  vec3 lightVector = normalize((view * lightPosition - view * model * a_Position).xyz);
  vec3 normal = normalize(normalMatrix * a_Normal);
  float diffuseFactor = max(0.0, dot(lightVector, normal));
  color = u_Color * diffuseFactor + u_Color * ambientFactor;
  color.a = 1.0;
  gl_Position = projection * view * model * a_Position;
}
";

pub const LIGHTING_FRAGMENT: &str = r"
precision mediump float;
varying vec4 color;
void main()
{
  gl_FragColor = color;
}
";

/// Unlit 2D geometry under a single transform.
pub const FLAT_VERTEX: &str = r"
uniform mat4 transform;
attribute vec4 a_Position;
void main()
{
  gl_Position = transform * a_Position;
}
";

pub const FLAT_FRAGMENT: &str = r"
precision mediump float;
uniform vec4 color;
void main()
{
  gl_FragColor = color;
}
";

/// 2D geometry offset by two scalar uniforms, no matrices involved.
pub const SHIFT_VERTEX: &str = r"
uniform float shiftx;
uniform float shifty;
attribute vec4 a_Position;
void main()
{
  gl_Position = vec4(a_Position.x + shiftx, a_Position.y + shifty, a_Position.z, 1.0);
}
";
