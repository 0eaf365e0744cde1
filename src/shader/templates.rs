//! GLSL source fragments used by the footer

use super::bucket::Bucket;

/// Converts an HSV triple (each 0..1) to RGBA; alpha is the largest channel
pub const HSV_HELPER: &str = "
vec4 hsv(float h, float s, float v) {
  float k5 = mod(5.0+6.0*h, 6.0);
  float k3 = mod(3.0+6.0*h, 6.0);
  float k1 = mod(1.0+6.0*h, 6.0);
  float f5 = v - v*s*max(min(k5,min(4.0-k5,1.0)),0.0);
  float f3 = v - v*s*max(min(k3,min(4.0-k3,1.0)),0.0);
  float f1 = v - v*s*max(min(k1,min(4.0-k1,1.0)),0.0);
  return vec4(f5,f3,f1,max(f5,max(f3,f1)));
}
";

/// Converts an HSL triple (each 0..1) to RGBA; alpha is the largest channel
pub const HSL_HELPER: &str = "
vec4 hsl(float h, float s, float l) {
  float a = s*min(l,1.0-l);
  float k0 = mod(0.0+12.0*h, 12.0);
  float k8 = mod(8.0+12.0*h, 12.0);
  float k4 = mod(4.0+12.0*h, 12.0);
  float f0 = l - a*max(min(k0-3.0,min(9.0-k0,1.0)),-1.0);
  float f8 = l - a*max(min(k8-3.0,min(9.0-k8,1.0)),-1.0);
  float f4 = l - a*max(min(k4-3.0,min(9.0-k4,1.0)),-1.0);
  return vec4(f0,f8,f4,max(f0,max(f8,f4)));
}
";

const CLIP_TO_BOUNDS: &str = "
void main() {
  if (any(lessThan(v_xyz.xyz,u_ll))) {
    out_FragColor = vec4(0);
    return;
  }
  if (any(greaterThan(v_xyz.xyz,u_ur))) {
    out_FragColor = vec4(0);
    return;
  }
";

/// The `main()` function for `bucket`, writing `color_mixer` to the fragment
pub fn main_function(bucket: Bucket, color_mixer: &str) -> String {
    let mut out = String::with_capacity(CLIP_TO_BOUNDS.len() + color_mixer.len() + 128);
    out.push_str(CLIP_TO_BOUNDS);

    let mut args = Vec::new();
    for (ty, name) in bucket.variables() {
        out.push_str(&format!("  {} {};\n", ty, name));
        args.push(*name);
    }
    out.push_str(&format!(
        "  {}({}, v_xyz.xyz);\n",
        bucket.entry_point(),
        args.join(", ")
    ));
    out.push_str(&format!("  out_FragColor = {};\n}}\n", color_mixer));
    out
}
