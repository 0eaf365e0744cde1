//! Shared fixtures for integration tests

#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// The editor's startup document: hand-written header, one material
pub const SPHERE: &str = r#"/*{
  irmf: "1.0",
  materials: ["PLA"],
  max: [5,5,5],
  min: [-5,-5,-5],
  units: "mm",
}*/

float sphere(in vec3 pos, in float radius, in vec3 xyz) {
  xyz -= pos;  // Move sphere into place.
  float r = length(xyz);
  return r <= radius ? 1.0 : 0.0;
}

void mainModel4(out vec4 materials, in vec3 xyz ) {
  const float radius = 6.0;
  materials[0] = 1.0 - sphere(vec3(0), radius, xyz);  // 1.0 represents the cube.
}
"#;

/// Body used by generated documents
pub const BODY: &str = "void mainModel4(out vec4 m, in vec3 xyz) {\n  m = vec4(1);\n}\n";

/// A valid strict-JSON header with the given material names
pub fn header(materials: &[&str]) -> String {
    let names: Vec<String> = materials.iter().map(|m| format!("{:?}", m)).collect();
    format!(
        "/*{{\n  \"irmf\": \"1.0\",\n  \"materials\": [{}],\n  \"max\": [1,1,1],\n  \"min\": [-1,-1,-1],\n  \"units\": \"mm\"\n}}*/\n",
        names.join(",")
    )
}

/// A valid document with the given material names and [`BODY`]
pub fn document(materials: &[&str]) -> String {
    header(materials) + BODY
}

/// A valid document whose body is stored with `encoding`
pub fn encoded_document(encoding: &str, body: &[u8]) -> Vec<u8> {
    let mut src = format!(
        "/*{{\n  \"irmf\": \"1.0\",\n  \"materials\": [\"PLA\"],\n  \"max\": [1,1,1],\n  \"min\": [-1,-1,-1],\n  \"options\": {{\n    \"encoding\": {:?}\n  }},\n  \"units\": \"mm\"\n}}*/\n",
        encoding
    )
    .into_bytes();
    src.extend_from_slice(body);
    src
}

/// Gzip `text`
pub fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}
