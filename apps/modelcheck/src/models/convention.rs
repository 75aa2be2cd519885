//! Packaging convention: the tunable constants every rule reads.
//!
//! Loaded from the `[convention]` section of `modelcheck.toml|yaml`. Every
//! field is optional in the file and falls back to the defaults below.
//! Suffix sets are configuration because they have changed over time.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
/// Naming, layout, and material constants for one run.
pub struct Convention {
    /// Allowed texture suffixes after the last underscore of an image stem.
    pub texture_suffixes: Vec<String>,
    /// Material stems ending with one of these are vertex-color only and skipped.
    pub vertex_color_suffixes: Vec<String>,
    /// Extensions (without dot) permitted inside `meshes/`.
    pub extensions: Vec<String>,
    /// Subset of `extensions` treated as images for the texture name rule.
    pub image_extensions: Vec<String>,
    /// Expected diffuse channel value.
    pub diffuse_default: f64,
    /// Maximum number of direct children in an asset directory.
    pub max_root_entries: usize,
    pub description_placeholder: String,
    /// Template values that count as an unset author name or email.
    pub author_placeholders: Vec<String>,
    /// Token marking a diffuse-color line in material files.
    pub diffuse_token: String,
    /// Prefix of texture-map tokens in material files.
    pub map_prefix: String,
}

impl Default for Convention {
    fn default() -> Self {
        Self {
            texture_suffixes: ["Diffuse", "Normal", "Rough", "Metal", "SpecGloss"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vertex_color_suffixes: vec!["Col".to_string()],
            extensions: ["png", "dae", "mtl", "obj"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            image_extensions: vec!["png".to_string()],
            diffuse_default: 0.8,
            max_root_entries: 3,
            description_placeholder: "Description of the model".to_string(),
            author_placeholders: vec!["name".to_string(), "email".to_string()],
            diffuse_token: "Kd".to_string(),
            map_prefix: "map_".to_string(),
        }
    }
}

impl Convention {
    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.image_extensions.iter().any(|e| e == ext)
    }

    pub fn is_vertex_color_material(&self, stem: &str) -> bool {
        self.vertex_color_suffixes
            .iter()
            .any(|s| !s.is_empty() && stem.ends_with(s.as_str()))
    }

    pub fn is_author_placeholder(&self, value: &str) -> bool {
        let v = value.trim();
        v.is_empty() || self.author_placeholders.iter().any(|p| p == v)
    }
}
