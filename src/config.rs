// src/config.rs

use std::fmt;
use std::str::FromStr;

use crate::polygon::MAX_VERTICES;

pub const ENV_MODE: &str = "POLYGON_EDITOR_MODE";
pub const ENV_INSERTION: &str = "POLYGON_EDITOR_INSERTION";
pub const ENV_SEED_VERTICES: &str = "POLYGON_EDITOR_SEED_VERTICES";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    /// Seeded regular polygon; vertices can only be dragged.
    FixedVertices,
    /// Starts empty; clicking the picking plane appends vertices.
    FreeForm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionPolicy {
    /// Append whatever was clicked.
    Unchecked,
    /// Refuse an append that would close the polygon through an existing edge.
    RejectCrossing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfigError {
    pub value: String,
    pub expected: &'static str,
}

impl fmt::Display for ParseConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised value {:?}, expected {}", self.value, self.expected)
    }
}

impl std::error::Error for ParseConfigError {}

impl FromStr for EditorMode {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixed-vertices" => Ok(EditorMode::FixedVertices),
            "free" | "free-form" | "freeform" => Ok(EditorMode::FreeForm),
            _ => Err(ParseConfigError { value: s.to_string(), expected: "`fixed` or `free`" }),
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::FixedVertices => f.write_str("fixed vertices"),
            EditorMode::FreeForm => f.write_str("free-form"),
        }
    }
}

impl FromStr for InsertionPolicy {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Ok(InsertionPolicy::Unchecked),
            "reject-crossing" | "reject" => Ok(InsertionPolicy::RejectCrossing),
            _ => Err(ParseConfigError {
                value: s.to_string(),
                expected: "`unchecked` or `reject-crossing`",
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub mode: EditorMode,
    pub insertion_policy: InsertionPolicy,
    pub seed_vertex_count: usize,
    pub seed_radius: f32,
    pub max_vertices: usize,
    /// World-space distance within which a press grabs a marker.
    pub pick_radius: f32,
    pub marker_radius: f32,
    pub edge_width: f32,
    pub marker_color: [f32; 4],
    pub edge_color: [f32; 4],
    pub fill_color: [f32; 4],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mode: EditorMode::FixedVertices,
            insertion_policy: InsertionPolicy::Unchecked,
            seed_vertex_count: 6,
            seed_radius: 2.0,
            max_vertices: MAX_VERTICES,
            pick_radius: 0.2,
            marker_radius: 0.1,
            edge_width: 0.03,
            marker_color: [1.0, 0.0, 0.0, 1.0],
            edge_color: [0.0, 0.0, 1.0, 1.0],
            fill_color: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`; values that fail to parse are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MODE) {
            match raw.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => log::warn!("{ENV_MODE}: {e}"),
            }
        }
        if let Some(raw) = lookup(ENV_INSERTION) {
            match raw.parse() {
                Ok(policy) => config.insertion_policy = policy,
                Err(e) => log::warn!("{ENV_INSERTION}: {e}"),
            }
        }
        if let Some(raw) = lookup(ENV_SEED_VERTICES) {
            match raw.trim().parse::<usize>() {
                Ok(n) if (3..=config.max_vertices).contains(&n) => config.seed_vertex_count = n,
                _ => log::warn!(
                    "{ENV_SEED_VERTICES}: {raw:?} is not a vertex count in 3..={}",
                    config.max_vertices
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_hexagon_scene() {
        let config = EditorConfig::default();
        assert_eq!(config.mode, EditorMode::FixedVertices);
        assert_eq!(config.insertion_policy, InsertionPolicy::Unchecked);
        assert_eq!(config.seed_vertex_count, 6);
        assert_eq!(config.seed_radius, 2.0);
    }

    #[test]
    fn overrides_are_applied() {
        let config = EditorConfig::from_lookup(lookup_from(&[
            (ENV_MODE, "free"),
            (ENV_INSERTION, "reject-crossing"),
            (ENV_SEED_VERTICES, "8"),
        ]));
        assert_eq!(config.mode, EditorMode::FreeForm);
        assert_eq!(config.insertion_policy, InsertionPolicy::RejectCrossing);
        assert_eq!(config.seed_vertex_count, 8);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = EditorConfig::from_lookup(lookup_from(&[
            (ENV_MODE, "triangle"),
            (ENV_SEED_VERTICES, "2"),
        ]));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn mode_parsing_is_case_insensitive() {
        assert_eq!(" Free-Form ".parse::<EditorMode>(), Ok(EditorMode::FreeForm));
        assert!("nope".parse::<InsertionPolicy>().is_err());
    }
}
