mod defaults;

use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use dnahelix::core::models::base::Base;
use dnahelix::core::models::primitive::Color;
use dnahelix::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Fully merged settings for one `build` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub sequence: String,
    pub core_config: core_config::GenerationConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialHelixConfig {
    form: Option<String>,
    sequence: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGeometryConfig {
    #[serde(rename = "backbone-radius")]
    backbone_radius: Option<f64>,
    #[serde(rename = "base-width")]
    base_width: Option<f64>,
    #[serde(rename = "base-length-factor")]
    base_length_factor: Option<f64>,
    #[serde(rename = "base-height")]
    base_height: Option<f64>,
    #[serde(rename = "joint-segments")]
    joint_segments: Option<u32>,
    #[serde(rename = "joint-rings")]
    joint_rings: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialColorsConfig {
    #[serde(rename = "A")]
    adenine: Option<[f64; 3]>,
    #[serde(rename = "T")]
    thymine: Option<[f64; 3]>,
    #[serde(rename = "G")]
    guanine: Option<[f64; 3]>,
    #[serde(rename = "C")]
    cytosine: Option<[f64; 3]>,
    backbone: Option<[f64; 3]>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialBuildConfig {
    helix: Option<PartialHelixConfig>,
    geometry: Option<PartialGeometryConfig>,
    colors: Option<PartialColorsConfig>,
}

impl PartialBuildConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &BuildArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let helix = self.helix.take().unwrap_or_default();
        let geometry_file = self.geometry.take().unwrap_or_default();
        let colors_file = self.colors.take().unwrap_or_default();

        let form_name = args
            .form
            .clone()
            .or(helix.form)
            .unwrap_or(defaults.form);
        let raw_sequence = args
            .sequence
            .clone()
            .or(helix.sequence)
            .unwrap_or(defaults.sequence);
        let sequence = join_sequence_lines(&raw_sequence);
        if sequence.is_empty() {
            return Err(CliError::Argument(
                "The base sequence must not be empty.".to_string(),
            ));
        }

        let base_geometry = core_config::GeometryConfig::default();
        let geometry = core_config::GeometryConfig {
            backbone_radius: geometry_file
                .backbone_radius
                .unwrap_or(base_geometry.backbone_radius),
            base_width: geometry_file.base_width.unwrap_or(base_geometry.base_width),
            base_length_factor: geometry_file
                .base_length_factor
                .unwrap_or(base_geometry.base_length_factor),
            base_height: geometry_file
                .base_height
                .unwrap_or(base_geometry.base_height),
            joint_segments: geometry_file
                .joint_segments
                .unwrap_or(base_geometry.joint_segments),
            joint_rings: geometry_file
                .joint_rings
                .unwrap_or(base_geometry.joint_rings),
        };

        let palette = Self::merge_palette(colors_file);

        let core_config = core_config::GenerationConfigBuilder::new()
            .form_name(&form_name)
            .and_then(|builder| {
                builder
                    .geometry(geometry)
                    .palette(palette)
                    .build()
            })
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            sequence,
            core_config,
        })
    }

    fn merge_palette(partial: PartialColorsConfig) -> core_config::Palette {
        let mut palette = core_config::Palette::default();
        let overrides = [
            (Base::A, partial.adenine),
            (Base::T, partial.thymine),
            (Base::G, partial.guanine),
            (Base::C, partial.cytosine),
        ];
        for (base, rgb) in overrides {
            if let Some(rgb) = rgb {
                palette.set_base_color(base, Color::from(rgb));
            }
        }
        if let Some(rgb) = partial.backbone {
            palette.backbone = Color::from(rgb);
        }
        palette
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            let float = || -> Result<f64> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })
            };
            let integer = || -> Result<u32> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })
            };

            match key {
                "helix.form" => {
                    self.helix.get_or_insert_with(Default::default).form =
                        Some(value_str.to_string());
                }
                "helix.sequence" => {
                    self.helix.get_or_insert_with(Default::default).sequence =
                        Some(value_str.to_string());
                }
                "geometry.backbone-radius" => {
                    self.geometry
                        .get_or_insert_with(Default::default)
                        .backbone_radius = Some(float()?);
                }
                "geometry.base-width" => {
                    self.geometry.get_or_insert_with(Default::default).base_width =
                        Some(float()?);
                }
                "geometry.base-length-factor" => {
                    self.geometry
                        .get_or_insert_with(Default::default)
                        .base_length_factor = Some(float()?);
                }
                "geometry.base-height" => {
                    self.geometry.get_or_insert_with(Default::default).base_height =
                        Some(float()?);
                }
                "geometry.joint-segments" => {
                    self.geometry
                        .get_or_insert_with(Default::default)
                        .joint_segments = Some(integer()?);
                }
                "geometry.joint-rings" => {
                    self.geometry.get_or_insert_with(Default::default).joint_rings =
                        Some(integer()?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Joins the lines of a multi-line sequence, dropping the indentation around
/// each line. Single-line values are kept verbatim so every character keeps
/// its position.
fn join_sequence_lines(raw: &str) -> String {
    if raw.contains(['\n', '\r']) {
        raw.lines().map(str::trim).collect()
    } else {
        raw.to_string()
    }
}
