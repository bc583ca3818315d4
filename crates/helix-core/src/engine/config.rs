use crate::core::models::base::Base;
use crate::core::models::form::{DnaForm, HelixParams, ParseFormError};
use crate::core::models::primitive::Color;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    UnknownForm(#[from] ParseFormError),

    #[error("Geometry parameter '{field}' is out of range (got {value})")]
    InvalidGeometry { field: &'static str, value: f64 },

    #[error("Color '{name}' has components outside [0, 1]: {color:?}")]
    InvalidColor { name: String, color: Color },
}

/// Sizes of the placeholder primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    pub backbone_radius: f64,
    pub base_width: f64,
    /// Base block length as a fraction of the helix radius.
    pub base_length_factor: f64,
    pub base_height: f64,
    pub joint_segments: u32,
    pub joint_rings: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            backbone_radius: 0.05,
            base_width: 0.2,
            base_length_factor: 0.95,
            base_height: 0.02,
            joint_segments: 16,
            joint_rings: 8,
        }
    }
}

impl GeometryConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("backbone_radius", self.backbone_radius),
            ("base_width", self.base_width),
            ("base_length_factor", self.base_length_factor),
            ("base_height", self.base_height),
        ];
        for (field, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidGeometry { field, value });
            }
        }
        if self.joint_segments < 3 {
            return Err(ConfigError::InvalidGeometry {
                field: "joint_segments",
                value: self.joint_segments as f64,
            });
        }
        if self.joint_rings < 2 {
            return Err(ConfigError::InvalidGeometry {
                field: "joint_rings",
                value: self.joint_rings as f64,
            });
        }
        Ok(())
    }
}

/// Material colors keyed by base type, plus the backbone color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub adenine: Color,
    pub thymine: Color,
    pub guanine: Color,
    pub cytosine: Color,
    pub backbone: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            adenine: Color::rgb(1.0, 0.0, 0.0),
            thymine: Color::rgb(0.0, 0.4, 1.0),
            guanine: Color::rgb(0.0, 1.0, 0.0),
            cytosine: Color::rgb(1.0, 1.0, 0.0),
            backbone: Color::rgb(0.7, 0.7, 0.7),
        }
    }
}

impl Palette {
    pub fn base_color(&self, base: Base) -> Color {
        match base {
            Base::A => self.adenine,
            Base::T => self.thymine,
            Base::G => self.guanine,
            Base::C => self.cytosine,
        }
    }

    pub fn set_base_color(&mut self, base: Base, color: Color) {
        match base {
            Base::A => self.adenine = color,
            Base::T => self.thymine = color,
            Base::G => self.guanine = color,
            Base::C => self.cytosine = color,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let entries = Base::ALL
            .iter()
            .map(|b| (b.to_string(), self.base_color(*b)))
            .chain(std::iter::once(("Backbone".to_string(), self.backbone)));
        for (name, color) in entries {
            if !color.is_valid() {
                return Err(ConfigError::InvalidColor { name, color });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub form: DnaForm,
    pub params: HelixParams,
    pub geometry: GeometryConfig,
    pub palette: Palette,
    /// Remove existing objects before generating.
    pub clear_scene: bool,
}

impl GenerationConfig {
    pub fn radius(&self) -> f64 {
        self.params.radius()
    }

    pub fn base_length(&self) -> f64 {
        self.radius() * self.geometry.base_length_factor
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    form: Option<DnaForm>,
    geometry: Option<GeometryConfig>,
    palette: Option<Palette>,
    clear_scene: Option<bool>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(mut self, form: DnaForm) -> Self {
        self.form = Some(form);
        self
    }
    pub fn form_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.form = Some(name.parse()?);
        Ok(self)
    }
    pub fn geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = Some(geometry);
        self
    }
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
    pub fn clear_scene(mut self, clear: bool) -> Self {
        self.clear_scene = Some(clear);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let form = self.form.ok_or(ConfigError::MissingParameter("form"))?;
        let geometry = self.geometry.unwrap_or_default();
        geometry.validate()?;
        let palette = self.palette.unwrap_or_default();
        palette.validate()?;

        Ok(GenerationConfig {
            form,
            params: form.params(),
            geometry,
            palette,
            clear_scene: self.clear_scene.unwrap_or(true),
        })
    }
}
