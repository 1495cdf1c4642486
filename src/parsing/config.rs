use crate::camera::PinholeCamera;
use crate::errors::RenderError;
use crate::geometry::Sphere;
use crate::math::*;
use crate::world::Scene;

use serde::Deserialize;

use super::Vec3Data;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 800,
            height: 600,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct SphereData {
    pub center: Vec3Data,
    pub radius: Float,
    pub color: Vec3Data,
}

impl From<SphereData> for Sphere {
    fn from(data: SphereData) -> Self {
        Sphere::new(data.radius, data.center.into(), data.color.into())
    }
}

impl From<Sphere> for SphereData {
    fn from(sphere: Sphere) -> Self {
        SphereData {
            center: sphere.center.into(),
            radius: sphere.radius,
            color: sphere.color.into(),
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    // threads defaults to the number of logical cpus
    Parallel { threads: Option<u16> },
}

impl Default for RendererType {
    fn default() -> Self {
        RendererType::Parallel { threads: None }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Ppm,
    Png,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub filename: String,
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            filename: String::from("output.ppm"),
            format: OutputFormat::Ppm,
        }
    }
}

/// Raw contents of a config file. Every field is optional and falls back to the default scene.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TOMLConfig {
    pub resolution: Resolution,
    pub camera: Vec3Data,
    pub spheres: Vec<SphereData>,
    pub light_dir: Vec3Data,
    pub background: Vec3Data,
    pub renderer: RendererType,
    pub output: OutputSettings,
}

impl Default for TOMLConfig {
    fn default() -> Self {
        TOMLConfig {
            resolution: Resolution::default(),
            camera: [0.0, 0.0, 0.0],
            spheres: Scene::default_spheres()
                .into_iter()
                .map(SphereData::from)
                .collect(),
            light_dir: [1.0, 1.0, -1.0],
            background: [0.2, 0.7, 0.8],
            renderer: RendererType::default(),
            output: OutputSettings::default(),
        }
    }
}

/// Everything a render needs, validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub resolution: Resolution,
    pub camera: PinholeCamera,
    pub scene: Scene,
    // not normalized, see DirectLightingIntegrator::new
    pub light_direction: Vec3,
    pub background: Color,
    pub renderer: RendererType,
    pub output: OutputSettings,
}

impl TryFrom<TOMLConfig> for Config {
    type Error = RenderError;
    fn try_from(data: TOMLConfig) -> Result<Self, Self::Error> {
        let Resolution { width, height } = data.resolution;
        // the film holds width * height pixels and image dimensions are u32
        let fits = width.checked_mul(height).is_some()
            && u32::try_from(width).is_ok()
            && u32::try_from(height).is_ok();
        if width == 0 || height == 0 || !fits {
            return Err(RenderError::InvalidResolution { width, height });
        }
        let light_direction = Vec3::from(data.light_dir);
        light_direction.try_normalized("light direction")?;
        let camera = Vec3::from(data.camera);
        if !camera.is_finite() {
            return Err(RenderError::DegenerateVector {
                what: String::from("camera position"),
            });
        }
        let scene = Scene::from_spheres(data.spheres.into_iter().map(Sphere::from).collect())?;
        Ok(Config {
            resolution: data.resolution,
            camera: PinholeCamera::new(camera),
            scene,
            light_direction,
            background: data.background.into(),
            renderer: data.renderer,
            output: data.output,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        let data = TOMLConfig::default();
        Config {
            resolution: data.resolution,
            camera: PinholeCamera::new(data.camera.into()),
            scene: Scene::new(
                Scene::default_spheres()
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            ),
            light_direction: data.light_dir.into(),
            background: data.background.into(),
            renderer: data.renderer,
            output: data.output,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_config_is_default_scene() {
        let data: TOMLConfig = toml::from_str("").unwrap();
        assert_eq!(data, TOMLConfig::default());
        let config = Config::try_from(data).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.resolution, Resolution { width: 800, height: 600 });
        assert_eq!(config.camera.origin, Point3::ZERO);
        assert_eq!(config.light_direction, Vec3::new(1.0, 1.0, -1.0));
        assert_eq!(config.background, Color::new(0.2, 0.7, 0.8));
        assert_eq!(config.scene.len(), 3);
        assert_eq!(config.output.filename, "output.ppm");
    }

    #[test]
    fn test_parsing_config() {
        let input = r#"
            camera = [0.0, 1.0, 0.0]
            light_dir = [0.0, 1.0, 0.0]

            [resolution]
            width = 64
            height = 48

            [renderer]
            type = "Naive"

            [output]
            filename = "out/test.png"
            format = "png"

            [[spheres]]
            center = [0.0, 0.0, -3.0]
            radius = 0.5
            color = [1.0, 1.0, 1.0]
        "#;
        let data: TOMLConfig = toml::from_str(input).unwrap();
        let config = Config::try_from(data).unwrap();
        assert_eq!(config.resolution, Resolution { width: 64, height: 48 });
        assert_eq!(config.camera.origin, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(config.renderer, RendererType::Naive);
        assert_eq!(config.output.format, OutputFormat::Png);
        assert_eq!(config.scene.len(), 1);
        // unspecified fields keep their defaults
        assert_eq!(config.background, Color::new(0.2, 0.7, 0.8));
    }

    #[test]
    fn test_parallel_renderer_threads() {
        let data: TOMLConfig = toml::from_str(
            r#"
            [renderer]
            type = "Parallel"
            threads = 3
        "#,
        )
        .unwrap();
        assert_eq!(data.renderer, RendererType::Parallel { threads: Some(3) });
    }

    #[test]
    fn test_oversized_resolution_rejected() {
        let huge = 1usize << 33;
        for (width, height) in [(huge, huge), (usize::MAX, 2), (u32::MAX as usize + 1, 1)] {
            let data = TOMLConfig {
                resolution: Resolution { width, height },
                renderer: RendererType::Naive,
                ..Default::default()
            };
            match Config::try_from(data) {
                Err(RenderError::InvalidResolution { width: w, height: h }) => {
                    assert_eq!((w, h), (width, height))
                }
                other => panic!("expected invalid resolution, got {:?}", other),
            }
        }

        let data = TOMLConfig {
            resolution: Resolution {
                width: u32::MAX as usize,
                height: 1,
            },
            ..Default::default()
        };
        assert!(Config::try_from(data).is_ok());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let data = TOMLConfig {
            resolution: Resolution { width: 0, height: 10 },
            ..Default::default()
        };
        assert!(matches!(
            Config::try_from(data),
            Err(RenderError::InvalidResolution { width: 0, height: 10 })
        ));

        let data = TOMLConfig {
            light_dir: [0.0, 0.0, 0.0],
            ..Default::default()
        };
        assert!(matches!(
            Config::try_from(data),
            Err(RenderError::DegenerateVector { .. })
        ));

        let mut data = TOMLConfig::default();
        data.spheres[2].radius = 0.0;
        assert!(matches!(
            Config::try_from(data),
            Err(RenderError::InvalidSphere { index: 2, .. })
        ));

        assert!(matches!(
            toml::from_str::<TOMLConfig>("resolution = 5").map_err(RenderError::from),
            Err(RenderError::Config(_))
        ));
    }
}
