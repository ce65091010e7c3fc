use bevy::prelude::*;

use crate::constants::debug_panel::{PANEL_CLOSED_WIDTH, PANEL_OPEN_WIDTH};
use crate::engine::scene::lighting::SceneLight;

/// Scene values the panel can show and edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelParam {
    LightIntensity,
    LightX,
    LightY,
    LightZ,
    CameraX,
    CameraY,
    CameraZ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamTarget {
    Light,
    Camera,
}

/// Slider bounds, resolution and whether the user may drag it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub enabled: bool,
}

impl PanelParam {
    pub const ALL: [PanelParam; 7] = [
        PanelParam::LightIntensity,
        PanelParam::LightX,
        PanelParam::LightY,
        PanelParam::LightZ,
        PanelParam::CameraX,
        PanelParam::CameraY,
        PanelParam::CameraZ,
    ];

    pub fn range(self) -> ParamRange {
        let (label, min, max, step, enabled) = match self {
            PanelParam::LightIntensity => ("lightIntensity", 0.0, 10.0, 0.001, true),
            PanelParam::LightX => ("lightX", -5.0, 5.0, 0.001, true),
            PanelParam::LightY => ("lightY", -5.0, 5.0, 0.001, true),
            PanelParam::LightZ => ("lightZ", -5.0, 5.0, 0.001, true),
            // Driven by the camera sweep every frame, so read-only.
            PanelParam::CameraX => ("cameraX", -5.0, 5.0, 0.001, false),
            PanelParam::CameraY => ("cameraY", 1.0, 80.0, 0.00001, true),
            PanelParam::CameraZ => ("cameraZ", -60.0, 60.0, 0.00001, true),
        };
        ParamRange {
            label,
            min,
            max,
            step,
            enabled,
        }
    }

    pub fn target(self) -> ParamTarget {
        match self {
            PanelParam::LightIntensity
            | PanelParam::LightX
            | PanelParam::LightY
            | PanelParam::LightZ => ParamTarget::Light,
            PanelParam::CameraX | PanelParam::CameraY | PanelParam::CameraZ => ParamTarget::Camera,
        }
    }

    pub fn read(self, light: &SceneLight, camera: &Transform) -> f32 {
        match self {
            PanelParam::LightIntensity => light.intensity,
            PanelParam::LightX => light.position.x,
            PanelParam::LightY => light.position.y,
            PanelParam::LightZ => light.position.z,
            PanelParam::CameraX => camera.translation.x,
            PanelParam::CameraY => camera.translation.y,
            PanelParam::CameraZ => camera.translation.z,
        }
    }

    pub fn write_light(self, value: f32, light: &mut SceneLight) {
        match self {
            PanelParam::LightIntensity => light.intensity = value,
            PanelParam::LightX => light.position.x = value,
            PanelParam::LightY => light.position.y = value,
            PanelParam::LightZ => light.position.z = value,
            _ => {}
        }
    }

    pub fn write_camera(self, value: f32, camera: &mut Transform) {
        match self {
            PanelParam::CameraX => camera.translation.x = value,
            PanelParam::CameraY => camera.translation.y = value,
            PanelParam::CameraZ => camera.translation.z = value,
            _ => {}
        }
    }
}

impl ParamRange {
    /// Clamps into range and rounds to the nearest step counted from `min`.
    pub fn snap(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Position of `value` along the slider, 0 at `min` and 1 at `max`.
    pub fn fraction(&self, value: f32) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, fraction: f32) -> f32 {
        self.snap(self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min))
    }

    pub fn decimals(&self) -> usize {
        if self.step <= 0.0 || self.step >= 1.0 {
            return 0;
        }
        (-self.step.log10()).round() as usize
    }

    pub fn format(&self, value: f32) -> String {
        format!("{value:.*}", self.decimals())
    }
}

// Events
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ParamEdited {
    pub param: PanelParam,
    pub value: f32,
}

// Resources
#[derive(Resource)]
pub struct DebugPanelUiState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}
impl Default for DebugPanelUiState {
    fn default() -> Self {
        Self {
            collapsed: false,
            open_width: PANEL_OPEN_WIDTH,
            closed_width: PANEL_CLOSED_WIDTH,
        }
    }
}

// Components
#[derive(Component)]
pub struct DebugPanelRoot;
#[derive(Component)]
pub struct PanelHeader;
/// Hidden while the panel is collapsed.
#[derive(Component)]
pub struct CollapsibleContent;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;
#[derive(Component)]
pub struct SliderTrack(pub PanelParam);
#[derive(Component)]
pub struct SliderFill(pub PanelParam);
#[derive(Component)]
pub struct SliderValue(pub PanelParam);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_seven_controls_with_one_disabled() {
        let ranges: Vec<ParamRange> = PanelParam::ALL.iter().map(|p| p.range()).collect();
        assert_eq!(ranges.len(), 7);
        assert_eq!(ranges.iter().filter(|r| r.enabled).count(), 6);
        assert!(!PanelParam::CameraX.range().enabled);
    }

    #[test]
    fn ranges_match_the_control_table() {
        let intensity = PanelParam::LightIntensity.range();
        assert_eq!((intensity.min, intensity.max, intensity.step), (0.0, 10.0, 0.001));
        for p in [PanelParam::LightX, PanelParam::LightY, PanelParam::LightZ] {
            let r = p.range();
            assert_eq!((r.min, r.max), (-5.0, 5.0));
        }
        let camera_y = PanelParam::CameraY.range();
        assert_eq!((camera_y.min, camera_y.max, camera_y.step), (1.0, 80.0, 0.00001));
        let camera_z = PanelParam::CameraZ.range();
        assert_eq!((camera_z.min, camera_z.max), (-60.0, 60.0));
    }

    #[test]
    fn snap_clamps_and_rounds_to_step() {
        let range = PanelParam::LightIntensity.range();
        assert_eq!(range.snap(-1.0), 0.0);
        assert_eq!(range.snap(42.0), 10.0);
        assert!((range.snap(3.14159) - 3.142).abs() < 1e-5);
    }

    #[test]
    fn slider_position_maps_onto_range() {
        let range = PanelParam::CameraZ.range();
        assert_eq!(range.fraction(-60.0), 0.0);
        assert_eq!(range.fraction(60.0), 1.0);
        assert_eq!(range.fraction(0.0), 0.5);
        assert!(range.value_at(0.5).abs() < 1e-4);
        assert!((range.value_at(2.0) - 60.0).abs() < 1e-4);
        assert_eq!(range.value_at(-1.0), -60.0);
    }

    #[test]
    fn value_text_follows_step_precision() {
        assert_eq!(PanelParam::LightX.range().format(0.25), "0.250");
        assert_eq!(PanelParam::CameraY.range().format(55.0), "55.00000");
    }

    #[test]
    fn reads_and_writes_bound_values() {
        let mut light = SceneLight::default();
        let mut camera = Transform::from_xyz(20.0, 55.0, 10.0);

        PanelParam::LightIntensity.write_light(7.0, &mut light);
        PanelParam::LightZ.write_light(-4.0, &mut light);
        PanelParam::CameraY.write_camera(30.0, &mut camera);

        assert_eq!(PanelParam::LightIntensity.read(&light, &camera), 7.0);
        assert_eq!(PanelParam::LightZ.read(&light, &camera), -4.0);
        assert_eq!(PanelParam::CameraY.read(&light, &camera), 30.0);
        assert_eq!(PanelParam::CameraZ.read(&light, &camera), 10.0);
    }

    #[test]
    fn writes_ignore_the_other_target() {
        let mut light = SceneLight::default();
        let mut camera = Transform::IDENTITY;

        PanelParam::CameraZ.write_light(9.0, &mut light);
        PanelParam::LightX.write_camera(9.0, &mut camera);

        assert_eq!(light, SceneLight::default());
        assert_eq!(camera, Transform::IDENTITY);
    }
}
