use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::state::*;
use super::ui::chevron_colour;
use crate::engine::camera::orbit_controls::UiPointerCapture;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::scene::lighting::SceneLight;

pub fn collapse_button_interaction(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<CollapseButton>)>,
    mut state: ResMut<DebugPanelUiState>,
) {
    for (interaction, mut colour) in &mut buttons {
        if *interaction == Interaction::Pressed {
            state.collapsed = !state.collapsed;
        }
        *colour = BackgroundColor(chevron_colour(*interaction));
    }
}

/// Slider position for a cursor at `normalized`, which is centred on the track (±0.5 at the edges).
pub fn track_fraction(normalized: Vec2) -> f32 {
    (normalized.x + 0.5).clamp(0.0, 1.0)
}

// Emits an edit every frame a slider track is held, so dragging follows the cursor.
pub fn slider_drag_interaction(
    tracks: Query<(&Interaction, &RelativeCursorPosition, &SliderTrack)>,
    mut edits: EventWriter<ParamEdited>,
) {
    for (interaction, cursor, track) in &tracks {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(normalized) = cursor.normalized else {
            continue;
        };
        let range = track.0.range();
        if !range.enabled {
            continue;
        }
        edits.write(ParamEdited {
            param: track.0,
            value: range.value_at(track_fraction(normalized)),
        });
    }
}

pub fn apply_param_edits(
    mut edits: EventReader<ParamEdited>,
    mut lights: Query<&mut SceneLight>,
    mut cameras: Query<&mut Transform, With<ViewportCamera>>,
) {
    for edit in edits.read() {
        let range = edit.param.range();
        if !range.enabled {
            continue;
        }
        let value = range.snap(edit.value);

        match edit.param.target() {
            ParamTarget::Light => {
                for mut light in &mut lights {
                    edit.param.write_light(value, &mut light);
                }
            }
            ParamTarget::Camera => {
                for mut camera in &mut cameras {
                    edit.param.write_camera(value, &mut camera);
                }
            }
        }
    }
}

// Keeps orbit controls from reacting while the pointer is on the panel or dragging a slider.
pub fn update_pointer_capture(
    roots: Query<&RelativeCursorPosition, With<DebugPanelRoot>>,
    tracks: Query<&Interaction, With<SliderTrack>>,
    mut capture: ResMut<UiPointerCapture>,
) {
    let hovering = roots.iter().any(|cursor| cursor.mouse_over());
    let dragging = tracks.iter().any(|i| *i == Interaction::Pressed);
    let captured = hovering || dragging;
    if capture.0 != captured {
        capture.0 = captured;
    }
}

// Mirrors the bound scene values into slider fills and value labels.
pub fn reflect_param_values(
    lights: Query<&SceneLight>,
    cameras: Query<&Transform, With<ViewportCamera>>,
    mut fills: Query<(&SliderFill, &mut Node)>,
    mut labels: Query<(&SliderValue, &mut Text)>,
) {
    let (Ok(light), Ok(camera)) = (lights.single(), cameras.single()) else {
        return;
    };

    for (fill, mut node) in &mut fills {
        let range = fill.0.range();
        let width = Val::Percent(range.fraction(fill.0.read(light, camera)) * 100.0);
        if node.width != width {
            node.width = width;
        }
    }

    for (label, mut text) in &mut labels {
        let range = label.0.range();
        let formatted = range.format(label.0.read(light, camera));
        if text.0 != formatted {
            text.0 = formatted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_app() -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<ParamEdited>()
            .add_systems(Update, (apply_param_edits, reflect_param_values).chain());

        let light = app.world_mut().spawn(SceneLight::default()).id();
        let camera = app
            .world_mut()
            .spawn((ViewportCamera, Transform::from_xyz(20.0, 55.0, 10.0)))
            .id();
        (app, light, camera)
    }

    #[test]
    fn track_fraction_maps_centred_coordinates() {
        assert_eq!(track_fraction(Vec2::new(-0.5, 0.0)), 0.0);
        assert_eq!(track_fraction(Vec2::new(0.0, 0.3)), 0.5);
        assert_eq!(track_fraction(Vec2::new(0.5, 0.0)), 1.0);
        assert_eq!(track_fraction(Vec2::new(3.0, 0.0)), 1.0);
    }

    #[test]
    fn edits_are_snapped_and_applied() {
        let (mut app, light, camera) = panel_app();

        app.world_mut().send_event(ParamEdited {
            param: PanelParam::LightIntensity,
            value: 12.0,
        });
        app.world_mut().send_event(ParamEdited {
            param: PanelParam::CameraY,
            value: 30.0,
        });
        app.update();

        assert_eq!(app.world().get::<SceneLight>(light).unwrap().intensity, 10.0);
        let y = app.world().get::<Transform>(camera).unwrap().translation.y;
        assert!((y - 30.0).abs() < 1e-3);
    }

    #[test]
    fn disabled_camera_x_ignores_edits() {
        let (mut app, _, camera) = panel_app();

        app.world_mut().send_event(ParamEdited {
            param: PanelParam::CameraX,
            value: 3.0,
        });
        app.update();

        assert_eq!(app.world().get::<Transform>(camera).unwrap().translation.x, 20.0);
    }

    #[test]
    fn labels_and_fills_mirror_scene_values() {
        let (mut app, _, _) = panel_app();
        let fill = app
            .world_mut()
            .spawn((SliderFill(PanelParam::LightIntensity), Node::default()))
            .id();
        let label = app
            .world_mut()
            .spawn((SliderValue(PanelParam::LightX), Text::new("")))
            .id();

        app.update();

        let Val::Percent(width) = app.world().get::<Node>(fill).unwrap().width else {
            panic!("fill width should be a percentage");
        };
        assert!((width - 30.0).abs() < 1e-3);
        assert_eq!(app.world().get::<Text>(label).unwrap().0, "0.250");
    }

    #[test]
    fn chevron_press_toggles_collapse() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<DebugPanelUiState>()
            .add_systems(Update, collapse_button_interaction);
        let button = app
            .world_mut()
            .spawn((CollapseButton, Interaction::Pressed, BackgroundColor(Color::BLACK)))
            .id();

        app.update();
        assert!(app.world().resource::<DebugPanelUiState>().collapsed);

        // Holding the press does not toggle again.
        app.update();
        assert!(app.world().resource::<DebugPanelUiState>().collapsed);

        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Hovered;
        app.update();
        assert!(app.world().resource::<DebugPanelUiState>().collapsed);
        assert_eq!(
            app.world().get::<BackgroundColor>(button).unwrap().0,
            chevron_colour(Interaction::Hovered)
        );
    }
}
