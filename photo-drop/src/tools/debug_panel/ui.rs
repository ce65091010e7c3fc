use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::state::*;
use crate::constants::debug_panel::{LABEL_FONT_SIZE, SLIDER_TRACK_HEIGHT};

const PANEL_COLOUR: Color = Color::srgb(0.10, 0.11, 0.13);
const HEADER_COLOUR: Color = Color::srgb(0.14, 0.16, 0.20);
const BODY_COLOUR: Color = Color::srgb(0.12, 0.13, 0.15);
const TRACK_COLOUR: Color = Color::srgb(0.22, 0.24, 0.28);
const FILL_COLOUR: Color = Color::srgb(0.18, 0.55, 0.85);
const DISABLED_FILL_COLOUR: Color = Color::srgb(0.35, 0.37, 0.40);
const CHEVRON_SIZE: f32 = 24.0;
const TITLE_FONT_SIZE: f32 = 16.0;

/// Everything about the panel that differs between open and collapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollapseLayout {
    pub width: f32,
    pub header_padding: f32,
    pub header_justify: JustifyContent,
    pub content_display: Display,
    pub chevron: &'static str,
}

impl CollapseLayout {
    pub fn for_state(state: &DebugPanelUiState) -> Self {
        if state.collapsed {
            Self {
                width: state.closed_width,
                header_padding: 4.0,
                header_justify: JustifyContent::FlexEnd,
                content_display: Display::None,
                chevron: "<",
            }
        } else {
            Self {
                width: state.open_width,
                header_padding: 8.0,
                header_justify: JustifyContent::SpaceBetween,
                content_display: Display::Flex,
                chevron: ">",
            }
        }
    }

    fn apply_to_header(&self, node: &mut Node) {
        node.padding = UiRect::all(Val::Px(self.header_padding));
        node.justify_content = self.header_justify;
    }
}

/// Chevron background for the current pointer interaction.
pub fn chevron_colour(interaction: Interaction) -> Color {
    match interaction {
        Interaction::Pressed => Color::srgb(0.18, 0.20, 0.24),
        Interaction::Hovered => Color::srgb(0.26, 0.28, 0.32),
        Interaction::None => TRACK_COLOUR,
    }
}

pub fn spawn_debug_panel(mut commands: Commands, state: Res<DebugPanelUiState>) {
    let layout = CollapseLayout::for_state(&state);

    commands
        .spawn((
            DebugPanelRoot,
            Name::new("DebugPanel"),
            RelativeCursorPosition::default(),
            BackgroundColor(PANEL_COLOUR),
            Node {
                width: Val::Px(layout.width),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                flex_direction: FlexDirection::Column,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|panel| {
            spawn_header(panel, &layout);

            panel
                .spawn((
                    CollapsibleContent,
                    Name::new("Sliders"),
                    BackgroundColor(BODY_COLOUR),
                    Node {
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(8.0)),
                        row_gap: Val::Px(10.0),
                        display: layout.content_display,
                        flex_direction: FlexDirection::Column,
                        ..default()
                    },
                ))
                .with_children(|body| {
                    for param in PanelParam::ALL {
                        spawn_slider_row(body, param);
                    }
                });
        });
}

// Title (hidden while collapsed) and the chevron that toggles the panel.
fn spawn_header(panel: &mut ChildSpawnerCommands, layout: &CollapseLayout) {
    let mut node = Node {
        align_items: AlignItems::Center,
        ..default()
    };
    layout.apply_to_header(&mut node);

    panel
        .spawn((PanelHeader, Name::new("Header"), BackgroundColor(HEADER_COLOUR), node))
        .with_children(|header| {
            header.spawn((
                CollapsibleContent,
                Text::new("Controls"),
                TextFont {
                    font_size: TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    display: layout.content_display,
                    ..default()
                },
            ));
            header
                .spawn((
                    CollapseButton,
                    Name::new("CollapseButton"),
                    Button,
                    BackgroundColor(chevron_colour(Interaction::None)),
                    Node {
                        width: Val::Px(CHEVRON_SIZE),
                        height: Val::Px(CHEVRON_SIZE),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_child((
                    CollapseLabel,
                    Text::new(layout.chevron),
                    TextFont {
                        font_size: TITLE_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
        });
}

fn spawn_slider_row(body: &mut ChildSpawnerCommands, param: PanelParam) {
    let range = param.range();
    let text_colour = if range.enabled { Color::WHITE } else { Color::srgb(0.5, 0.5, 0.5) };

    body.spawn((
        Name::new(range.label),
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        },
    ))
    .with_children(|row| {
        row.spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            ..default()
        })
        .with_children(|labels| {
            labels.spawn((
                Text::new(range.label),
                TextFont { font_size: LABEL_FONT_SIZE, ..default() },
                TextColor(text_colour),
            ));
            labels.spawn((
                SliderValue(param),
                Text::new(range.format(range.min)),
                TextFont { font_size: LABEL_FONT_SIZE, ..default() },
                TextColor(text_colour),
            ));
        });

        let mut track = row.spawn((
            SliderTrack(param),
            BackgroundColor(TRACK_COLOUR),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(SLIDER_TRACK_HEIGHT),
                ..default()
            },
        ));
        // Disabled rows get no Button, so they never receive Interaction.
        if range.enabled {
            track.insert((Button, RelativeCursorPosition::default()));
        }
        track.with_children(|track| {
            track.spawn((
                SliderFill(param),
                BackgroundColor(if range.enabled { FILL_COLOUR } else { DISABLED_FILL_COLOUR }),
                Node {
                    width: Val::Percent(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
            ));
        });
    });
}

pub fn apply_collapse_state(
    state: Res<DebugPanelUiState>,
    mut roots: Query<
        &mut Node,
        (With<DebugPanelRoot>, Without<PanelHeader>, Without<CollapsibleContent>),
    >,
    mut headers: Query<&mut Node, (With<PanelHeader>, Without<CollapsibleContent>)>,
    mut content: Query<&mut Node, With<CollapsibleContent>>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }
    let layout = CollapseLayout::for_state(&state);

    for mut node in &mut roots {
        node.width = Val::Px(layout.width);
    }
    for mut node in &mut headers {
        layout.apply_to_header(&mut node);
    }
    for mut node in &mut content {
        node.display = layout.content_display;
    }
    for mut text in &mut chevrons {
        text.0 = layout.chevron.to_string();
    }
}
