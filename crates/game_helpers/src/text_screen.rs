use bevy::prelude::*;

/// One centred line of a full-screen text layout.
#[derive(Clone, Debug)]
pub struct ScreenLine {
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

impl ScreenLine {
    pub fn new(text: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
        }
    }
}

/// Spawns a full-window column of centred text lines tagged with `marker`.
///
/// The marker goes on the root node only; despawning it recursively removes
/// every line.
pub fn spawn_text_screen<M: Component>(
    commands: &mut Commands,
    marker: M,
    row_gap: f32,
    lines: &[ScreenLine],
) -> Entity {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(row_gap),
                ..default()
            },
            marker,
        ))
        .with_children(|parent| {
            for line in lines {
                parent.spawn((
                    Text::new(line.text.clone()),
                    TextFont {
                        font_size: line.font_size,
                        ..default()
                    },
                    TextColor(line.color),
                    TextLayout::new_with_justify(JustifyText::Center),
                ));
            }
        })
        .id()
}
