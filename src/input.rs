use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas pixel coordinates (origin at the canvas' top-left corner)
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Represents the input events the editor reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Application-level keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+S
    Save,
    /// Ctrl/Cmd+C
    ChooseColor,
    /// Escape
    Cancel,
}

impl Shortcut {
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        let InputEvent::KeyDown { key, modifiers } = event else {
            return None;
        };
        match key {
            Key::S if modifiers.command => Some(Self::Save),
            Key::C if modifiers.command => Some(Self::ChooseColor),
            Key::Escape => Some(Self::Cancel),
            _ => None,
        }
    }
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Handles converting raw egui input into canvas-relative [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Part of the canvas not hidden by scrolling or other panels
    visible_rect: Rect,
    /// False while a popup or window layer sits between the pointer and the canvas
    pointer_over_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            visible_rect: canvas_rect,
            pointer_over_canvas: true,
        }
    }

    /// Update the canvas rectangle and its visible part (screen coordinates) after layout.
    ///
    /// `pointer_over_canvas` comes from the canvas response, so presses on a
    /// combo box popup or other overlapping layer are not canvas input.
    pub fn set_canvas_rect(&mut self, rect: Rect, clip_rect: Rect, pointer_over_canvas: bool) {
        self.canvas_rect = rect;
        self.visible_rect = rect.intersect(clip_rect);
        self.pointer_over_canvas = pointer_over_canvas;
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        let local = pos - self.canvas_rect.min;
        InputLocation {
            position: Pos2::new(local.x, local.y),
            is_in_canvas: self.pointer_over_canvas && self.visible_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer_pos = input.pointer.latest_pos();

            if let Some(pos) = pointer_pos {
                if Some(pos) != self.last_pointer_pos {
                    let held_buttons = BUTTONS
                        .into_iter()
                        .filter(|button| input.pointer.button_down(*button))
                        .collect();
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        held_buttons,
                    });
                }
                self.last_pointer_pos = Some(pos);
            }

            if let Some(pos) = pointer_pos.or(self.last_pointer_pos) {
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            for event in &input.raw.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    }),
                    // Some integrations turn Ctrl+C into a copy event without a key event.
                    egui::Event::Copy => events.push(InputEvent::KeyDown {
                        key: Key::C,
                        modifiers: Modifiers::COMMAND,
                    }),
                    _ => {}
                }
            }
        });

        dedup_copy(&mut events);
        events
    }
}

/// Collapses the copy event and its matching key event into one shortcut.
fn dedup_copy(events: &mut Vec<InputEvent>) {
    let is_color_shortcut = |event: &InputEvent| {
        Shortcut::from_event(event) == Some(Shortcut::ChooseColor)
    };
    if events.iter().filter(|&event| is_color_shortcut(event)).count() > 1 {
        let mut seen = false;
        events.retain(|event| {
            if !is_color_shortcut(event) {
                return true;
            }
            !std::mem::replace(&mut seen, true)
        });
    }
}
