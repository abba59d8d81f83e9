use egui::{Context, Pos2, Rect};

use crate::surface::SurfaceTransform;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas-local logical coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

impl InputLocation {
    pub fn inside(position: Pos2) -> Self {
        Self {
            position,
            is_in_canvas: true,
        }
    }

    pub fn outside(position: Pos2) -> Self {
        Self {
            position,
            is_in_canvas: false,
        }
    }
}

/// Pointer events delivered to the session, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved, with or without the primary button held
    PointerMove {
        location: InputLocation,
        primary_held: bool,
    },
    /// Primary button released after a press on the canvas
    PointerUp { location: InputLocation },
    /// Pointer left the canvas
    PointerLeave,
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    transform: SurfaceTransform,
    last_pointer_pos: Option<Pos2>,
    was_in_canvas: bool,
    pressed_in_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect, scale: f32) -> Self {
        Self {
            canvas_rect,
            transform: SurfaceTransform::scaled(scale).with_origin(canvas_rect.min),
            last_pointer_pos: None,
            was_in_canvas: false,
            pressed_in_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect, scale: f32) {
        self.canvas_rect = rect;
        self.transform = SurfaceTransform::scaled(scale).with_origin(rect.min);
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: self.transform.invert(pos),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Process this frame's egui input and generate InputEvents.
    ///
    /// `canvas_hovered` says whether the canvas is the topmost thing under the
    /// pointer. Presses and hover moves are only taken while it is, so clicks on a
    /// window above the canvas never reach it. A drag that started on the canvas is
    /// followed wherever the pointer goes.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;

            if pointer.primary_pressed() && canvas_hovered {
                if let Some(origin) = pointer.press_origin() {
                    if self.canvas_rect.contains(origin) {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(origin),
                        });
                        self.pressed_in_canvas = true;
                        self.was_in_canvas = true;
                        self.last_pointer_pos = Some(origin);
                    }
                }
            }

            // The button counts as held until the release is delivered, so motion
            // in the release frame still extends the drag
            let primary_held = pointer.primary_down()
                || (self.pressed_in_canvas && pointer.primary_released());

            match pointer.hover_pos() {
                Some(pos) => {
                    let mut location = self.make_location(pos);
                    if !canvas_hovered && !self.pressed_in_canvas {
                        location.is_in_canvas = false;
                    }
                    // Drags that started on the canvas keep reporting moves outside of it
                    if Some(pos) != self.last_pointer_pos
                        && (location.is_in_canvas || self.pressed_in_canvas)
                    {
                        events.push(InputEvent::PointerMove {
                            location,
                            primary_held,
                        });
                    }
                    if self.was_in_canvas && !location.is_in_canvas {
                        events.push(InputEvent::PointerLeave);
                    }
                    self.was_in_canvas = location.is_in_canvas;
                    self.last_pointer_pos = Some(pos);
                }
                None => {
                    // Pointer left the window
                    if self.was_in_canvas {
                        events.push(InputEvent::PointerLeave);
                    }
                    self.was_in_canvas = false;
                    self.last_pointer_pos = None;
                }
            }

            if pointer.primary_released() && self.pressed_in_canvas {
                self.pressed_in_canvas = false;
                if let Some(pos) = pointer.interact_pos().or(self.last_pointer_pos) {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                    });
                }
            }
        });

        events
    }
}
