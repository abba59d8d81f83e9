use std::cell::RefCell;
use std::rc::Rc;

use egui::Pos2;
use sticker_sketchpad::command::{Command, Preview};
use sticker_sketchpad::event::{EventHandler, SketchEvent};
use sticker_sketchpad::input::{InputEvent, InputLocation};
use sticker_sketchpad::{Session, SketchpadConfig, StickerPlacement, ToolType};

fn create_session() -> Session {
    Session::from_config(&SketchpadConfig::default())
}

fn at(x: f32, y: f32) -> InputLocation {
    InputLocation::inside(Pos2::new(x, y))
}

fn drag(session: &mut Session, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    session.pointer_down(at(first.0, first.1));
    for (x, y) in rest {
        session.pointer_move(at(*x, *y), true);
    }
    let (x, y) = points.last().unwrap();
    session.pointer_up(at(*x, *y));
}

struct Recorder(Rc<RefCell<Vec<SketchEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &SketchEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

#[test]
fn test_drag_records_stroke() {
    let mut session = create_session();
    drag(&mut session, &[(10.0, 10.0), (20.0, 10.0), (30.0, 10.0)]);

    let done = session.history().done();
    assert_eq!(done.len(), 1);
    let stroke = done[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0), Pos2::new(30.0, 10.0)]
    );
    assert_eq!(stroke.width(), 1.0);
}

#[test]
fn test_undo_redo_buttons() {
    let mut session = create_session();
    drag(&mut session, &[(10.0, 10.0), (20.0, 20.0)]);

    assert!(session.undo());
    assert!(session.history().done().is_empty());
    assert_eq!(session.history().undone().len(), 1);

    assert!(session.redo());
    assert_eq!(session.history().done().len(), 1);
    assert!(session.history().undone().is_empty());
}

#[test]
fn test_new_stroke_drops_undone_stroke() {
    let mut session = create_session();
    drag(&mut session, &[(10.0, 10.0), (20.0, 20.0)]);
    session.undo();
    drag(&mut session, &[(50.0, 50.0), (60.0, 50.0)]);

    assert!(session.history().undone().is_empty());
    assert_eq!(session.history().done().len(), 1);
    let stroke = session.history().done()[0].as_stroke().unwrap();
    assert_eq!(stroke.points()[0], Pos2::new(50.0, 50.0));
}

#[test]
fn test_click_without_drag_adds_nothing() {
    let mut session = create_session();
    drag(&mut session, &[(10.0, 10.0), (20.0, 20.0)]);
    let before = session.history().done().to_vec();

    session.pointer_down(at(40.0, 40.0));
    session.pointer_up(at(40.0, 40.0));

    assert_eq!(session.history().done(), before.as_slice());
    assert!(!session.state().is_dragging());
}

#[test]
fn test_sticker_click_places_sticker() {
    let mut session = create_session();
    session.select_sticker("⭐");
    session.pointer_down(at(50.0, 50.0));
    session.pointer_up(at(50.0, 50.0));

    assert_eq!(
        session.history().done(),
        &[Command::PlaceSticker(StickerPlacement::new(Pos2::new(50.0, 50.0), "⭐"))]
    );
}

#[test]
fn test_sticker_drag_repositions_before_release() {
    let mut session = create_session();
    session.select_sticker("💖");
    session.pointer_down(at(10.0, 10.0));
    session.pointer_move(at(15.0, 12.0), true);
    session.pointer_move(at(40.0, 30.0), true);
    session.pointer_up(at(40.0, 30.0));

    assert_eq!(session.history().done(), &[Command::sticker(Pos2::new(40.0, 30.0), "💖")]);
}

#[test]
fn test_width_fixed_at_stroke_start() {
    let mut session = create_session();
    session.select_marker(4.0);
    drag(&mut session, &[(0.0, 0.0), (10.0, 10.0)]);
    session.select_marker(1.0);

    assert_eq!(session.history().done()[0].as_stroke().unwrap().width(), 4.0);
}

#[test]
fn test_hover_shows_preview_for_active_tool() {
    let mut session = create_session();
    session.pointer_move(at(20.0, 20.0), false);
    assert_eq!(session.preview(), Some(&Preview::tool(Pos2::new(20.0, 20.0), 1.0)));
    assert!(session.history().is_empty());

    // Selecting a tool recomputes the preview right away
    session.select_sticker("😊");
    assert_eq!(session.preview(), Some(&Preview::sticker(Pos2::new(20.0, 20.0), "😊")));

    session.select_marker(4.0);
    assert_eq!(session.preview(), Some(&Preview::tool(Pos2::new(20.0, 20.0), 4.0)));
}

#[test]
fn test_preview_hidden_while_dragging_and_after_leave() {
    let mut session = create_session();
    session.pointer_move(at(5.0, 5.0), false);
    assert!(session.preview().is_some());

    session.pointer_down(at(5.0, 5.0));
    assert!(session.preview().is_none());
    session.pointer_move(at(6.0, 6.0), true);
    assert!(session.preview().is_none());

    session.pointer_up(at(6.0, 6.0));
    assert_eq!(session.preview(), Some(&Preview::tool(Pos2::new(6.0, 6.0), 1.0)));

    session.pointer_leave();
    assert!(session.preview().is_none());
}

#[test]
fn test_drag_continues_outside_canvas() {
    let mut session = create_session();
    session.pointer_down(at(250.0, 10.0));
    session.handle_input(&InputEvent::PointerLeave);
    session.handle_input(&InputEvent::PointerMove {
        location: InputLocation::outside(Pos2::new(270.0, 10.0)),
        primary_held: true,
    });
    session.handle_input(&InputEvent::PointerUp {
        location: InputLocation::outside(Pos2::new(270.0, 10.0)),
    });

    let stroke = session.history().done()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 2);
    // Released outside: no preview
    assert!(session.preview().is_none());
}

#[test]
fn test_missed_release_finishes_drag() {
    let mut session = create_session();
    session.pointer_down(at(10.0, 10.0));
    // Button already up when the next move arrives
    session.pointer_move(at(20.0, 20.0), false);

    assert!(!session.state().is_dragging());
    assert!(session.history().is_empty());
}

#[test]
fn test_clear_is_undoable() {
    let mut session = create_session();
    drag(&mut session, &[(10.0, 10.0), (20.0, 20.0)]);
    session.select_sticker("⭐");
    session.pointer_down(at(30.0, 30.0));
    session.pointer_up(at(30.0, 30.0));
    let drawn = session.history().done().to_vec();

    assert!(session.clear());
    assert_eq!(session.history().top(), Some(&Command::Clear));
    // A second clear has nothing to wipe
    assert!(!session.clear());

    assert!(session.undo());
    assert_eq!(session.history().done(), drawn.as_slice());
}

#[test]
fn test_add_sticker_entry() {
    let mut session = create_session();
    assert_eq!(session.add_sticker(Some("🧽")), Some("🧽".to_owned()));
    assert_eq!(session.add_sticker(None), None);
    assert_eq!(session.add_sticker(Some("")), None);
    assert_eq!(session.tools().stickers().glyphs(), &["😊", "💖", "⭐", "🧽"]);
    // Adding does not change the active tool
    assert!(session.tools().is_active(&ToolType::marker(1.0)));
}

#[test]
fn test_every_change_is_announced() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut session = create_session();
    session.subscribe(Box::new(Recorder(events.clone())));

    drag(&mut session, &[(10.0, 10.0), (20.0, 20.0)]);
    session.undo();
    session.undo(); // nothing left, no event
    session.select_sticker("⭐");

    let events = events.borrow();
    assert_eq!(
        *events,
        vec![
            SketchEvent::DrawingChanged, // down
            SketchEvent::DrawingChanged, // move
            SketchEvent::ToolMoved,      // up shows the preview
            SketchEvent::DrawingChanged, // undo
            SketchEvent::ToolChanged {
                tool: "Sticker ⭐".to_owned()
            },
            SketchEvent::ToolMoved,
        ]
    );
}
