mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::SketchEvent;
pub use handlers::{LogEventHandler, RepaintEventHandler};

/// Trait for types that want to be notified after the sketch changes
pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}
