//! Trigger events and event-interest flags.

use bitflags::bitflags;

/// A trigger event forwarded by the host platform's input system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The pointer moved onto the element.
    PointerEnter,
    /// The pointer left the element.
    PointerLeave,
    /// The element received input focus.
    FocusGained,
    /// The element lost input focus.
    FocusLost,
    /// The viewport was resized to the given width in pixels.
    Resize { width: u32 },
}

bitflags! {
    /// The trigger events a condition layer asks the host to forward.
    ///
    /// Layers re-declare their bindings on every render; the host wires the
    /// union of a stack's bindings to its input system.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Bindings: u8 {
        const POINTER = 1 << 0;
        const FOCUS = 1 << 1;
        const RESIZE = 1 << 2;
    }
}

impl Event {
    /// The binding class this event is delivered under.
    pub fn binding(&self) -> Bindings {
        match self {
            Event::PointerEnter | Event::PointerLeave => Bindings::POINTER,
            Event::FocusGained | Event::FocusLost => Bindings::FOCUS,
            Event::Resize { .. } => Bindings::RESIZE,
        }
    }
}
