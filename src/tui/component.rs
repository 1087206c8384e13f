use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something Tally draws into a region of the screen.
///
/// Data arrives as props: plain fields copied in from `App` and `TuiState`
/// right before the frame is drawn. `render` borrows `&mut self` so the
/// expense list can scroll its `ListState` to keep the selection visible.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A widget that owns keyboard input while focused.
///
/// Key presses go in as `TuiEvent`s; what comes out is the widget's own
/// vocabulary (`FieldEvent`, `ListEvent`), which the event loop turns into
/// core `Action`s.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
