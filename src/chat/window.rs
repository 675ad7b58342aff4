//! Open/closed/expanded state of the chat window and its drag-resize maths.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChatWindow {
    #[default]
    Closed,
    Normal,
    Expanded,
}

impl ChatWindow {
    pub fn is_open(self) -> bool {
        self != ChatWindow::Closed
    }

    pub fn is_expanded(self) -> bool {
        self == ChatWindow::Expanded
    }

    /// Opening always lands in normal size.
    pub fn open(self) -> Self {
        ChatWindow::Normal
    }

    pub fn close(self) -> Self {
        ChatWindow::Closed
    }

    pub fn toggle_expand(self) -> Self {
        match self {
            ChatWindow::Normal => ChatWindow::Expanded,
            ChatWindow::Expanded => ChatWindow::Normal,
            ChatWindow::Closed => ChatWindow::Closed,
        }
    }
}

pub const MIN_WIDTH: i32 = 320;
pub const MAX_WIDTH: i32 = 600;
pub const MIN_HEIGHT: i32 = 400;
pub const MAX_HEIGHT: i32 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ChatSize {
    fn default() -> Self {
        Self { width: 400, height: 550 }
    }
}

/// Pointer position and size captured when a corner drag begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeGrip {
    pub start_x: i32,
    pub start_y: i32,
    pub start: ChatSize,
}

impl ChatSize {
    pub fn grip(self, x: i32, y: i32) -> ResizeGrip {
        ResizeGrip { start_x: x, start_y: y, start: self }
    }

    /// The handle sits on the top-left corner, so dragging left/up grows the window.
    pub fn resized(grip: &ResizeGrip, x: i32, y: i32) -> Self {
        let dx = grip.start_x - x;
        let dy = grip.start_y - y;
        Self {
            width: (grip.start.width + dx).clamp(MIN_WIDTH, MAX_WIDTH),
            height: (grip.start.height + dy).clamp(MIN_HEIGHT, MAX_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_twice_round_trips() {
        let start = ChatWindow::Closed.open();
        assert_eq!(start, ChatWindow::Normal);
        let expanded = start.toggle_expand();
        assert!(expanded.is_expanded());
        assert_eq!(expanded.toggle_expand(), start);
    }

    #[test]
    fn open_resets_to_normal() {
        assert_eq!(ChatWindow::Expanded.close().open(), ChatWindow::Normal);
        assert!(!ChatWindow::Expanded.close().is_open());
    }

    #[test]
    fn closed_window_ignores_expand() {
        assert_eq!(ChatWindow::Closed.toggle_expand(), ChatWindow::Closed);
    }

    #[test]
    fn resize_grows_toward_top_left() {
        let grip = ChatSize::default().grip(1000, 700);
        let size = ChatSize::resized(&grip, 950, 620);
        assert_eq!(size, ChatSize { width: 450, height: 630 });
    }

    #[test]
    fn resize_clamps_to_bounds() {
        let grip = ChatSize::default().grip(500, 500);
        assert_eq!(
            ChatSize::resized(&grip, -2000, -2000),
            ChatSize { width: MAX_WIDTH, height: MAX_HEIGHT }
        );
        assert_eq!(
            ChatSize::resized(&grip, 5000, 5000),
            ChatSize { width: MIN_WIDTH, height: MIN_HEIGHT }
        );
    }
}
