use crate::constants::DESKTOP_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerEvent {
    Toggle,
    Close,
    LinkActivated,
    EscapePressed,
    ViewportResized { width: f32 },
}

/// What the DOM should show for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerView {
    pub open: bool,
    pub body_locked: bool,
    pub aria_expanded: &'static str,
}

/// Mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Drawer {
    state: DrawerState,
}

impl Drawer {
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Apply an event; returns true when the state changed.
    pub fn handle(&mut self, event: DrawerEvent) -> bool {
        let next = match (self.state, event) {
            (DrawerState::Closed, DrawerEvent::Toggle) => DrawerState::Open,
            (DrawerState::Open, DrawerEvent::Toggle) => DrawerState::Closed,
            (_, DrawerEvent::Close | DrawerEvent::LinkActivated | DrawerEvent::EscapePressed) => {
                DrawerState::Closed
            }
            (state, DrawerEvent::ViewportResized { width }) => {
                if width >= DESKTOP_BREAKPOINT_PX {
                    DrawerState::Closed
                } else {
                    state
                }
            }
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn view(&self) -> DrawerView {
        let open = self.state == DrawerState::Open;
        DrawerView {
            open,
            body_locked: open,
            aria_expanded: if open { "true" } else { "false" },
        }
    }
}
