//! `show_choice` / `show_story`: open a host panel and wait for it to close.

use courtship_core::context::Context;
use courtship_core::signal::Signal;

use super::{Beat, BeatStatus};

/// Which host panel a [`PanelBeat`] opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// The choice panel; closed by `choice_made`.
    Choice,
    /// The story panel; closed by `story_continue`.
    Story,
}

impl Panel {
    fn closing_signal(self) -> Signal {
        match self {
            Self::Choice => Signal::ChoiceMade,
            Self::Story => Signal::StoryContinue,
        }
    }
}

/// Suspends the sequence until the panel's closing signal arrives.
///
/// There is no timeout: the host guarantees the panel eventually closes.
#[derive(Debug)]
pub struct PanelBeat {
    panel: Panel,
    closed: bool,
}

impl PanelBeat {
    /// Creates a beat for `panel`.
    #[must_use]
    pub fn new(panel: Panel) -> Self {
        Self {
            panel,
            closed: false,
        }
    }

    /// The panel this beat opens.
    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }
}

impl Beat for PanelBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        match self.panel {
            Panel::Choice => ctx.host.on_show_choice(),
            Panel::Story => ctx.host.on_show_story(),
        }
    }

    fn update(&mut self, _dt: f32, _ctx: &mut Context<'_>) -> BeatStatus {
        BeatStatus::from_done(self.closed)
    }

    fn finish(&mut self, _ctx: &mut Context<'_>) {}

    fn on_signal(&mut self, signal: &Signal) -> bool {
        if self.closed || *signal != self.panel.closing_signal() {
            return false;
        }
        self.closed = true;
        true
    }

    fn awaiting(&self) -> Option<Signal> {
        (!self.closed).then(|| self.panel.closing_signal())
    }
}
