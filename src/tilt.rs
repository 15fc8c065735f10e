const ROTATE_Y_SPAN_DEG: f64 = 22.0;
const ROTATE_X_SPAN_DEG: f64 = 18.0;
const SETTLE_EPSILON_DEG: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn from_relative(rel_x: f64, rel_y: f64) -> Self {
        let rel_x = rel_x.clamp(0.0, 1.0);
        let rel_y = rel_y.clamp(0.0, 1.0);

        Self {
            x: (0.5 - rel_y) * ROTATE_X_SPAN_DEG,
            y: (rel_x - 0.5) * ROTATE_Y_SPAN_DEG,
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn is_close_to(self, other: Self) -> bool {
        (self.x - other.x).abs() < SETTLE_EPSILON_DEG && (self.y - other.y).abs() < SETTLE_EPSILON_DEG
    }

    pub fn card_style(self, prefers_reduced_motion: bool) -> String {
        let shown = if prefers_reduced_motion { Self::ZERO } else { self };
        format!(
            "--card-rotate-x: {}deg; --card-rotate-y: {}deg;",
            shown.x, shown.y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    fn is_measurable(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

pub fn pointer_tilt(
    rect: CardRect,
    client_x: f64,
    client_y: f64,
    prefers_reduced_motion: bool,
) -> Option<Tilt> {
    if prefers_reduced_motion || !rect.is_measurable() {
        return None;
    }

    let rel_x = (client_x - rect.left) / rect.width;
    let rel_y = (client_y - rect.top) / rect.height;
    let tilt = Tilt::from_relative(rel_x, rel_y);

    tilt.is_finite().then_some(tilt)
}

pub trait FrameHandle {
    fn cancel(self);
}

pub struct PendingFrame<H: FrameHandle> {
    handle: Option<H>,
}

impl<H: FrameHandle> PendingFrame<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    pub fn schedule(&mut self, handle: H) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.cancel();
        }
    }

    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// For use inside the frame callback: empties the slot without cancelling.
    pub fn settle(&mut self) -> Option<H> {
        self.handle.take()
    }
}

impl<H: FrameHandle> Default for PendingFrame<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: FrameHandle> Drop for PendingFrame<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
