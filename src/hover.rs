//! Magnetic hover effect of the navigation buttons
//!
//! This only decides *what* the button should animate to. Running the tween is left to the page.

use std::fmt::{Display, Formatter};

/// A bounding box, in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Easing curves used by the effect
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Applied instantly
    None,
    Power2Out,
    ElasticOut { amplitude: f64, period: f64 },
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Easing::None => write!(f, "none"),
            Easing::Power2Out => write!(f, "power2.out"),
            Easing::ElasticOut { amplitude, period } => write!(f, "elastic.out({}, {})", amplitude, period),
        }
    }
}

/// The state a button should be animated to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub easing: Easing,
    pub duration_secs: f64,
    /// `None` leaves the stacking order as it is
    pub z_index: Option<i32>,
}

impl Transform {
    /// Back to rest, instantly. The stacking order is not touched
    pub fn reset() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0, easing: Easing::None, duration_secs: 0.0, z_index: None }
    }
}

/// What a pointer move triggers
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverAction {
    /// The pointer is close: follow it
    Hover(Transform),
    /// The pointer just moved away
    Leave(Transform),
}

const IDLE_RADIUS: f64 = 0.5;
/// Once hovering, the button lets go a bit further away than where it caught the pointer
const HOVERING_RADIUS: f64 = 0.7;
const PULL: f64 = 0.4;
const HOVER_SCALE: f64 = 1.15;

/// A button that is attracted by the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct HoverButton {
    center_x: f64,
    center_y: f64,
    width: f64,
    height: f64,
    hovering: bool,
}

impl HoverButton {
    pub fn new(rect: Rect) -> Self {
        let mut button = Self { center_x: 0.0, center_y: 0.0, width: 0.0, height: 0.0, hovering: false };
        button.measure(rect);
        button
    }

    /// Recompute the position after a layout change (resize, fonts loaded...).
    ///
    /// `rect` must be measured with the button at rest: apply the returned transform first.
    pub fn measure(&mut self, rect: Rect) -> Transform {
        self.center_x = rect.left + rect.width * 0.5;
        self.center_y = rect.top + rect.height * 0.5;
        self.width = rect.width;
        self.height = rect.height;
        Transform::reset()
    }

    /// Whether the last measure looks wrong (e.g. it was taken before the layout was done)
    pub fn needs_measure(&self) -> bool {
        self.width == 0.0 || self.center_x.is_nan() || self.center_y.is_nan()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Option<HoverAction> {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        let radius = if self.hovering { HOVERING_RADIUS } else { IDLE_RADIUS };

        if distance < self.width * radius {
            self.hovering = true;
            return Some(HoverAction::Hover(Transform {
                x: dx * PULL,
                y: dy * PULL,
                scale: HOVER_SCALE,
                easing: Easing::Power2Out,
                duration_secs: 0.4,
                z_index: Some(10),
            }));
        }

        if self.hovering {
            self.hovering = false;
            return Some(HoverAction::Leave(Transform {
                x: 0.0,
                y: 0.0,
                scale: 1.0,
                easing: Easing::ElasticOut { amplitude: 1.2, period: 0.4 },
                duration_secs: 0.7,
                z_index: Some(1),
            }));
        }
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> HoverButton {
        // Centered on (150, 120), 100px wide
        HoverButton::new(Rect { left: 100.0, top: 100.0, width: 100.0, height: 40.0 })
    }

    #[test]
    fn far_pointer_does_nothing() {
        let mut b = button();
        assert_eq!(b.pointer_moved(400.0, 400.0), None);
        assert!(b.is_hovering() == false);
    }

    #[test]
    fn hover_follows_the_pointer() {
        let mut b = button();
        match b.pointer_moved(170.0, 110.0) {
            Some(HoverAction::Hover(t)) => {
                assert!((t.x - 8.0).abs() < 1e-9);
                assert!((t.y + 4.0).abs() < 1e-9);
                assert_eq!(t.scale, 1.15);
                assert_eq!(t.z_index, Some(10));
                assert_eq!(t.easing.to_string(), "power2.out");
            },
            other => panic!("Unexpected action {:?}", other),
        }
    }

    #[test]
    fn leaving_uses_a_wider_radius() {
        let mut b = button();
        // 60px away: outside the idle radius (50px)
        assert_eq!(b.pointer_moved(210.0, 120.0), None);

        assert!(matches!(b.pointer_moved(190.0, 120.0), Some(HoverAction::Hover(_))));
        // Still caught at 60px, since the hovering radius is 70px
        assert!(matches!(b.pointer_moved(210.0, 120.0), Some(HoverAction::Hover(_))));

        match b.pointer_moved(230.0, 120.0) {
            Some(HoverAction::Leave(t)) => {
                assert_eq!((t.x, t.y, t.scale, t.z_index), (0.0, 0.0, 1.0, Some(1)));
                assert_eq!(t.easing.to_string(), "elastic.out(1.2, 0.4)");
            },
            other => panic!("Unexpected action {:?}", other),
        }
        // Leaving is only reported once
        assert_eq!(b.pointer_moved(230.0, 120.0), None);
    }

    #[test]
    fn unmeasured_buttons() {
        let mut b = HoverButton::new(Rect::default());
        assert!(b.needs_measure());
        assert_eq!(b.pointer_moved(0.0, 0.0), None);

        let reset = b.measure(Rect { left: 0.0, top: 0.0, width: 80.0, height: 30.0 });
        assert_eq!(reset, Transform::reset());
        assert_eq!((reset.x, reset.y, reset.scale, reset.z_index), (0.0, 0.0, 1.0, None));
        assert!(b.needs_measure() == false);
    }
}
