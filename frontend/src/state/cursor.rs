/// Fraction of the remaining distance the ring covers each frame.
pub const EASING: f64 = 0.15;
pub const SNAP_DISTANCE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorTracker {
    target: Point,
    ring: Point,
    pressed: bool,
    over_link: bool,
}

impl CursorTracker {
    pub fn new(start: Point) -> Self {
        Self { target: start, ring: start, pressed: false, over_link: false }
    }

    #[cfg(test)]
    pub fn target(&self) -> Point {
        self.target
    }

    #[cfg(test)]
    pub fn ring(&self) -> Point {
        self.ring
    }

    pub fn pointer_move(&mut self, to: Point) {
        self.target = to;
    }

    /// Returns true when the ring was snapped to the press.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        self.pressed = true;
        if self.ring.distance(at) > SNAP_DISTANCE {
            self.snap_to(at);
            return true;
        }
        false
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn set_over_link(&mut self, over_link: bool) {
        self.over_link = over_link;
    }

    pub fn snap_to(&mut self, at: Point) {
        self.target = at;
        self.ring = at;
    }

    pub fn frame(&mut self) {
        self.ring.x += (self.target.x - self.ring.x) * EASING;
        self.ring.y += (self.target.y - self.ring.y) * EASING;
    }

    pub fn dot_transform(&self) -> String {
        format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", self.target.x, self.target.y)
    }

    pub fn ring_transform(&self) -> String {
        let scale = if self.pressed { 0.8 } else { 1.0 };
        format!(
            "translate3d({}px, {}px, 0) translate(-50%, -50%) scale({})",
            self.ring.x, self.ring.y, scale
        )
    }

    pub fn ring_size(&self) -> &'static str {
        if self.over_link { "50px" } else { "30px" }
    }

    pub fn ring_border(&self) -> &'static str {
        if self.pressed { "1px solid rgba(255,255,255,0.5)" } else { "1px solid white" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_eases_toward_target() {
        let mut tracker = CursorTracker::new(Point::new(0.0, 0.0));
        tracker.pointer_move(Point::new(100.0, 0.0));
        tracker.frame();
        assert!((tracker.ring().x - 15.0).abs() < 1e-9);
        for _ in 0..200 {
            tracker.frame();
        }
        assert!((tracker.ring().x - 100.0).abs() < 1e-6);
    }

    #[test]
    fn far_press_snaps_near_press_does_not() {
        let mut tracker = CursorTracker::new(Point::new(0.0, 0.0));
        assert!(!tracker.pointer_down(Point::new(10.0, 10.0)));
        assert_eq!(tracker.ring(), Point::new(0.0, 0.0));

        assert!(tracker.pointer_down(Point::new(300.0, 40.0)));
        assert_eq!(tracker.ring(), Point::new(300.0, 40.0));
        assert_eq!(tracker.target(), Point::new(300.0, 40.0));
    }

    #[test]
    fn styles_follow_press_and_hover() {
        let mut tracker = CursorTracker::new(Point::new(5.0, 6.0));
        assert!(tracker.ring_transform().ends_with("scale(1)"));
        tracker.pointer_down(Point::new(5.0, 6.0));
        assert!(tracker.ring_transform().ends_with("scale(0.8)"));
        assert_eq!(tracker.ring_border(), "1px solid rgba(255,255,255,0.5)");
        tracker.pointer_up();
        tracker.set_over_link(true);
        assert_eq!(tracker.ring_size(), "50px");
        assert_eq!(tracker.dot_transform(), "translate3d(5px, 6px, 0) translate(-50%, -50%)");
    }
}
