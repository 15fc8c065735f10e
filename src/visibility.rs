pub const VISIBLE_RATIO: f64 = 0.15;
pub const OBSERVER_THRESHOLDS: [f64; 5] = [0.0, 0.15, 0.35, 0.6, 1.0];
pub const OBSERVER_ROOT_MARGIN: &str = "-10% 0px";

pub fn is_section_visible(is_intersecting: bool, intersection_ratio: f64) -> bool {
    is_intersecting && intersection_ratio > VISIBLE_RATIO
}
