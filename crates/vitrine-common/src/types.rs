use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for rounding error when fraction sums are compared against 1.0.
const FRAC_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u32);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Rectangle in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Sub-rectangle of a window expressed as unit fractions of its size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FracRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FracRect {
    pub const FULL: FracRect = FracRect {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Origin inside the unit square, positive size, and the far edges
    /// must not extend past 1.0.
    pub fn is_valid(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width > 0.0
            && self.height > 0.0
            && self.x + self.width <= 1.0 + FRAC_EPSILON
            && self.y + self.height <= 1.0 + FRAC_EPSILON
    }

    /// Shared edges do not count as overlap.
    pub fn overlaps(&self, other: &FracRect) -> bool {
        self.x + FRAC_EPSILON < other.x + other.width
            && other.x + FRAC_EPSILON < self.x + self.width
            && self.y + FRAC_EPSILON < other.y + other.height
            && other.y + FRAC_EPSILON < self.y + self.height
    }

    pub fn to_pixels(&self, width: u32, height: u32) -> Rect {
        Rect {
            x: self.x as f64 * width as f64,
            y: self.y as f64 * height as f64,
            width: self.width as f64 * width as f64,
            height: self.height as f64 * height as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_id_display() {
        let id = ViewId(42);
        assert_eq!(id.to_string(), "view-42");
    }

    #[test]
    fn view_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ViewId(1));
        set.insert(ViewId(2));
        set.insert(ViewId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn view_id_serialization() {
        let id = ViewId(7);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ViewId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn rect_contains() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(109.0, 69.0));
        assert!(!r.contains(110.0, 20.0));
        assert!(!r.contains(10.0, 70.0));
        assert!(!r.contains(9.0, 20.0));
    }

    #[test]
    fn frac_rect_full_is_valid() {
        assert!(FracRect::FULL.is_valid());
    }

    #[test]
    fn frac_rect_halves_are_valid() {
        assert!(FracRect::new(0.0, 0.0, 0.5, 1.0).is_valid());
        assert!(FracRect::new(0.5, 0.0, 0.5, 1.0).is_valid());
    }

    #[test]
    fn frac_rect_out_of_bounds_is_invalid() {
        assert!(!FracRect::new(0.6, 0.0, 0.5, 1.0).is_valid());
        assert!(!FracRect::new(-0.1, 0.0, 0.5, 1.0).is_valid());
        assert!(!FracRect::new(0.0, 0.5, 1.0, 0.6).is_valid());
    }

    #[test]
    fn frac_rect_degenerate_is_invalid() {
        assert!(!FracRect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!FracRect::new(0.0, 0.0, 1.0, 0.0).is_valid());
        assert!(!FracRect::new(0.0, 0.0, -0.5, 1.0).is_valid());
    }

    #[test]
    fn frac_rect_shared_edge_does_not_overlap() {
        let left = FracRect::new(0.0, 0.0, 0.5, 1.0);
        let right = FracRect::new(0.5, 0.0, 0.5, 1.0);
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
    }

    #[test]
    fn frac_rect_overlap_detected() {
        let left = FracRect::new(0.0, 0.0, 0.6, 1.0);
        let right = FracRect::new(0.5, 0.0, 0.5, 1.0);
        assert!(left.overlaps(&right));
        assert!(right.overlaps(&left));
    }

    #[test]
    fn frac_rect_disjoint_rows_do_not_overlap() {
        let top = FracRect::new(0.0, 0.0, 1.0, 0.5);
        let bottom = FracRect::new(0.0, 0.5, 1.0, 0.5);
        assert!(!top.overlaps(&bottom));
    }

    #[test]
    fn frac_rect_to_pixels() {
        let r = FracRect::new(0.5, 0.0, 0.5, 1.0).to_pixels(800, 600);
        assert_eq!(r.x, 400.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.width, 400.0);
        assert_eq!(r.height, 600.0);
    }

    #[test]
    fn frac_rect_serialization() {
        let r = FracRect::new(0.25, 0.0, 0.75, 1.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: FracRect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_roundtrip_hex() {
        let original = Color::from_rgba(171, 205, 239, 255);
        let hex = original.to_hex();
        let parsed = Color::from_hex(&hex).unwrap();
        assert_eq!(original, parsed);
    }
}
