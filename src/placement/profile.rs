use crate::{
    foundation::core::{Point, Rect, Vec2},
    prompt::{classify::classify, keywords::Region},
};

/// Fixed placement rectangle and shadow offset in canonical 1024x1024 canvas units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryProfile {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
}

impl GeometryProfile {
    /// Centered placement used when no region keyword matches.
    pub const DEFAULT: GeometryProfile = GeometryProfile::new(300.0, 300.0, 400.0, 400.0, 5.0, 8.0);

    const fn new(x: f64, y: f64, width: f64, height: f64, sx: f64, sy: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            shadow_offset_x: sx,
            shadow_offset_y: sy,
        }
    }

    /// Placement profile for `region`.
    pub const fn for_region(region: Region) -> Self {
        match region {
            Region::Foot => Self::new(200.0, 700.0, 600.0, 250.0, 8.0, 12.0),
            Region::Ear => Self::new(600.0, 200.0, 300.0, 200.0, 5.0, 8.0),
            Region::Hand => Self::new(300.0, 600.0, 400.0, 300.0, 6.0, 10.0),
            Region::Head => Self::new(350.0, 100.0, 300.0, 250.0, 4.0, 6.0),
            Region::Torso => Self::new(250.0, 300.0, 500.0, 400.0, 7.0, 10.0),
            Region::Neck => Self::new(400.0, 250.0, 200.0, 150.0, 3.0, 5.0),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    pub fn shadow_offset(&self) -> Vec2 {
        Vec2::new(self.shadow_offset_x, self.shadow_offset_y)
    }

    /// Map this profile from canonical space onto a canvas of side `side`.
    pub fn scaled_to(&self, side: u32) -> Self {
        let k = f64::from(side) / 1024.0;
        Self::new(
            self.x * k,
            self.y * k,
            self.width * k,
            self.height * k,
            self.shadow_offset_x * k,
            self.shadow_offset_y * k,
        )
    }
}

/// Profile for an optional region; `None` selects [`GeometryProfile::DEFAULT`].
pub fn profile_for(region: Option<Region>) -> GeometryProfile {
    region
        .map(GeometryProfile::for_region)
        .unwrap_or(GeometryProfile::DEFAULT)
}

/// Classify `instruction` and return the single profile it selects.
pub fn resolve_profile(instruction: &str) -> GeometryProfile {
    profile_for(classify(instruction))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/profile.rs"]
mod tests;
