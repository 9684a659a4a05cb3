// Pointer adapter: maps DOM-style pointer/touch events onto surface-local coordinates.

use serde::Deserialize;

/// Viewport-space bounding box of the drawing surface element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClientPoint {
    pub x: f32,
    pub y: f32,
}

/// Raw pointer event as delivered by the host page.
///
/// Touch events carry `touch`, mouse events carry `mouse`; either may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct PointerEvent {
    #[serde(default)]
    pub touch: Option<ClientPoint>,
    #[serde(default)]
    pub mouse: Option<ClientPoint>,
}

/// Current placement of the surface element plus its backing-store density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub rect: BoundingRect,
    pub device_pixel_ratio: f32,
}

impl SurfaceGeometry {
    pub fn new(rect: BoundingRect, device_pixel_ratio: f32) -> Self {
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            rect,
            device_pixel_ratio,
        }
    }

    /// Backing-store size in device pixels, as a canvas would be sized.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.rect.width * self.device_pixel_ratio).round().max(0.0) as u32,
            (self.rect.height * self.device_pixel_ratio).round().max(0.0) as u32,
        )
    }

    /// Converts a pointer event into surface coordinates (CSS pixels).
    ///
    /// Touch wins over mouse. Returns `None` when the event carries no coordinate or
    /// the surface has no area.
    pub fn to_surface(&self, event: &PointerEvent) -> Option<(f32, f32)> {
        let point = event.touch.or(event.mouse)?;
        let rect = self.rect;
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }

        // Scale through the backing store so rounding matches what is on screen.
        let (backing_w, backing_h) = self.backing_size();
        let device_x = (point.x - rect.left) * backing_w as f32 / rect.width;
        let device_y = (point.y - rect.top) * backing_h as f32 / rect.height;
        Some((
            device_x / self.device_pixel_ratio,
            device_y / self.device_pixel_ratio,
        ))
    }
}
