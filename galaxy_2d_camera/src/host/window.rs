use winit::dpi::PhysicalSize;

/// Current window size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if the window has no drawable area (winit reports 0x0 while minimized)
    pub fn is_minimized(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// width / height as f32. Not finite while the window is minimized.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl From<PhysicalSize<u32>> for WindowSize {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
