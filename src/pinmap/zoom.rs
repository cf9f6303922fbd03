/// Discrete map zoom step. Higher means closer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: ZoomLevel = ZoomLevel(1);
    pub const MAX: ZoomLevel = ZoomLevel(3);

    /// Build a zoom level, clamping into the supported range.
    pub fn new(level: u8) -> Self {
        ZoomLevel(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// One step closer, saturating at [`ZoomLevel::MAX`].
    pub fn zoom_in(self) -> Self {
        ZoomLevel((self.0 + 1).min(Self::MAX.0))
    }

    /// One step out, saturating at [`ZoomLevel::MIN`].
    pub fn zoom_out(self) -> Self {
        ZoomLevel((self.0 - 1).max(Self::MIN.0))
    }

    /// Grid cell size in viewport percent, or `None` at max zoom where
    /// clustering is disabled. Coarser cells at lower zoom.
    pub fn cell_size(self) -> Option<f64> {
        match self.0 {
            1 => Some(25.0),
            2 => Some(12.0),
            _ => None,
        }
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::MIN
    }
}
