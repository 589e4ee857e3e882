//! Target display width resolution for CDN requests.

/// Width used when neither a measurement nor a slot hint is available.
const DEFAULT_TARGET_WIDTH: f64 = 960.0;

/// Rendering slot an image occupies in the shell, used as a width fallback
/// when the element has not been laid out yet (width 0 at first paint).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    HeaderAvatar,
    AvatarFallback,
    ProfileLarge,
    UploadPreview,
    AmenityCard,
    PreviewFull,
    SearchResult,
    BuildingCard,
    TowerCard,
    FlatCard,
    BookingCard,
    ModalFlat,
    FlatGallery,
    AmenityModal,
}

impl ImageSlot {
    /// Typical rendered width of the slot, in css pixels.
    pub fn fallback_width(self) -> f64 {
        match self {
            Self::HeaderAvatar | Self::AvatarFallback => 96.0,
            Self::ProfileLarge => 260.0,
            Self::UploadPreview => 320.0,
            Self::AmenityCard => 420.0,
            Self::PreviewFull => 1600.0,
            Self::SearchResult | Self::BookingCard => 760.0,
            Self::BuildingCard | Self::TowerCard | Self::FlatCard => 900.0,
            Self::ModalFlat | Self::FlatGallery | Self::AmenityModal => 980.0,
        }
    }
}

/// Picks the physical width to request for an image.
///
/// A measured display width is scaled by the device pixel ratio, capped at
/// 2x so high-density phones do not fetch 3x assets. Unmeasured images fall
/// back to their slot's typical width.
pub fn resolve_target_width(
    display_width: f64,
    device_pixel_ratio: f64,
    slot: Option<ImageSlot>,
) -> f64 {
    if display_width.is_finite() && display_width > 0.0 {
        let ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(1.0, 2.0)
        } else {
            1.0
        };
        return display_width * ratio;
    }

    slot.map(ImageSlot::fallback_width)
        .unwrap_or(DEFAULT_TARGET_WIDTH)
}
