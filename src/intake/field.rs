//! # Growable Prompt Field
//!
//! Sizing model for the multi-line prompt input: the field grows with its
//! content up to a ceiling, then scrolls. The rendered height is a pure
//! function of the content's natural extent and the viewport's device class;
//! this module never measures text itself; the rendering layer supplies the
//! unconstrained extent and writes the clamped result back to the widget.

/// Coarse viewport categorization. Narrow viewports get a lower floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

/// Pixel bounds for the growable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    /// Floor on narrow viewports.
    pub min_mobile: u16,
    /// Floor on regular viewports.
    pub min_desktop: u16,
    /// Ceiling, independent of device class.
    pub max: u16,
}

impl FieldLimits {
    /// The floor that applies to the given device class.
    pub fn min_for(&self, device: DeviceClass) -> u16 {
        match device {
            DeviceClass::Mobile => self.min_mobile,
            DeviceClass::Desktop => self.min_desktop,
        }
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            min_mobile: 24,
            min_desktop: 28,
            max: 200,
        }
    }
}

/// Clamp a natural content extent into the allowed band for a device class.
pub fn clamp_height(natural: u16, device: DeviceClass, limits: FieldLimits) -> u16 {
    natural.min(limits.max).max(limits.min_for(device))
}

/// Tracks the rendered height of the growable field across content edits and
/// device-class changes.
///
/// Both triggers recompute identically: an edit supplies a new natural
/// extent, a viewport change supplies a new floor. The stored height is
/// always `clamp_height` of the latest inputs.
#[derive(Debug, Clone)]
pub struct GrowField {
    limits: FieldLimits,
    device: DeviceClass,
    natural: u16,
    height: u16,
}

impl GrowField {
    /// An empty field sits exactly at the floor for its device class.
    pub fn new(device: DeviceClass) -> Self {
        Self::with_limits(device, FieldLimits::default())
    }

    pub fn with_limits(device: DeviceClass, limits: FieldLimits) -> Self {
        let mut field = Self {
            limits,
            device,
            natural: 0,
            height: 0,
        };
        field.recompute();
        field
    }

    /// The content changed; the rendering layer re-measured its natural
    /// extent. Returns the new clamped height.
    pub fn on_content_change(&mut self, natural: u16) -> u16 {
        self.natural = natural;
        self.recompute();
        self.height
    }

    /// The viewport crossed the device-class breakpoint. The floor moves, so
    /// the height is recomputed even though the content did not change.
    pub fn on_device_class_change(&mut self, device: DeviceClass) -> u16 {
        self.device = device;
        self.recompute();
        self.height
    }

    /// Current clamped height, in the same unit as the natural extent.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn limits(&self) -> FieldLimits {
        self.limits
    }

    fn recompute(&mut self) {
        self.height = clamp_height(self.natural, self.device, self.limits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_floor_is_24() {
        assert_eq!(clamp_height(10, DeviceClass::Mobile, FieldLimits::default()), 24);
        assert_eq!(clamp_height(0, DeviceClass::Mobile, FieldLimits::default()), 24);
    }

    #[test]
    fn test_desktop_floor_is_28() {
        assert_eq!(clamp_height(10, DeviceClass::Desktop, FieldLimits::default()), 28);
        assert_eq!(clamp_height(27, DeviceClass::Desktop, FieldLimits::default()), 28);
    }

    #[test]
    fn test_ceiling_is_200_for_both_classes() {
        assert_eq!(clamp_height(500, DeviceClass::Desktop, FieldLimits::default()), 200);
        assert_eq!(clamp_height(500, DeviceClass::Mobile, FieldLimits::default()), 200);
        assert_eq!(clamp_height(u16::MAX, DeviceClass::Mobile, FieldLimits::default()), 200);
    }

    #[test]
    fn test_identity_inside_the_band() {
        assert_eq!(clamp_height(50, DeviceClass::Desktop, FieldLimits::default()), 50);
        assert_eq!(clamp_height(200, DeviceClass::Mobile, FieldLimits::default()), 200);
        assert_eq!(clamp_height(24, DeviceClass::Mobile, FieldLimits::default()), 24);
    }

    #[test]
    fn test_result_always_within_bounds() {
        let limits = FieldLimits::default();
        for natural in [0u16, 1, 23, 24, 28, 100, 199, 200, 201, 1000, u16::MAX] {
            let mobile = clamp_height(natural, DeviceClass::Mobile, limits);
            assert!((24..=200).contains(&mobile), "mobile out of band: {mobile}");
            let desktop = clamp_height(natural, DeviceClass::Desktop, limits);
            assert!((28..=200).contains(&desktop), "desktop out of band: {desktop}");
        }
    }

    #[test]
    fn test_monotonic_in_natural_height() {
        let limits = FieldLimits::default();
        let mut previous = 0;
        for natural in 0..=400u16 {
            let height = clamp_height(natural, DeviceClass::Desktop, limits);
            assert!(height >= previous, "not monotonic at {natural}");
            previous = height;
        }
    }

    #[test]
    fn test_grow_field_starts_at_floor() {
        assert_eq!(GrowField::new(DeviceClass::Mobile).height(), 24);
        assert_eq!(GrowField::new(DeviceClass::Desktop).height(), 28);
    }

    #[test]
    fn test_grow_field_content_trigger() {
        let mut field = GrowField::new(DeviceClass::Desktop);
        assert_eq!(field.on_content_change(56), 56);
        assert_eq!(field.on_content_change(500), 200);
        assert_eq!(field.on_content_change(0), 28);
    }

    #[test]
    fn test_grow_field_device_trigger_recomputes_same_content() {
        let mut field = GrowField::new(DeviceClass::Desktop);
        field.on_content_change(25);
        assert_eq!(field.height(), 28);

        // Same content, lower floor: height follows the new class.
        assert_eq!(field.on_device_class_change(DeviceClass::Mobile), 25);
        assert_eq!(field.on_device_class_change(DeviceClass::Desktop), 28);
    }

    #[test]
    fn test_custom_limits() {
        let limits = FieldLimits {
            min_mobile: 1,
            min_desktop: 2,
            max: 8,
        };
        let mut field = GrowField::with_limits(DeviceClass::Mobile, limits);
        assert_eq!(field.height(), 1);
        assert_eq!(field.on_content_change(5), 5);
        assert_eq!(field.on_content_change(20), 8);
    }
}
