//! Smart street layout.
//!
//! A [`SmartStreet`] can only be obtained from a [`SmartStreetBuilder`]:
//!
//! ```rust
//! use city_infra::SmartStreetBuilder;
//!
//! let street = SmartStreetBuilder::new()
//!     .lamps(35)
//!     .cameras(12)
//!     .solar_panels(20)
//!     .build();
//! assert_eq!(street.info(), "Lamps: 35 | Cameras: 12 | Solar panels: 20");
//! ```

/// Equipment installed along one street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartStreet {
    lamps: u32,
    cameras: u32,
    solar_panels: u32,
}

impl SmartStreet {
    /// Number of street lamps.
    #[must_use]
    pub fn lamps(&self) -> u32 {
        self.lamps
    }

    /// Number of surveillance cameras.
    #[must_use]
    pub fn cameras(&self) -> u32 {
        self.cameras
    }

    /// Number of solar panels.
    #[must_use]
    pub fn solar_panels(&self) -> u32 {
        self.solar_panels
    }

    /// One-line summary of the installed equipment.
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "Lamps: {} | Cameras: {} | Solar panels: {}",
            self.lamps, self.cameras, self.solar_panels
        )
    }
}

/// Builder for [`SmartStreet`]. Every count starts at zero; setting a count
/// again overwrites it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SmartStreetBuilder {
    lamps: u32,
    cameras: u32,
    solar_panels: u32,
}

impl SmartStreetBuilder {
    /// Start an empty street.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of lamps.
    #[must_use]
    pub fn lamps(mut self, n: u32) -> Self {
        self.lamps = n;
        self
    }

    /// Set the number of cameras.
    #[must_use]
    pub fn cameras(mut self, n: u32) -> Self {
        self.cameras = n;
        self
    }

    /// Set the number of solar panels.
    #[must_use]
    pub fn solar_panels(mut self, n: u32) -> Self {
        self.solar_panels = n;
        self
    }

    /// Finish the street.
    #[must_use]
    pub fn build(self) -> SmartStreet {
        SmartStreet {
            lamps: self.lamps,
            cameras: self.cameras,
            solar_panels: self.solar_panels,
        }
    }
}
