use std::{fmt, io};
use tracing::info;
use uom::si::{f64::*, power::watt};

mod refrigerator;
pub use refrigerator::Refrigerator;

mod television;
pub use television::Television;

/// The features to add to an appliance in one go.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureInput {
    None,
    Single(String),
    Many(Vec<String>),
}
impl From<&str> for FeatureInput {
    fn from(feature: &str) -> Self {
        FeatureInput::Single(feature.to_owned())
    }
}
impl From<String> for FeatureInput {
    fn from(feature: String) -> Self {
        FeatureInput::Single(feature)
    }
}
impl From<Vec<&str>> for FeatureInput {
    fn from(features: Vec<&str>) -> Self {
        FeatureInput::Many(features.into_iter().map(str::to_owned).collect())
    }
}
impl From<Vec<String>> for FeatureInput {
    fn from(features: Vec<String>) -> Self {
        FeatureInput::Many(features)
    }
}
impl<T: Into<FeatureInput>> From<Option<T>> for FeatureInput {
    fn from(features: Option<T>) -> Self {
        match features {
            Some(features) => features.into(),
            None => FeatureInput::None,
        }
    }
}

/// State shared by every kind of appliance.
#[derive(Debug)]
pub struct ApplianceCore {
    name: String,
    power: Power,
    features: Vec<String>,
}
impl ApplianceCore {
    pub fn new(name: &str, power: Power) -> ApplianceCore {
        ApplianceCore {
            name: name.to_owned(),
            power,
            features: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> Power {
        self.power
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// The energy used when running at the rated power for the given duration.
    pub fn consumption(&self, duration: Time) -> Energy {
        self.power * duration
    }

    pub fn add_feature(&mut self, feature: FeatureInput) {
        match feature {
            FeatureInput::None => info!(appliance = %self.name, "Tidak ada fitur tambahan"),
            FeatureInput::Single(feature) => self.features.push(feature),
            FeatureInput::Many(features) => self.features.extend(features),
        }
    }
}
impl fmt::Display for ApplianceCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Daya: {}W)",
            self.name,
            displayable(self.power.get::<watt>())
        )
    }
}

/// Snaps a value lying within conversion error of a whole number onto it.
pub(crate) fn displayable(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        rounded
    } else {
        value
    }
}

pub trait Appliance {
    fn core(&self) -> &ApplianceCore;
    fn core_mut(&mut self) -> &mut ApplianceCore;

    /// Switches the appliance on, announcing it on the given output.
    fn activate(&self, out: &mut dyn io::Write) -> io::Result<()>;

    fn name(&self) -> &str {
        self.core().name()
    }

    fn power(&self) -> Power {
        self.core().power()
    }

    fn features(&self) -> &[String] {
        self.core().features()
    }

    fn consumption(&self, duration: Time) -> Energy {
        self.core().consumption(duration)
    }

    fn add_feature(&mut self, feature: FeatureInput) {
        self.core_mut().add_feature(feature);
    }

    fn describe(&self) -> String {
        self.core().to_string()
    }
}
