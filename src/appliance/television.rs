use super::{Appliance, ApplianceCore};
use std::io;
use tracing::debug;
use uom::si::{f64::*, power::watt};

pub struct Television {
    core: ApplianceCore,
    screen_size: String,
}
impl Television {
    const NAME: &'static str = "Televisi";

    pub fn new(power: Power, screen_size: &str) -> Television {
        Television {
            core: ApplianceCore::new(Television::NAME, power),
            screen_size: screen_size.to_owned(),
        }
    }

    pub fn screen_size(&self) -> &str {
        &self.screen_size
    }

    fn speaker_power() -> Power {
        Power::new::<watt>(20.)
    }
}
impl Default for Television {
    fn default() -> Self {
        Television::new(Power::new::<watt>(100.), "32 inch")
    }
}
impl Appliance for Television {
    fn core(&self) -> &ApplianceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ApplianceCore {
        &mut self.core
    }

    fn activate(&self, out: &mut dyn io::Write) -> io::Result<()> {
        debug!(screen_size = %self.screen_size, "activating television");
        writeln!(
            out,
            "{} ukuran {} telah dihidupkan.",
            self.name(),
            self.screen_size
        )
    }

    /// The speakers draw power on top of the screen.
    fn consumption(&self, duration: Time) -> Energy {
        self.core.consumption(duration) + Television::speaker_power() * duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_about_eq;
    use uom::si::{energy::watt_hour, time::hour};

    #[test]
    fn default_television_has_expected_values() {
        let tv = Television::default();

        assert_eq!(tv.name(), "Televisi");
        assert_about_eq!(tv.power().get::<watt>(), 100.);
        assert_eq!(tv.screen_size(), "32 inch");
        assert!(tv.features().is_empty());
    }

    #[test]
    fn describes_itself_with_name_and_power() {
        assert_eq!(Television::default().describe(), "Televisi (Daya: 100W)");
    }

    #[test]
    fn consumption_includes_speaker_power() {
        let tv = television(80.);

        assert_about_eq!(
            tv.consumption(Time::new::<hour>(3.)).get::<watt_hour>(),
            80. * 3. + 20. * 3.
        );
    }

    #[test]
    fn default_television_with_features_consumes_600_watt_hours_in_5_hours() {
        let mut tv = Television::default();
        tv.add_feature(vec!["Smart TV", "4K Resolution"].into());

        assert_about_eq!(
            tv.consumption(Time::new::<hour>(5.)).get::<watt_hour>(),
            600.
        );
    }

    #[test]
    fn activation_mentions_screen_size() {
        let tv = Television::new(Power::new::<watt>(120.), "55 inch");
        let mut out = Vec::new();
        tv.activate(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Televisi ukuran 55 inch telah dihidupkan.\n"
        );
    }

    fn television(watts: f64) -> Television {
        Television::new(Power::new::<watt>(watts), "32 inch")
    }
}
