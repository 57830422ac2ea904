use super::{Appliance, ApplianceCore};
use std::io;
use tracing::debug;
use uom::si::{f64::*, power::watt};

pub struct Refrigerator {
    core: ApplianceCore,
    kind: String,
}
impl Refrigerator {
    const NAME: &'static str = "Kulkas";

    pub fn new(power: Power, kind: &str) -> Refrigerator {
        Refrigerator {
            core: ApplianceCore::new(Refrigerator::NAME, power),
            kind: kind.to_owned(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}
impl Default for Refrigerator {
    fn default() -> Self {
        Refrigerator::new(Power::new::<watt>(150.), "2 Pintu")
    }
}
impl Appliance for Refrigerator {
    fn core(&self) -> &ApplianceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ApplianceCore {
        &mut self.core
    }

    fn activate(&self, out: &mut dyn io::Write) -> io::Result<()> {
        debug!(kind = %self.kind, "activating refrigerator");
        writeln!(out, "{} tipe {} telah dihidupkan.", self.name(), self.kind)
    }
}
