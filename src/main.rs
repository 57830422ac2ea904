use appliances::{operate_appliances, Appliance, Refrigerator, Television};
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uom::si::{f64::*, time::hour};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let mut tv = Television::default();
    let mut fridge = Refrigerator::default();

    tv.add_feature(vec!["Smart TV", "4K Resolution"].into());
    fridge.add_feature(vec!["Ice Maker", "Energy Efficient"].into());

    let stdout = io::stdout();
    operate_appliances(&[&tv, &fridge], Time::new::<hour>(5.), &mut stdout.lock())?;

    Ok(())
}

/// Logs go to stderr, leaving stdout to the operation report.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .try_init()?;

    Ok(())
}
