use super::render::print_itinerary;
use super::ShowArgs;
use crate::config::Config;
use crate::store::Store;
use anyhow::bail;

pub fn execute(args: ShowArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let store = Store::new(&config.data_dir);

    let Some(itinerary) = store.load_itinerary()? else {
        bail!("no stored itinerary. Run `tripflow plan` first");
    };

    if let Some(summary) = store.load_trip_summary()? {
        println!(
            "Trip to {} ({}) - {} adults, {} kids",
            summary.destination, summary.travel_dates, summary.adults, summary.kids
        );
    }

    print_itinerary(&itinerary);
    Ok(())
}
