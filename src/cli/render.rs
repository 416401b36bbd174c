use crate::itinerary::Itinerary;
use crate::timeline::{parse_day, TimelineEntry};
use crate::trip::Place;

pub fn print_places(places: &[Place]) {
    println!("\nRecommended places:\n");
    for (idx, place) in places.iter().enumerate() {
        println!(
            "  {}. {} ({:.1}★) - {}",
            idx + 1,
            place.name,
            place.google_stars,
            place.place_type
        );
        println!("     {}", place.description);
    }
    println!();
}

pub fn print_itinerary(itinerary: &Itinerary) {
    for day in &itinerary.days {
        println!("\n=== {} ===", day.label());
        print_timeline(&day.schedule);
    }

    println!("\nEstimated total cost: {}", itinerary.estimated_total_cost);
    println!("\nAdvisories:");
    for advisory in &itinerary.advisories {
        println!("  - {}", advisory);
    }
}

pub fn print_timeline(schedule: &str) {
    let entries = parse_day(schedule);
    if entries.is_empty() {
        println!("  (no schedule available)");
        return;
    }
    for entry in entries {
        print_entry(&entry);
    }
}

pub fn print_entry(entry: &TimelineEntry) {
    match entry {
        TimelineEntry::DayHeader { label } => println!("  {}", label),
        TimelineEntry::Event(ev) => {
            match &ev.time {
                Some(time) => println!("  [{}] {}", time, ev.title),
                None => println!("  {}", ev.title),
            }
            for line in &ev.body {
                println!("      {}", line);
            }
            if let Some(cost) = &ev.cost {
                println!("      Cost: {}", cost);
            }
            if let Some(location) = &ev.location {
                println!("      Location: {}", location);
            }
            for stay in &ev.accommodations {
                println!("      Stay: {}", stay);
            }
            for eat in &ev.restaurants {
                println!("      Eat: {}", eat);
            }
        }
    }
}
