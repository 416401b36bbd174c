use super::render::{print_itinerary, print_places};
use super::PlanArgs;
use crate::agent::AgentClient;
use crate::config::Config;
use crate::engine::{Collaborators, EntryMode, PlannerEngine, Sender};
use crate::flows::HttpFlowClient;
use crate::store::Store;
use crate::trip::{Budget, ClarifiedDetails, TripType};
use anyhow::{bail, Context};
use std::io::Read;
use std::time::Duration;
use tracing::info;

pub async fn execute(args: PlanArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let timeout = Duration::from_secs(config.timeout_sec);

    let flows = HttpFlowClient::new(config.flows.clone(), timeout)?;
    let agent = AgentClient::new(config.agent.clone(), timeout)?;
    let store = Store::new(&config.data_dir);

    let mode = if args.chat {
        EntryMode::Conversational
    } else {
        EntryMode::Form
    };

    let mut engine = PlannerEngine::new(
        mode,
        store,
        Collaborators {
            extractor: Box::new(flows.clone()),
            agent: Box::new(agent),
            fallback: Box::new(flows.clone()),
            generator: Box::new(flows),
        },
    );

    let text = read_description(&args)?;
    info!("Extracting trip details");
    engine.submit_free_text(&text).await?;

    let mut form = engine
        .clarification_form()
        .context("no trip details after extraction")?;
    apply_overrides(&mut form, &args);
    print_clarification(&form);

    info!("Fetching place recommendations");
    let places = engine.submit_clarification(form).await?.to_vec();
    print_places(&places);

    let selected = select_places(&places, &args)?;
    println!(
        "Generating an itinerary with {} selected place(s)...",
        selected.len()
    );

    let itinerary = engine.submit_selection(selected).await?;
    print_itinerary(&itinerary);
    println!("\nItinerary saved to {:?}", config.data_dir);

    if args.chat {
        println!("\n--- Transcript ---");
        for message in engine.transcript() {
            let who = match message.sender {
                Sender::User => "you",
                Sender::Bot => "bot",
            };
            println!("[{}] {}", who, message.content);
        }
    }

    Ok(())
}

fn read_description(args: &PlanArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read trip description from stdin")?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        bail!("no trip description given (pass TEXT or pipe it on stdin)");
    }
    Ok(trimmed.to_string())
}

fn apply_overrides(form: &mut ClarifiedDetails, args: &PlanArgs) {
    if let Some(destination) = &args.destination {
        form.destination = destination.clone();
    }
    if let Some(interests) = &args.interests {
        form.interests = interests.clone();
    }
    if let Some(budget) = &args.budget {
        form.budget = Budget::from_loose(budget);
    }
    if let Some(trip_type) = &args.trip_type {
        form.trip_type = TripType::from_loose(trip_type);
    }
    if let Some(travel_dates) = &args.travel_dates {
        form.travel_dates = travel_dates.clone();
    } else if let (Some(from), Some(to)) = (args.from, args.to) {
        form.travel_dates = format!("{} to {}", from.format("%b %-d"), to.format("%b %-d"));
    }
    if let Some(adults) = args.adults {
        form.adults = adults;
    }
    if let Some(kids) = args.kids {
        form.kids = kids;
    }
    if let Some(kid_ages) = &args.kid_ages {
        form.kid_ages = kid_ages.clone();
    }
    if let Some(mode) = &args.mode_of_travel {
        form.mode_of_travel = mode.clone();
    }
}

fn print_clarification(form: &ClarifiedDetails) {
    println!("\nTrip details:");
    println!("  Destination:    {}", form.destination);
    println!("  Travel dates:   {}", form.travel_dates);
    println!("  Budget:         {}", form.budget);
    println!("  Trip type:      {}", form.trip_type);
    println!("  Interests:      {}", form.interests);
    println!("  Travelers:      {} adults, {} kids", form.adults, form.kids);
    if !form.kid_ages.is_empty() {
        println!("  Kid ages:       {}", form.kid_ages);
    }
    println!("  Mode of travel: {}", form.mode_of_travel);
}

fn select_places(
    places: &[crate::trip::Place],
    args: &PlanArgs,
) -> anyhow::Result<Vec<crate::trip::Place>> {
    if args.all {
        return Ok(places.to_vec());
    }
    let Some(indices) = &args.select else {
        bail!(
            "choose places with --select (e.g. --select 1,3) or --all; \
             {} places are listed above",
            places.len()
        );
    };

    let mut selected = Vec::new();
    for &idx in indices {
        if idx == 0 || idx > places.len() {
            bail!("--select index {} out of range (1..={})", idx, places.len());
        }
        selected.push(places[idx - 1].clone());
    }
    Ok(selected)
}
