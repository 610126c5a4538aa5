use anyhow::Context;
use colored::Colorize;
use serde::Serialize;

use crate::domain::analytics::baseline::BaselineSet;
use crate::domain::analytics::hourly_profile::MIN_RELIABLE_SAMPLES;
use crate::domain::ports::store::{BuildingStore, ReadingStore};
use crate::domain::value_objects::day_type::DayType;
use crate::presentation::cli::formatters::report_fmt::print_section_header;

#[derive(Serialize)]
struct ProfileOutput {
    building_id: String,
    day_type: DayType,
    hours: Vec<HourRow>,
}

#[derive(Serialize)]
struct HourRow {
    hour: u32,
    mean: f64,
    std_dev: f64,
    count: usize,
}

/// Print the hourly consumption profile of a building's stored history for
/// one day type.
///
/// # Errors
///
/// Returns an error if the building is not registered, a store read fails, or
/// JSON serialization fails.
pub fn run_profile<S>(
    store: &S,
    building_id: &str,
    day_type: DayType,
    json: bool,
) -> anyhow::Result<()>
where
    S: BuildingStore + ReadingStore,
{
    let building = store
        .get_building(building_id)?
        .with_context(|| format!("unknown building: {building_id}"))?;
    let readings = store.get_readings(building_id)?;
    let baselines = BaselineSet::from_readings(&readings);
    let profile = &baselines.for_day(day_type).profile;

    if json {
        let output = ProfileOutput {
            building_id: building.id,
            day_type,
            hours: profile
                .iter()
                .map(|(hour, bucket)| HourRow {
                    hour,
                    mean: bucket.mean,
                    std_dev: bucket.std_dev,
                    count: bucket.count,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    print_section_header(&format!("{} — hourly profile ({day_type})", building.name));
    println!(
        "  {:>4}  {:>10}  {:>10}  {:>7}",
        "hour", "mean kWh", "std dev", "samples"
    );
    for (hour, bucket) in profile.iter() {
        if bucket.count == 0 {
            continue;
        }
        let row = format!(
            "  {hour:>4}  {:>10.2}  {:>10.2}  {:>7}",
            bucket.mean, bucket.std_dev, bucket.count
        );
        if bucket.count < MIN_RELIABLE_SAMPLES {
            println!("{}", row.dimmed());
        } else {
            println!("{row}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::entities::building::Building;
    use crate::domain::entities::reading::Reading;
    use crate::infrastructure::persistence::in_memory_store::InMemoryStore;
    use chrono::{DateTime, Utc};

    fn staged_store() -> InMemoryStore {
        let readings: Vec<Reading> = (1..=5)
            .map(|d| {
                let timestamp = DateTime::parse_from_rfc3339(&format!("2024-01-0{d}T09:00:00Z"))
                    .expect("parse")
                    .with_timezone(&Utc);
                Reading::new(timestamp, 50.0, 20.0, 10)
            })
            .collect();
        let building = Building {
            id: "b1".to_string(),
            name: "Riverside Office".to_string(),
            building_type: "office".to_string(),
            floor_area_m2: None,
        };
        let store = InMemoryStore::new();
        store.save_building(&building).expect("save building");
        store.append_readings("b1", &readings).expect("append");
        store
    }

    #[test]
    fn profiles_the_stored_history_in_both_modes() {
        let store = staged_store();
        run_profile(&store, "b1", DayType::Weekday, false).expect("human output");
        run_profile(&store, "b1", DayType::Weekday, true).expect("json output");
    }

    #[test]
    fn weekend_profile_of_weekday_data_is_empty() {
        let store = staged_store();
        run_profile(&store, "b1", DayType::Weekend, false).expect("human output");
    }

    #[test]
    fn unregistered_building_is_an_error() {
        let store = InMemoryStore::new();
        assert!(run_profile(&store, "nope", DayType::Weekday, false).is_err());
    }
}
