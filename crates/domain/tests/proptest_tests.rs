//! Property-based tests for the route model and fleet view
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::fleet_view::{self, StatusCounts, StatusFilter};
use domain::route_model::{classify_stations, compute_position, derive_distance_markers};
use domain::{Route, Station, StationStatus, Train, TrainId, TrainStatus};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn station_status() -> impl Strategy<Value = StationStatus> {
    prop_oneof![
        Just(StationStatus::Completed),
        Just(StationStatus::Current),
        Just(StationStatus::Upcoming),
        Just(StationStatus::Unknown),
    ]
}

fn train_status() -> impl Strategy<Value = TrainStatus> {
    prop_oneof![
        Just(TrainStatus::OnTime),
        Just(TrainStatus::Delayed),
        Just(TrainStatus::Halted),
    ]
}

/// Arbitrary station lists, including malformed ones (unsorted distances,
/// several current stations)
fn any_stations() -> impl Strategy<Value = Vec<Station>> {
    prop::collection::vec((0.0f64..2000.0, station_status()), 1..12).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (km, status))| Station::new(format!("S{i}"), format!("Station {i}"), km).with_status(status))
            .collect()
    })
}

/// Well-formed routes: sorted distances, completed / current / upcoming order
fn well_formed_stations() -> impl Strategy<Value = (Vec<Station>, usize)> {
    prop::collection::vec(0.0f64..500.0, 2..10).prop_flat_map(|mut legs| {
        legs.sort_by(f64::total_cmp);
        let len = legs.len();
        (Just(legs), 0..len)
    })
    .prop_map(|(distances, current)| {
        let stations = distances
            .iter()
            .enumerate()
            .map(|(i, km)| {
                let status = match i.cmp(&current) {
                    std::cmp::Ordering::Less => StationStatus::Completed,
                    std::cmp::Ordering::Equal => StationStatus::Current,
                    std::cmp::Ordering::Greater => StationStatus::Upcoming,
                };
                Station::new(format!("S{i}"), format!("Station {i}"), *km).with_status(status)
            })
            .collect();
        (stations, current)
    })
}

fn fleet() -> impl Strategy<Value = Vec<Train>> {
    prop::collection::vec(("[A-Z]{2}-[0-9]{3,5}", "[A-Za-z ]{3,20}", train_status()), 0..20)
        .prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (number, name, status))| Train::new(i.to_string(), number, name, status))
                .collect()
        })
}

// ============================================================================
// Route model
// ============================================================================

mod route_model_tests {
    use super::*;

    proptest! {
        #[test]
        fn position_is_always_a_percentage(stations in any_stations()) {
            let position = compute_position(&stations).unwrap();
            prop_assert!((0.0..=100.0).contains(&position));
        }

        #[test]
        fn no_current_station_means_zero(stations in any_stations()) {
            let stations: Vec<Station> = stations
                .into_iter()
                .map(|s| {
                    let status = if s.status == StationStatus::Current {
                        StationStatus::Completed
                    } else {
                        s.status
                    };
                    s.with_status(status)
                })
                .collect();
            prop_assert_eq!(compute_position(&stations).unwrap(), 0.0);
        }

        #[test]
        fn position_matches_current_share_of_total((stations, current) in well_formed_stations()) {
            let total = stations.last().map_or(0.0, |s| s.distance_km);
            let position = compute_position(&stations).unwrap();
            if total > 0.0 {
                let expected = stations[current].distance_km / total * 100.0;
                prop_assert!((position - expected).abs() < 1e-9);
            } else {
                prop_assert_eq!(position, 0.0);
            }
        }

        #[test]
        fn last_station_current_is_full_progress((stations, _) in well_formed_stations()) {
            let last = stations.len() - 1;
            let stations: Vec<Station> = stations
                .into_iter()
                .enumerate()
                .map(|(i, s)| {
                    let status = if i == last { StationStatus::Current } else { StationStatus::Completed };
                    s.with_status(status)
                })
                .collect();
            let total = stations[last].distance_km;
            let position = compute_position(&stations).unwrap();
            if total > 0.0 {
                prop_assert_eq!(position, 100.0);
            } else {
                prop_assert_eq!(position, 0.0);
            }
        }

        #[test]
        fn well_formed_lists_build_routes((stations, _) in well_formed_stations()) {
            let route = Route::new(stations.clone());
            prop_assert!(route.is_ok());
            let route = route.unwrap();
            prop_assert_eq!(route.position_percent(), compute_position(&stations).unwrap());
        }

        #[test]
        fn classification_is_one_to_one(stations in any_stations()) {
            let displays = classify_stations(&stations).unwrap();
            prop_assert_eq!(displays.len(), stations.len());
            for (display, station) in displays.iter().zip(&stations) {
                prop_assert_eq!(&display.station, station);
                prop_assert_eq!(display.state.category, station.status.category());
            }
        }

        #[test]
        fn markers_bracket_the_route(stations in any_stations()) {
            let markers = derive_distance_markers(&stations).unwrap();
            let end = stations.last().map_or(0.0, |s| s.distance_km);
            prop_assert_eq!(markers.start_km, 0.0);
            prop_assert_eq!(markers.end_km, end);
            prop_assert!((markers.midpoint_km as f64 - end / 2.0).abs() <= 0.5);
        }
    }
}

// ============================================================================
// Fleet view
// ============================================================================

mod fleet_view_tests {
    use super::*;

    fn matches_query(train: &Train, query: &str) -> bool {
        let query = query.to_lowercase();
        train.number.to_lowercase().contains(&query) || train.name.to_lowercase().contains(&query)
    }

    proptest! {
        #[test]
        fn counts_sum_to_fleet_size(trains in fleet()) {
            let sum: usize = TrainStatus::ALL
                .iter()
                .map(|s| fleet_view::count_by_status(&trains, *s))
                .sum();
            prop_assert_eq!(sum, trains.len());

            let counts = StatusCounts::tally(&trains);
            prop_assert_eq!(counts.on_time + counts.delayed + counts.halted, counts.total);
            prop_assert_eq!(counts.total, trains.len());
        }

        #[test]
        fn empty_query_and_all_is_identity(trains in fleet()) {
            prop_assert_eq!(fleet_view::filter(&trains, "", StatusFilter::All), trains);
        }

        #[test]
        fn filter_returns_an_ordered_subsequence(trains in fleet(), query in "[a-z]{0,3}", status in train_status()) {
            let visible = fleet_view::filter(&trains, &query, StatusFilter::Only(status));
            let mut source = trains.iter();
            for train in &visible {
                prop_assert_eq!(train.status, status);
                prop_assert!(matches_query(train, &query));
                prop_assert!(source.any(|t| t == train));
            }

            for train in trains.iter().filter(|t| !visible.contains(t)) {
                prop_assert!(train.status != status || !matches_query(train, &query));
            }
        }

        #[test]
        fn halt_then_let_go_restores_on_time(trains in fleet(), index in 0usize..20) {
            prop_assume!(!trains.is_empty());
            let id = trains[index % trains.len()].id.clone();
            let restored = fleet_view::let_go(&fleet_view::halt(&trains, &id), &id);

            for (before, after) in trains.iter().zip(&restored) {
                if before.id == id {
                    prop_assert_eq!(after.status, TrainStatus::OnTime);
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }

        #[test]
        fn unknown_id_leaves_fleet_unchanged(trains in fleet()) {
            let missing = TrainId::new("no-such-train");
            prop_assert_eq!(fleet_view::halt(&trains, &missing), trains.clone());
            prop_assert_eq!(fleet_view::let_go(&trains, &missing), trains);
        }
    }
}

#[test]
fn middle_station_of_even_route_is_halfway() {
    let stations = vec![
        Station::new("A", "A", 0.0).with_status(StationStatus::Completed),
        Station::new("B", "B", 100.0).with_status(StationStatus::Current),
        Station::new("C", "C", 200.0).with_status(StationStatus::Upcoming),
    ];
    assert!((compute_position(&stations).unwrap() - 50.0).abs() < f64::EPSILON);
}
