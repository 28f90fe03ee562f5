//! Display fixtures
//!
//! The fallback route drawn for trains whose record carries no route. It is a
//! rendering placeholder only; nothing treats it as the train's real path.

use crate::entities::{Route, Station};
use crate::value_objects::{StationStatus, StationTime};

/// Pune Junction to Nagpur Junction, 849 km, with Ahmednagar as current station
///
/// The origin departs at `departure_time` and the destination is reached at
/// `estimated_arrival`, both taken from the train being displayed.
pub fn fallback_route(departure_time: &str, estimated_arrival: &str) -> Route {
    use StationStatus::{Completed, Current, Upcoming};

    let stop = |code: &str, name: &str, arr: StationTime, dep: StationTime, km: f64, status, pf: &str| {
        Station::new(code, name, km)
            .with_times(arr, dep)
            .with_status(status)
            .with_platform(pf)
    };

    Route::from_trusted(vec![
        stop(
            "PUNE",
            "Pune Junction",
            StationTime::RouteStart,
            StationTime::at(departure_time),
            0.0,
            Completed,
            "PF 1",
        ),
        stop(
            "DD",
            "Daund Junction",
            StationTime::at("07:45"),
            StationTime::at("07:50"),
            72.0,
            Completed,
            "PF 2",
        ),
        stop(
            "ANG",
            "Ahmednagar",
            StationTime::at("09:15"),
            StationTime::at("09:20"),
            154.0,
            Current,
            "PF 1",
        ),
        stop(
            "MMR",
            "Manmad Junction",
            StationTime::at("11:30"),
            StationTime::at("11:35"),
            307.0,
            Upcoming,
            "PF 3",
        ),
        stop(
            "BSL",
            "Bhusaval Junction",
            StationTime::at("13:45"),
            StationTime::at("13:50"),
            481.0,
            Upcoming,
            "PF 2",
        ),
        stop(
            "MKU",
            "Malkapur",
            StationTime::at("14:30"),
            StationTime::at("14:32"),
            541.0,
            Upcoming,
            "PF 1",
        ),
        stop(
            "NGP",
            "Nagpur Junction",
            StationTime::at(estimated_arrival),
            StationTime::RouteEnd,
            849.0,
            Upcoming,
            "PF 4",
        ),
    ])
}
