mod location;
mod notice;
mod place;
mod route;
mod snapshot;

pub use location::Coordinates;
pub use notice::{Notice, NoticeKind};
pub use place::{PlaceQuery, PlaceSuggestion};
pub use route::Route;
pub use snapshot::Snapshot;
