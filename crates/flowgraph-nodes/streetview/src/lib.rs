//! Google Street View fetcher node for flowgraph.
//!
//! Takes a street address (or `lat,lng` coordinates) and fetches the
//! matching image from the Street View Static API. Publishes two outputs:
//! - `street_view_image` — reference URL of the persisted image
//! - `status` — human-readable result message, success or failure

mod node;
mod params;
mod request;
mod response;

pub use node::{StreetViewNode, API_KEY_VARIABLE, SERVICE};
pub use params::{RequestParameters, Source};
pub use request::{build_url, validate, BASE_URL};
pub use response::{classify, FailureKind, UpstreamFailure};
