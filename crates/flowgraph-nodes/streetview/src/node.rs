//! The Street View node: orchestration of one fetch execution.

use flowgraph_node_sdk::prelude::*;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::params::RequestParameters;
use crate::request;
use crate::response::{self, UpstreamFailure};

/// Config store service name the API key is filed under.
pub const SERVICE: &str = "Google_Maps";

/// Variable name of the API key within the service.
pub const API_KEY_VARIABLE: &str = "GOOGLE_MAPS_API_KEY";

/// Fixed deadline for the single HTTP GET.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches a Street View image for an address and publishes it as a
/// persisted-file artifact plus a status message.
pub struct StreetViewNode {
    ctx: HostContext,
    params: RequestParameters,
}

impl From<UpstreamFailure> for NodeError {
    fn from(failure: UpstreamFailure) -> Self {
        NodeError::Upstream(failure.message)
    }
}

#[async_trait]
impl GraphNode for StreetViewNode {
    type Config = RequestParameters;

    fn metadata() -> NodeMetadata {
        node_metadata!(outputs: &["street_view_image", "status"])
    }

    fn new(ctx: HostContext, config: RequestParameters) -> Result<Self, NodeError> {
        Ok(Self {
            ctx,
            params: config,
        })
    }

    fn validate(&self) -> Vec<String> {
        let api_key = self.ctx.config_store.get_secret(SERVICE, API_KEY_VARIABLE);
        request::validate(api_key.is_some(), &self.params.address, &self.params.size)
    }

    async fn process(&self, outputs: &dyn OutputSink) -> Result<(), NodeError> {
        match self.fetch().await {
            Ok(reference_url) => {
                outputs.publish("street_view_image", Artifact::ImageUrl(reference_url));
                outputs.publish(
                    "status",
                    Artifact::Text(format!(
                        "Street View image fetched successfully for: {}",
                        self.params.address
                    )),
                );
                Ok(())
            }
            Err(err) => {
                // The status output must carry an explanation even when
                // the image output stays absent.
                let message = format!("Failed to fetch Street View image: {err}");
                log::error!("{}", message);
                outputs.publish("status", Artifact::Text(message));
                Err(err)
            }
        }
    }
}

impl StreetViewNode {
    /// One attempt: build the URL, GET it, classify, persist the bytes.
    /// Returns the reference URL of the persisted image.
    async fn fetch(&self) -> Result<String, NodeError> {
        let api_key = self
            .ctx
            .config_store
            .get_secret(SERVICE, API_KEY_VARIABLE)
            .ok_or_else(|| {
                NodeError::Config(format!("No API key found for service '{SERVICE}'"))
            })?;

        let url = request::build_url(&self.params, &api_key);
        log::info!("Requesting Street View image for: {}", self.params.address);

        let response = self.ctx.http.get(&url, REQUEST_TIMEOUT).await?;
        let image_data = response::classify(response.status, response.body)?;

        let filename = image_filename(unix_time_secs());
        let image_url = self.ctx.file_store.save(&image_data, &filename).await?;
        log::info!("Street View image saved: {}", image_url);

        Ok(image_url)
    }
}

fn unix_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn image_filename(unix_secs: u64) -> String {
    format!("streetview_{unix_secs}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_convention() {
        assert_eq!(image_filename(1700000000), "streetview_1700000000.jpg");
    }

    #[test]
    fn metadata_declares_both_outputs() {
        let metadata = StreetViewNode::metadata();
        assert_eq!(metadata.name, "streetview");
        assert_eq!(metadata.outputs, &["street_view_image", "status"]);
    }
}
