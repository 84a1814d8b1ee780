//! Standalone runner for the Street View node.
//!
//! Drives one execution outside the full host: env-backed credential
//! store, local-directory file store, real HTTP transport.

use argh::FromArgs;
use flowgraph_node_sdk::{
    load_config, run_node, setup_logging, EnvConfigStore, HostContext, LocalStaticFileStore,
    LogSink, ReqwestTransport,
};
use std::sync::Arc;
use streetview::{RequestParameters, StreetViewNode};

#[derive(FromArgs)]
/// Fetch a Street View image for an address
struct Args {
    /// path to a YAML parameter file (optional)
    #[argh(option, short = 'c')]
    config: Option<String>,

    /// street address or lat,lng coordinates (overrides the config file)
    #[argh(option, short = 'a')]
    address: Option<String>,

    /// image size as widthxheight (overrides the config file)
    #[argh(option, short = 's')]
    size: Option<String>,

    /// directory where fetched images are written
    #[argh(option, short = 'o', default = "String::from(\"images\")")]
    output_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let args: Args = argh::from_env();

    let mut params: RequestParameters = match &args.config {
        Some(path) => load_config(path)?,
        None => RequestParameters::default(),
    };
    if let Some(address) = args.address {
        params.address = address;
    }
    if let Some(size) = args.size {
        params.size = size;
    }

    let ctx = HostContext {
        config_store: Arc::new(EnvConfigStore),
        file_store: Arc::new(LocalStaticFileStore::new(&args.output_dir)),
        http: Arc::new(ReqwestTransport::new()),
    };

    run_node::<StreetViewNode>(ctx, params, &LogSink).await?;

    Ok(())
}
