//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::time::Duration;

use crate::application::patch::PatchUseCase;
use crate::config::{config_dir, Config, NetworkConfig};
use crate::domain::ports::RemoteResult;
use crate::domain::services::sha256_hex;
use crate::infrastructure::{
    FileSessionProvider, FlutterBuild, HttpClientFactory, Timeouts, YamlProjectConfig,
};

/// Type alias for the concrete PatchUseCase with all dependencies
pub type ConcretePatchUseCase =
    PatchUseCase<FileSessionProvider, FlutterBuild, YamlProjectConfig, HttpClientFactory>;

/// Create a patch use case for the project at `project_root`
///
/// Credentials come from the airlift config directory (or
/// `AIRLIFT_API_KEY`), the build runs in `project_root`, and remote calls
/// go to `config.hosted_url`. Fails only if the HTTP client cannot be
/// initialised.
pub fn create_patch_use_case(
    project_root: &Path,
    config: &Config,
) -> RemoteResult<ConcretePatchUseCase> {
    let sessions = FileSessionProvider::new(config_dir().as_deref());
    let build = FlutterBuild::new(project_root);
    let project = YamlProjectConfig::new(project_root);
    let clients = HttpClientFactory::new(&config.hosted_url, timeouts(&config.network))?;

    Ok(PatchUseCase::new(sessions, build, project, clients, sha256_hex))
}

fn timeouts(network: &NetworkConfig) -> Timeouts {
    Timeouts {
        connect: Duration::from_secs(network.connect_timeout_secs),
        request: network.request_timeout_secs.map(Duration::from_secs),
    }
}
