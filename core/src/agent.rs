//! Per-call agent construction.

use ureq::tls::TlsConfig;
use ureq::Agent;

/// Builds the agent used for a single request.
///
/// Status codes are never turned into errors here; the helpers return
/// 4xx/5xx bodies as data. When `ignore_tls_errors` is set, the agent
/// accepts any server certificate and skips hostname verification —
/// an explicit opt-in for talking to self-signed test endpoints.
pub(crate) fn build_agent(ignore_tls_errors: bool) -> Agent {
    let mut config = Agent::config_builder().http_status_as_error(false);
    if ignore_tls_errors {
        config = config.tls_config(TlsConfig::builder().disable_verification(true).build());
    }
    config.build().new_agent()
}
