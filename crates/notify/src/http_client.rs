use std::sync::OnceLock;

use tracing::debug;

/// Install the aws-lc-rs rustls provider once per process. Both the Bot API
/// client and the SMTP transport need a process-wide provider.
pub fn install_rustls_provider() {
    static PROVIDER_INSTALLED: OnceLock<()> = OnceLock::new();
    PROVIDER_INSTALLED.get_or_init(|| {
        if let Err(e) = rustls::crypto::aws_lc_rs::default_provider().install_default() {
            debug!(existing_provider = ?e, "rustls CryptoProvider already installed");
        }
    });
}
