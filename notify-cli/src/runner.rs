use std::io::{self, Write};

use dealdrip_notify::NotificationService;
use tracing::debug;

use crate::cli::Invocation;
use crate::output;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Not enough arguments; usage was printed.
    Usage,
    /// At least one channel delivered.
    Delivered,
    /// No channel delivered.
    Failed,
    /// The service could not be set up.
    Errored,
}

impl RunStatus {
    /// Process exit status. Without `strict`, only a usage error is non-zero
    /// and callers read the outcome from stdout.
    pub fn exit_code(self, strict: bool) -> i32 {
        match (self, strict) {
            (Self::Usage, _) => 1,
            (Self::Delivered, _) => 0,
            (Self::Failed, true) => 2,
            (Self::Errored, true) => 1,
            (Self::Failed | Self::Errored, false) => 0,
        }
    }
}

/// Run one invocation, printing the stdout markers to `out`.
///
/// `build` is only called once the arguments are known to be complete, so a
/// usage error never touches the configuration or the network.
pub async fn run<F, W>(invocation: Option<Invocation>, build: F, out: &mut W) -> io::Result<RunStatus>
where
    F: FnOnce() -> dealdrip_notify::Result<NotificationService>,
    W: Write,
{
    let Some(invocation) = invocation else {
        output::write_usage(out)?;
        return Ok(RunStatus::Usage);
    };

    let service = match build() {
        Ok(service) => service,
        Err(e) => {
            output::write_error(out, &e)?;
            return Ok(RunStatus::Errored);
        }
    };

    let outcome = match invocation {
        Invocation::Send {
            title,
            message,
            product_url,
        } => {
            debug!(%product_url, "Product URL is not included in the notification");
            service.send_notification(&title, &message, None).await
        }
        Invocation::Test => service.test_notifications().await,
    };

    output::write_outcome(out, &outcome)?;
    Ok(if outcome.success {
        RunStatus::Delivered
    } else {
        RunStatus::Failed
    })
}
