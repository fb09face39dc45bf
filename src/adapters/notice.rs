use tracing::{info, warn};

use kb_core::ports::{Notice, NoticeKind, NoticePort};

/// Notice surface that writes notices to the log.
#[derive(Debug, Default)]
pub struct TracingNoticeSink;

impl NoticePort for TracingNoticeSink {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Info => info!(message = %notice.message, "notice"),
            NoticeKind::Error => warn!(
                message = %notice.message,
                retryable = notice.retryable,
                dismissable = notice.dismissable,
                "error notice"
            ),
        }
    }
}
