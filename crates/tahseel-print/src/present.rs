use std::path::PathBuf;
use std::process::{Command, Stdio};

/// What happened to the presentation attempt. The new context's lifecycle
/// (load, print, close) is its own; the caller never awaits it.
#[derive(Debug)]
pub enum PresentOutcome {
    Opened { path: PathBuf },
    /// The viewing context could not be created; the user was notified and
    /// nothing else happened.
    Blocked { reason: String },
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Open the composed document in a new, independent viewing context.
///
/// Platform failures are converted into a user-facing notification via
/// `notify` instead of an error; there is no enclosing UI error boundary
/// guaranteed to catch one at this point in the flow.
pub fn present(document: &str, notify: &dyn Fn(&str)) -> PresentOutcome {
    present_with_opener(document, OPENER, notify)
}

fn present_with_opener(document: &str, opener: &str, notify: &dyn Fn(&str)) -> PresentOutcome {
    let path = match write_handoff_file(document) {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(event = "print_handoff_failed", error = %e);
            notify("تعذر تجهيز مستند الطباعة");
            return PresentOutcome::Blocked {
                reason: e.to_string(),
            };
        }
    };

    // Fire-and-forget: the spawned context prints and closes on its own
    // schedule (the trigger is embedded in the document itself).
    let spawned = Command::new(opener)
        .arg(&path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => {
            tracing::info!(event = "print_context_opened", path = %path.display());
            PresentOutcome::Opened { path }
        }
        Err(e) => {
            tracing::error!(event = "print_context_blocked", opener = opener, error = %e);
            notify("تعذر فتح نافذة الطباعة");
            PresentOutcome::Blocked {
                reason: e.to_string(),
            }
        }
    }
}

/// The handoff file lives in the OS temp dir and is deliberately kept: the
/// viewing context loads it after this function returns.
fn write_handoff_file(document: &str) -> std::io::Result<PathBuf> {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .prefix("tahseel-print-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(document.as_bytes())?;
    file.flush()?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn blocked_opener_notifies_user() {
        let messages = RefCell::new(Vec::new());
        let notify = |msg: &str| messages.borrow_mut().push(msg.to_string());
        let outcome = present_with_opener("<html></html>", "tahseel-no-such-opener", &notify);
        match outcome {
            PresentOutcome::Blocked { .. } => {}
            other => panic!("expected Blocked, got {other:?}"),
        }
        assert_eq!(messages.borrow().len(), 1);
        assert!(messages.borrow()[0].contains("الطباعة"));
    }

    #[cfg(unix)]
    #[test]
    fn opened_context_is_fire_and_forget() {
        let notify = |_: &str| panic!("no notification expected");
        let outcome = present_with_opener("<html></html>", "true", &notify);
        match outcome {
            PresentOutcome::Opened { path } => {
                assert!(path.exists());
                let _ = std::fs::remove_file(path);
            }
            other => panic!("expected Opened, got {other:?}"),
        }
    }
}
