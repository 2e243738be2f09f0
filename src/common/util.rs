use crate::common::data::Error;
use crossbeam_utils::sync::{Parker, Unparker};
use futures_util::{pin_mut, task::ArcWake};
use http_body_util::BodyExt;
use std::{
    future::Future,
    io::Read,
    sync::Arc,
    task::{Context, Poll},
};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ===============================================================================================
// Environment
// ===============================================================================================
pub(crate) fn read_env(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value,
        Err(_) => default.to_string(),
    }
}

// ===============================================================================================
// Bodies
// ===============================================================================================

/// Reads everything from a reader into a string.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn read_all<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| Error::BodyReadError(e.to_string()))?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Like [read_all], but panics if the reader fails. A body that cannot be read is a broken
/// test setup, not a mismatch.
pub fn must_read_all<R: Read>(reader: R) -> String {
    read_all(reader).unwrap_or_else(|e| panic!("{}", e))
}

/// Collects an HTTP body to the end. The body is consumed.
pub(crate) async fn read_body_async<B>(body: B) -> Result<String, Error>
where
    B: hyper::body::Body,
    B::Error: Into<BoxError>,
{
    let collected = body.collect().await.map_err(|e| {
        let e: BoxError = e.into();
        Error::BodyReadError(e.to_string())
    })?;
    let bytes = collected.to_bytes();

    tracing::trace!("Read body with {} bytes", bytes.len());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Like [read_body_async], but blocks the calling thread until the body is complete.
///
/// Must not be used on a body that is fed by the task the caller runs in, such as the
/// `Incoming` body of a request inside a hyper service: that task cannot make progress
/// while it is blocked here.
pub(crate) fn read_body<B>(body: B) -> Result<String, Error>
where
    B: hyper::body::Body,
    B::Error: Into<BoxError>,
{
    read_body_async(body).join()
}

// ===============================================================================================
// Futures
// ===============================================================================================

/// Extension trait for efficiently blocking on a future.
pub(crate) trait Join: Future {
    fn join(self) -> <Self as Future>::Output;
}

impl<F: Future> Join for F {
    fn join(self) -> <Self as Future>::Output {
        struct ThreadWaker(Unparker);

        impl ArcWake for ThreadWaker {
            fn wake_by_ref(arc_self: &Arc<Self>) {
                arc_self.0.unpark();
            }
        }

        let parker = Parker::new();
        let waker = futures_util::task::waker(Arc::new(ThreadWaker(parker.unparker().clone())));
        let mut context = Context::from_waker(&waker);

        let future = self;
        pin_mut!(future);

        loop {
            match future.as_mut().poll(&mut context) {
                Poll::Ready(output) => return output,
                Poll::Pending => parker.park(),
            }
        }
    }
}
