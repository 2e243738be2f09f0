use tokio::runtime::Runtime;

/// Builds the runtime that drives the connections of the shared default client.
pub(crate) fn new(worker_threads: usize) -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads.max(1))
        .thread_name("httpdiff-client")
        .enable_all()
        .build()
}
