use dcrdesk_schema::{DcResult, ErrorInfoContext};
use tokio::runtime::{Builder, Runtime};

pub fn build_simple_runtime(threads: usize, name: impl Into<String> + Sized) -> DcResult<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(threads)
        .thread_name(name)
        .thread_stack_size(3 * 1024 * 1024)
        .enable_all()
        .build()
        .error_info("Failed to build tokio runtime")
}
