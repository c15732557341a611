pub use tldr_text::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tldr_text::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
