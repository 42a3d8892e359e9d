use item_summary::{util, Config, Handler, Invocation, ResponseEnvelope};
use lambda_runtime::{handler_fn, Context, Error};
use serde_json::Value;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _logger = util::init_log()?;

    let config = Config::from_env();
    log::info!(
        "endpoint {}, max retries {}, timeout {:?}",
        config.api_url,
        config.max_retries,
        config.timeout
    );
    let handler = Arc::new(Handler::new(config, util::Trace::global()));

    lambda_runtime::run(handler_fn(move |_event: Value, ctx: Context| {
        let handler = Arc::clone(&handler);
        async move { summarize(&handler, ctx).await }
    }))
    .await?;
    Ok(())
}

async fn summarize(handler: &Handler, ctx: Context) -> Result<ResponseEnvelope, Error> {
    log::info!("request {} against {}", ctx.request_id, handler.config().api_url);
    let invocation = Invocation::from_lambda(&ctx);
    Ok(handler.handle(&invocation).await)
}
