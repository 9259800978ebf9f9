use avionics_acu::{Acu, Config, Stdout};
use smol_macros::{main, Executor};
use tracing_subscriber::EnvFilter;

main! {
    async fn main(ex: &Executor<'_>) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "avionics_acu=info".into()),
            )
            .with_writer(std::io::stderr)
            .init();

        // Set a handler that sends a message through a channel.
        let (ctrl_c_sender, ctrl_c_receiver) = async_broadcast::broadcast(10);
        let handle = move || {
            ctrl_c_sender.try_broadcast(()).ok();
        };
        ctrlc::set_handler(handle)?;

        let config = Config::default();
        let report = Acu::from_config(&config, Stdout).run(ex, ctrl_c_receiver).await;
        tracing::info!(
            cycles = report.producer.cycles,
            pushed = report.producer.pushed,
            delivered = report.delivered,
            warnings = report.producer.warnings,
            interrupted = report.producer.interrupted,
            "run complete",
        );
        Ok(())
    }
}
