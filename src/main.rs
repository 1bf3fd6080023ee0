use anyhow::Context;
use env_logger::Env;
use question_harvest::{
    configuration::{get_configuration, SourceSettings},
    services::{Droid, SnapshotSite},
    startup::{prepare_and_run, run},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let report = match &configuration.source {
        SourceSettings::Live => {
            let droid = Droid::launch(
                &configuration.browser,
                configuration.extraction.poll_interval(),
            )
            .await
            .context("Failed to start browser session.")?;

            let outcome = prepare_and_run(&droid.new_page(), &configuration).await;

            if let Err(e) = droid.close().await {
                log::error!("Failed to close browser session: {:?}", e);
            }
            outcome?
        }
        SourceSettings::Snapshot { directory } => {
            let site = SnapshotSite::from_dir(directory)?;
            run(&site.new_page(), &configuration).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
