use lyrics_search::{
    config::AppConfig,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> color_eyre::Result<()> {
    let config = setup()?;

    let mut app = App::new(config)?;
    app.run().await
}

fn setup() -> color_eyre::Result<AppConfig> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()?;
    Ok(AppConfig::from_env()?)
}
