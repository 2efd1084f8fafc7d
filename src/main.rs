use clap::Parser;
use log::info;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use worldcup::api::ApiClient;
use worldcup::app::App;
use worldcup::args::{AppArgs, AppMode};
use worldcup::headless::run_headless;
use worldcup::store::{load_settings, store_path, LOG_FILENAME};
use worldcup::tui::Tui;
use worldcup::types::AppResult;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> AppResult<()> {
    let args = AppArgs::parse();

    let logfile_path = store_path(LOG_FILENAME)?;
    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new("{d} {l} - {m}{n}")))
        .build(logfile_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(args.log_level))?;

    log4rs::init_config(config)?;

    let settings = load_settings()?;
    let mode = args.app_mode()?;
    let api = ApiClient::new(&args.api_base_url(&settings), settings.request_timeout())?;
    info!("Using API at {}", api.base_url());

    let user = api.login(&args.nickname, &args.password).await?;
    info!("Logged in as {} (#{})", user.nickname, user.user_id);

    match mode {
        AppMode::Headless { tournament_id } => {
            run_headless(&api, &user, tournament_id, args.seed).await?
        }
        AppMode::Tui => {
            let tui = Tui::new_local()?;
            let mut app = App::new(api, user, args.seed, args.tournament);
            app.run(tui).await?;
        }
    }

    Ok(())
}
