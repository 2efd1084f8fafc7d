use crate::store::Settings;
use crate::types::{AppResult, TournamentId};
use anyhow::anyhow;
use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Debug, PartialEq)]
pub enum AppMode {
    Tui,
    Headless { tournament_id: TournamentId },
}

#[derive(Parser, Debug)]
#[clap(name="worldcup", about = "Ideal-type bracket tournaments in your terminal", author, version, long_about = None)]
pub struct AppArgs {
    #[clap(long, short = 'n', action=ArgAction::Set, help = "Nickname to log in with")]
    pub nickname: String,
    #[clap(long, short = 'w', action=ArgAction::Set, default_value = "", help = "Password for the nickname")]
    pub password: String,
    #[clap(long, short = 'a', action=ArgAction::Set, help = "Set API base url")]
    api_url: Option<String>,
    #[clap(long, short = 't', action=ArgAction::Set, help = "Open this tournament right away")]
    pub tournament: Option<TournamentId>,
    #[clap(long, action=ArgAction::Set, help = "Set random seed for bracket shuffles")]
    pub seed: Option<u64>,
    #[clap(long, short='u', action=ArgAction::SetTrue, help = "Disable UI and auto-play the tournament")]
    disable_ui: bool,
    #[clap(long, short = 'l', action=ArgAction::Set, default_value = "info", help = "Set log level")]
    pub log_level: LevelFilter,
}

impl AppArgs {
    pub fn app_mode(&self) -> AppResult<AppMode> {
        if !self.disable_ui {
            return Ok(AppMode::Tui);
        }

        let tournament_id = self
            .tournament
            .ok_or(anyhow!("--disable-ui needs a tournament to play (--tournament <ID>)"))?;
        Ok(AppMode::Headless { tournament_id })
    }

    pub fn api_base_url(&self, settings: &Settings) -> String {
        if let Some(url) = self.api_url.as_ref() {
            url.clone()
        } else {
            settings.api_base_url.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppArgs, AppMode};
    use crate::store::Settings;
    use crate::types::AppResult;
    use clap::Parser;
    use log::LevelFilter;

    #[test]
    fn test_nickname_is_required() {
        assert!(AppArgs::try_parse_from(["worldcup"]).is_err());
    }

    #[test]
    fn test_defaults() -> AppResult<()> {
        let args = AppArgs::try_parse_from(["worldcup", "-n", "mina"])?;
        assert_eq!(args.nickname, "mina");
        assert_eq!(args.password, "");
        assert_eq!(args.log_level, LevelFilter::Info);
        assert_eq!(args.app_mode()?, AppMode::Tui);
        assert_eq!(
            args.api_base_url(&Settings::default()),
            Settings::default().api_base_url
        );
        Ok(())
    }

    #[test]
    fn test_headless_needs_tournament() -> AppResult<()> {
        let args = AppArgs::try_parse_from(["worldcup", "-n", "mina", "--disable-ui"])?;
        assert!(args.app_mode().is_err());

        let args =
            AppArgs::try_parse_from(["worldcup", "-n", "mina", "-u", "--tournament", "4"])?;
        assert_eq!(args.app_mode()?, AppMode::Headless { tournament_id: 4 });
        Ok(())
    }

    #[test]
    fn test_api_url_overrides_settings() -> AppResult<()> {
        let args = AppArgs::try_parse_from([
            "worldcup",
            "-n",
            "mina",
            "--api-url",
            "https://worldcup.example/api",
            "--log-level",
            "debug",
        ])?;
        assert_eq!(
            args.api_base_url(&Settings::default()),
            "https://worldcup.example/api"
        );
        assert_eq!(args.log_level, LevelFilter::Debug);
        Ok(())
    }
}
