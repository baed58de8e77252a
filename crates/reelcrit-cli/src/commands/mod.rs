use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reelcrit_api::{ApiError, ReviewApi};
use reelcrit_config::{Config, PathManager, SessionStore};
use reelcrit_core::Session;

pub mod account;
pub mod config;
pub mod movie;
pub mod reaction;
pub mod review;
pub mod search;
pub mod watchlist;

/// Config, session, and an API handle wired together for one invocation.
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
    pub session: Session,
    pub api: ReviewApi,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config = Config::load(&paths.config_file()).map_err(|e| eyre!("{}", e))?;
        let session = Session::init(SessionStore::new(paths.session_file()))
            .map_err(|e| eyre!("{}", e))?;
        let api =
            ReviewApi::new(config.base_url()).with_token(session.token().map(str::to_owned));
        tracing::debug!("using backend {}", api.base_url());
        Ok(Self {
            paths,
            config,
            session,
            api,
        })
    }

    /// Terminal failure for one command. Expiry takes the one-way
    /// invalidation path and surfaces the re-login prompt exactly once;
    /// everything else is reported as-is, no retries.
    pub fn fail(&mut self, err: ApiError, output: &Output) -> color_eyre::Report {
        if err.is_session_expired() {
            let acted = self.session.invalidate().unwrap_or(false);
            if acted {
                output.warn("Your session has expired and was cleared.");
                output.println(format!(
                    "Log in again at {} and then run: reelcrit login --token <TOKEN>",
                    self.config.login_url()
                ));
            }
            return eyre!("session expired");
        }
        eyre!("{}", err)
    }

    /// Guard for commands that cannot run anonymously.
    pub fn require_login(&self, output: &Output) -> Result<()> {
        if self.session.is_active() {
            return Ok(());
        }
        output.println(format!(
            "Log in at {} and then run: reelcrit login --token <TOKEN>",
            self.config.login_url()
        ));
        Err(eyre!("not logged in"))
    }
}
