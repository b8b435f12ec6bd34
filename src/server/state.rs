use crate::config::Config;
use crate::geocode::Resolver;

pub struct AppState {
    pub resolver: Resolver,
    pub config: Config,
}
