pub mod balance;
pub mod championship_ranking;
pub mod periods;
pub mod ranking;
pub mod service;
pub mod snapshot;
pub mod top_scorers;

mod handlers;
mod types;

pub use balance::{balance, BalanceSummary};
pub use championship_ranking::{
    championship_ranking, championship_years, CHAMPIONSHIP_RANKING_LIMIT,
};
pub use handlers::{get_balance, get_championship_ranking, get_top_scorers, list_periods};
pub use periods::{generate_periods, DateRange, Dated, QuarterPeriod};
pub use ranking::{PlayerIndex, RankedPlayer};
pub use service::StatsService;
pub use snapshot::{LeagueSnapshot, SnapshotSources};
pub use top_scorers::{top_scorers, ScorerFilter};
pub use types::{ChampionshipRankingQuery, ChampionshipRankingResponse, TopScorersQuery};
