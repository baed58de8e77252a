pub mod reactions;
pub mod review;
pub mod search;
pub mod session;
pub mod watchlist;

pub use reactions::{submit_reaction, viewer_reactions, ReactionRefresh};
pub use review::{submit_review, validate_draft, DraftError, ReviewSubmitError};
pub use search::{SearchPager, FIRST_PAGE_SIZE, NEXT_PAGE_SIZE};
pub use session::{Session, SessionState};
pub use watchlist::{add_and_refresh, remove_and_refresh, resolve_watchlist};
