pub mod member;
pub mod movie;
pub mod reaction;
pub mod review;
pub mod watchlist;

pub use member::Member;
pub use movie::{Movie, MovieDetail, NewMovie};
pub use reaction::{ReactionCounts, ReactionKind, ViewerReaction};
pub use review::{MyReview, Review, ReviewDraft, DESCRIPTION_MAX_CHARS, SCORE_MAX};
pub use watchlist::WatchlistEntry;
