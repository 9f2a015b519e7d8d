// Core algorithm exports
pub mod aggregate;
pub mod dealbreakers;
pub mod factors;
pub mod flags;
pub mod matcher;
pub mod normalize;
pub mod similarity;

pub use aggregate::{aggregate, AggregateOutcome};
pub use dealbreakers::check_deal_breakers;
pub use factors::{score_all, score_factor};
pub use flags::generate_flags;
pub use matcher::{MatchError, Matcher, ALGORITHM_VERSION};
pub use normalize::{normalize, normalize_at};
