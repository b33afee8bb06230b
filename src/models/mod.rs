pub mod answers;
pub mod game;
pub mod platform;

pub use answers::{AnswerValue, QuizAnswers};
pub use game::{GameEntry, GameId, ResultRecord};
pub use platform::{Platform, PlatformFlags};
