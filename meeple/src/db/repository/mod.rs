mod games;
mod user_games;

pub use games::GameRepository;
pub use user_games::UserGameRepository;
