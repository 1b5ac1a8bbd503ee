pub mod card;
pub mod level;
pub mod monster;
pub mod stage;
pub mod user;

pub use card::{Card, CardRow, CardType};
pub use level::Level;
pub use monster::{Monster, MonsterGrade, MonsterRow};
pub use stage::Stage;
pub use user::{NewUser, ProgressUpdate, UserProfile, UserRecord};
