// handlers/user/mod.rs - Player progression

pub mod progress; // POST|PUT /user/progress - full replace of stat columns

pub use progress::progress_save;
