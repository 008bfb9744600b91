pub use super::animes::Entity as Animes;
