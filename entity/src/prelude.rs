pub use super::article::Entity as Article;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
