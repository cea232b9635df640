pub use super::activity::Entity as Activity;
pub use super::board::Entity as Board;
pub use super::board_column::Entity as BoardColumn;
pub use super::board_member::Entity as BoardMember;
pub use super::card::Entity as Card;
pub use super::card_member::Entity as CardMember;
pub use super::user::Entity as User;
