mod activity;
mod board;
mod board_column;
mod board_member;
mod card;
mod card_member;
