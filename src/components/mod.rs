//! Reusable view components shared by the pages.

pub mod comment_card;
pub mod form_field;
pub mod layout;
pub mod post_list;
pub mod post_card;
pub mod route_gate;
