pub mod add_member_form;
pub mod data_stores;
pub mod membership_queries;
pub mod membership_view;
