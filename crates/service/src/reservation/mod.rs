pub mod add_guest;
pub mod apply_anniversary_discount;
pub mod correct_booker;
pub mod create_reservation;
pub mod delete_reservation;
pub mod file_damage;
pub mod get_damage_claims;
pub mod get_most_expensive;
pub mod get_reservation;
pub mod get_reservations;
pub mod search_reservations;
