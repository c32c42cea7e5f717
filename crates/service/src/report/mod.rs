pub mod generate_income_summary;
pub mod get_checkin_list;
pub mod get_income_summaries;
pub mod get_insurance_claims;
