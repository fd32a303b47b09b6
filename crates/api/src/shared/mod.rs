pub mod reference_date;
pub mod usecase;
