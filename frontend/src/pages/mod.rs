pub mod bills;
pub mod dashboard;
pub mod login;
pub mod new_bill;
